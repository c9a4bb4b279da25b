use std::path::PathBuf;

/// Selects which timing fields the probe reports and how wide the framed
/// output block is drawn.
///
/// The two CLI flags backing this are mutually exclusive, so the illegal
/// "minimal and full at once" combination has no representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Time-to-first-byte and total time only.
    Minimal,
    /// Every timing field the probe can report: lookup, connect,
    /// app-connect, pre-transfer, redirect, TTFB and total.
    Full,
    /// Lookup, connect, TTFB and total time.
    #[default]
    Default,
}

impl OutputMode {
    pub fn from_flags(minimal: bool, full: bool) -> Self {
        if minimal {
            OutputMode::Minimal
        } else if full {
            OutputMode::Full
        } else {
            OutputMode::Default
        }
    }

    /// Width of the separator lines framing the results, sized to the
    /// longest timing line each mode can produce.
    pub const fn screen_width(self) -> usize {
        match self {
            OutputMode::Minimal => 58,
            OutputMode::Full => 182,
            OutputMode::Default => 107,
        }
    }
}

/// Immutable configuration for a single timing run.
///
/// Built once from the parsed command line plus the resolved probe path,
/// then passed by reference through the rest of the pipeline. Nothing
/// mutates it after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Echo the resolved configuration before the run starts.
    pub verbose: bool,

    /// Raise the log filter to debug level.
    pub debug: bool,

    /// Which command template the timing loop uses.
    pub mode: OutputMode,

    /// How many timed requests to issue, validated to [1, 25] by the
    /// argument parser.
    pub count: u8,

    /// The target URL. Syntax and reachability are checked before the
    /// timing loop runs.
    pub url: String,

    /// Derived from `mode`; cached here so the presentation layer never
    /// recomputes it.
    pub screen_width: usize,

    /// Absolute path of the external HTTP probe, resolved by the
    /// prerequisite check.
    pub curl_path: PathBuf,
}
