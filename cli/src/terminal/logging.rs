use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Wires up the global tracing subscriber: `RUST_LOG` wins when set,
/// otherwise `--debug` selects the debug level. Everything goes to stderr
/// so the stdout result frame stays clean.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(TtfbFormatter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders events as `[sym] message`, with the symbol chosen from the
/// level plus the `status` field our logging macros attach. Events tagged
/// `status = "system"` are operator notices and print dim, symbol-free.
pub struct TtfbFormatter;

impl<S, N> FormatEvent<S, N> for TtfbFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if visitor.status.as_deref() == Some("system") {
            return writeln!(writer, "{}", visitor.message.bright_black().bold());
        }

        let symbol: ColoredString = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => match visitor.status.as_deref() {
                Some("success") => "[+]".green().bold(),
                _ => "[»]".cyan().bold(),
            },
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        writeln!(writer, "{} {}", symbol, visitor.message)
    }
}

#[derive(Default)]
struct MessageVisitor {
    status: Option<String>,
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "status" {
            self.status = Some(value.to_string());
        }
    }
}
