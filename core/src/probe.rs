// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Probe command templates and the timed invocation itself.
//!
//! The measuring is curl's job: each invocation formats its own timing line
//! to stdout through a `-w` write-out template. This module only builds the
//! argument vector for the selected output mode and supervises the child.

use std::ffi::OsString;
use std::path::PathBuf;

use tokio::process::Command;
use ttfb_common::config::OutputMode;

use crate::error::ProbeError;

const MINIMAL_WRITEOUT: &str =
    "  StartXfer Time (TTFB): %{time_starttransfer}   Total Time: %{time_total}\n";

const FULL_WRITEOUT: &str = "  Lookup Time: %{time_namelookup}   Connect Time: %{time_connect}   AppCon Time: %{time_appconnect}   PreXfer Time: %{time_pretransfer}   Redirect Time: %{time_redirect}   StartXfer Time (TTFB): %{time_starttransfer}   Total Time: %{time_total}\n";

const DEFAULT_WRITEOUT: &str = "  Lookup Time: %{time_namelookup}   Connect Time: %{time_connect}   StartXfer Time (TTFB): %{time_starttransfer}   Total Time: %{time_total}\n";

/// One resolved probe binary pointed at one target URL.
pub struct Probe {
    curl: PathBuf,
    url: String,
}

impl Probe {
    pub fn new(curl: PathBuf, url: String) -> Self {
        Self { curl, url }
    }

    /// The fixed argument template for a timed request: follow redirects,
    /// discard the body, defeat intermediate caches, stay silent apart
    /// from the write-out line.
    pub fn timing_args(&self, mode: OutputMode) -> Vec<OsString> {
        let writeout = match mode {
            OutputMode::Minimal => MINIMAL_WRITEOUT,
            OutputMode::Full => FULL_WRITEOUT,
            OutputMode::Default => DEFAULT_WRITEOUT,
        };

        [
            "-L",
            "-o",
            "/dev/null",
            "-H",
            "Cache-Control: no-cache",
            "-s",
            "-w",
            writeout,
            self.url.as_str(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect()
    }

    /// Runs one timed request. The child inherits stdout and writes its
    /// timing line there directly; nothing is reformatted on this side.
    ///
    /// # Errors
    ///
    /// [`ProbeError::Failed`] on a non-zero exit, [`ProbeError::Spawn`]
    /// when the child cannot be started. Either one aborts the remaining
    /// iterations of the timing loop.
    pub async fn measure(&self, mode: OutputMode) -> Result<(), ProbeError> {
        let status = Command::new(&self.curl)
            .args(self.timing_args(mode))
            .status()
            .await
            .map_err(|source| ProbeError::Spawn {
                path: self.curl.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ProbeError::Failed {
                status: status.code().unwrap_or(1),
            });
        }

        Ok(())
    }
}
