// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Error taxonomy for the timing pipeline.
//!
//! Every failure here is terminal for the current invocation. Nothing in
//! this crate prints or exits; errors travel up to the CLI entry point,
//! which owns every process-exit decision.

use std::path::PathBuf;

use thiserror::Error;

/// One or more required external commands could not be resolved on the
/// executable search path.
#[derive(Debug, Error)]
#[error("prerequisite check failed: missing {}", missing.join(", "))]
pub struct PrerequisiteError {
    /// Command names that resolution failed for, in the order they were
    /// requested.
    pub missing: Vec<String>,
}

/// The target URL failed one of the two pre-flight checks.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid URL - must start with http:// or https://")]
    InvalidSyntax { url: String },

    /// The reachability probe exited non-zero: DNS failure, refused
    /// connection, connect timeout or an HTTP error status.
    #[error("{url} does not exist - aborting")]
    Unreachable { url: String },

    /// The probe could not even be invoked.
    #[error("An unexpected error occurred while checking {url}")]
    CheckFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// A timed request failed mid-loop. Remaining iterations are abandoned
/// and the probe's own exit status is surfaced to the operator.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe exited with status {status} - aborting remaining runs")]
    Failed {
        /// The child's exit code, or 1 if it was killed by a signal.
        status: i32,
    },

    #[error("failed to launch probe at {path}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
