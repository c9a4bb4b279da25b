// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Two-stage URL validation.
//!
//! A cheap syntax gate first, then a HEAD reachability probe with a short
//! connect timeout. Both stages run before the timing loop so a malformed
//! or dead URL never costs `count` slow iterations.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use ttfb_common::debug;

use crate::error::UrlError;

/// The URL must carry an explicit scheme; nothing else is inspected here.
///
/// # Errors
///
/// Returns [`UrlError::InvalidSyntax`] when the prefix is missing.
pub fn check_syntax(url: &str) -> Result<(), UrlError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }

    Err(UrlError::InvalidSyntax {
        url: url.to_string(),
    })
}

/// Issues a HEAD request with a 1 second connect timeout, body and
/// progress discarded. Any non-success exit from the probe counts as
/// unreachable; HTTP error statuses are folded in via `--fail`.
///
/// # Errors
///
/// [`UrlError::Unreachable`] when the probe exits non-zero,
/// [`UrlError::CheckFailed`] when it cannot be invoked at all.
pub async fn check_reachable(curl: &Path, url: &str) -> Result<(), UrlError> {
    let status = Command::new(curl)
        .args([
            "-o",
            "/dev/null",
            "--silent",
            "--head",
            "--fail",
            "--connect-timeout",
            "1",
            url,
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| UrlError::CheckFailed {
            url: url.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(UrlError::Unreachable {
            url: url.to_string(),
        });
    }

    debug!("{url} answered the reachability probe");
    Ok(())
}
