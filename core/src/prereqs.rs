// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Prerequisite binary resolution.
//!
//! The entire pipeline shells out to an external HTTP probe, so its absence
//! must be reported before anything else happens. There is no fallback
//! implementation; a missing command is fatal.

use std::collections::HashMap;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::PrerequisiteError;

/// Commands this tool cannot run without.
pub const REQUIRED_COMMANDS: &[&str] = &["curl"];

/// Resolves every required command against the process `PATH`.
///
/// # Errors
///
/// Returns [`PrerequisiteError`] listing every command that could not be
/// located, so the operator sees all of them in one pass.
pub fn check_prerequisites(
    commands: &[&str],
) -> Result<HashMap<String, PathBuf>, PrerequisiteError> {
    let search_path = env::var_os("PATH").unwrap_or_default();
    resolve_with_path(commands, &search_path)
}

/// Same as [`check_prerequisites`] but against an explicit search path.
///
/// # Errors
///
/// Returns [`PrerequisiteError`] when any command is missing.
pub fn resolve_with_path(
    commands: &[&str],
    search_path: &OsStr,
) -> Result<HashMap<String, PathBuf>, PrerequisiteError> {
    let mut resolved: HashMap<String, PathBuf> = HashMap::new();
    let mut missing: Vec<String> = Vec::new();

    for &command in commands {
        match find_in_path(command, search_path) {
            Some(path) => {
                resolved.insert(command.to_string(), path);
            }
            None => missing.push(command.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(PrerequisiteError { missing })
    }
}

fn find_in_path(command: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
