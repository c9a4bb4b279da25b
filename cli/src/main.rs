// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # ttfb CLI Entry Point
//!
//! Bootstraps the process and owns its lifecycle: prerequisite check,
//! argument parsing, logging setup, and the single place where results
//! become exit codes.
//!
//! The pipeline below is strictly linear - resolve the probe binary,
//! parse and validate arguments, build the immutable [`Config`], validate
//! the URL, then run the timing loop. Lower layers return errors instead
//! of exiting; every process-exit decision is made here, including the
//! Ctrl-C notice and the pass-through of a failed probe's own exit status.

mod commands;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use ttfb_common::config::Config;
use ttfb_common::{error, info, system};
use ttfb_core::error::{PrerequisiteError, ProbeError};
use ttfb_core::{prereqs, validate};

use crate::commands::{CommandLine, measure};
use crate::terminal::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let paths = match prereqs::check_prerequisites(prereqs::REQUIRED_COMMANDS) {
        Ok(paths) => paths,
        Err(err) => return prerequisite_failure(&err),
    };

    let commands = match CommandLine::try_parse() {
        Ok(commands) => commands,
        Err(err) => return parse_failure(&err),
    };

    logging::init(commands.debug);

    let Some(curl_path) = paths.get("curl").cloned() else {
        error!("probe path missing after prerequisite check");
        return ExitCode::FAILURE;
    };

    let cfg: Config = commands.to_config(curl_path);

    tokio::select! {
        result = run(&cfg) => exit_code_for(result),
        _ = tokio::signal::ctrl_c() => {
            system!("\n[*] Exiting Program\n");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: &Config) -> anyhow::Result<()> {
    if cfg.verbose {
        info!("Config: {cfg:?}");
    }

    validate::check_syntax(&cfg.url)?;
    validate::check_reachable(&cfg.curl_path, &cfg.url).await?;

    measure::measure(cfg).await
}

fn exit_code_for(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            // A failed timed request surfaces the probe's own exit status.
            match err.downcast_ref::<ProbeError>() {
                Some(ProbeError::Failed { status }) => {
                    ExitCode::from(u8::try_from(*status).unwrap_or(1))
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}

/// The prerequisite check runs before anything else, even argument
/// parsing, so the tracing subscriber is not up yet; this prints directly
/// to stderr instead.
fn prerequisite_failure(err: &PrerequisiteError) -> ExitCode {
    eprintln!("{} Prerequisite check failed:", "[-]".red().bold());
    for command in &err.missing {
        eprintln!("{} {command} is not installed", "[-]".red().bold());
    }
    ExitCode::FAILURE
}

/// `--help` and `--version` arrive as parse "errors" but are not failures.
fn parse_failure(err: &clap::Error) -> ExitCode {
    let _ = err.print();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
