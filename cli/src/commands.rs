// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for the argument surface. Execution logic
//! lives in `commands/measure.rs`; this module only defines, validates and
//! translates user input.
//!
//! Validation that clap owns outright:
//!
//! * `--count` is parsed as an integer and range-checked to [1, 25] before
//!   anything runs; out-of-range input is rejected with the offending
//!   literal echoed back.
//! * `--minimal` and `--full` are mutually exclusive, so the config layer
//!   never sees both at once.
//!
//! [`CommandLine::to_config`] then decouples the external flag surface
//! from the internal [`Config`] record the pipeline runs on.

pub mod measure;

use std::path::PathBuf;

use clap::Parser;
use ttfb_common::config::{Config, OutputMode};

const VERSION_STRING: &str = concat!("Current version of ttfb is v", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "ttfb")]
#[command(about = "Display the time-to-first-byte for any given url.")]
#[command(version = VERSION_STRING)]
pub struct CommandLine {
    /// The URL to test
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: String,

    /// How many times to test [1-25]
    #[arg(
        short = 'c',
        long = "count",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=25)
    )]
    pub count: u8,

    /// Show minimal set of timing values
    #[arg(short = 'm', long = "minimal", conflicts_with = "full")]
    pub minimal: bool,

    /// Show full set of timing values
    #[arg(short = 'f', long = "full")]
    pub full: bool,

    /// Verbose output - echo the resolved configuration before the run
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Very noisy - enable debug level logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl CommandLine {
    /// Maps the parsed arguments plus the resolved probe path into the
    /// immutable run configuration. All inputs are already validated, so
    /// this cannot fail.
    pub fn to_config(&self, curl_path: PathBuf) -> Config {
        let mode = OutputMode::from_flags(self.minimal, self.full);

        Config {
            verbose: self.verbose,
            debug: self.debug,
            mode,
            count: self.count,
            url: self.url.clone(),
            screen_width: mode.screen_width(),
            curl_path,
        }
    }
}
