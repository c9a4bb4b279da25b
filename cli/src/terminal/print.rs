// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Writes the framed result block to stdout.
//!
//! The probe's own timing lines land between the header and the closing
//! border, written directly by the child process, so everything here must
//! go to stdout as well to keep the frame intact. Diagnostics go through
//! the tracing stack to stderr instead.

use colored::Colorize;
use ttfb_common::config::Config;

use crate::terminal::{colors, format};

pub const SCRIPT_TITLE: &str = "Time to First Byte Tester";

/// Border, title line, "Results for <url>" line, border.
pub fn results_header(cfg: &Config) {
    border(cfg.screen_width);
    println!(
        "{}",
        format::draw_line_with_text(cfg.screen_width, SCRIPT_TITLE, ' ', Some(colors::TITLE))
    );
    println!(
        "{}",
        format::draw_line_with_text(
            cfg.screen_width,
            &format!("Results for {}", cfg.url),
            ' ',
            Some(colors::URL),
        )
    );
    border(cfg.screen_width);
}

pub fn closing_border(cfg: &Config) {
    border(cfg.screen_width);
}

fn border(width: usize) {
    println!("{}", format::draw_line(width).color(colors::SEPARATOR));
}
