// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The timing run: a framed header, `count` sequential probe invocations,
//! a closing border. Each invocation blocks until the child exits and
//! writes its own timing line between the borders.

use ttfb_common::config::Config;
use ttfb_core::probe::Probe;

use crate::terminal::print;

pub async fn measure(cfg: &Config) -> anyhow::Result<()> {
    print::results_header(cfg);

    let probe = Probe::new(cfg.curl_path.clone(), cfg.url.clone());
    for _ in 0..cfg.count {
        probe.measure(cfg.mode).await?;
    }

    print::closing_border(cfg);
    Ok(())
}
