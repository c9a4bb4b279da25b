// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

use std::ffi::OsString;

use ttfb_common::config::OutputMode;
use ttfb_core::error::{ProbeError, UrlError};
use ttfb_core::probe::Probe;
use ttfb_core::{prereqs, validate};

use crate::utils::StubProbe;

#[tokio::test]
async fn reachability_succeeds_against_a_healthy_probe() {
    let stub = StubProbe::counting(0).unwrap();

    let result = validate::check_reachable(&stub.path, "https://example.com").await;

    assert!(result.is_ok(), "reachability failed: {:?}", result.err());
    assert_eq!(stub.invocation_count(), 1);
}

#[tokio::test]
async fn unreachable_url_aborts_before_the_timing_phase() {
    // curl exits 22 for --fail on an HTTP error status
    let stub = StubProbe::counting(22).unwrap();

    let result = validate::check_reachable(&stub.path, "https://dead.example.com").await;

    assert!(matches!(result, Err(UrlError::Unreachable { .. })));
    // Only the HEAD check ran; no timing invocation ever happened.
    assert_eq!(stub.invocation_count(), 1);
}

#[tokio::test]
async fn reachability_probe_sends_a_capped_head_request() {
    let stub = StubProbe::recording().unwrap();

    validate::check_reachable(&stub.path, "https://example.com")
        .await
        .unwrap();

    let recorded = stub.recorded();
    for flag in ["--head", "--fail", "--silent", "--connect-timeout"] {
        assert!(recorded.contains(flag), "missing {flag} in: {recorded}");
    }
    assert!(recorded.contains("https://example.com"));
}

#[tokio::test]
async fn invalid_syntax_is_rejected_without_spawning_anything() {
    let stub = StubProbe::counting(0).unwrap();

    let result = validate::check_syntax("example.com");

    assert!(matches!(result, Err(UrlError::InvalidSyntax { .. })));
    assert_eq!(stub.invocation_count(), 0);
}

#[tokio::test]
async fn timing_loop_invokes_the_probe_exactly_count_times() {
    for count in [1usize, 3, 25] {
        let stub = StubProbe::counting(0).unwrap();
        let probe = Probe::new(stub.path.clone(), "https://example.com".into());

        for _ in 0..count {
            probe.measure(OutputMode::Default).await.unwrap();
        }

        assert_eq!(stub.invocation_count(), count, "count={count}");
    }
}

#[tokio::test]
async fn timing_invocation_passes_the_default_template_verbatim() {
    let stub = StubProbe::recording().unwrap();
    let probe = Probe::new(stub.path.clone(), "https://example.com".into());

    probe.measure(OutputMode::Default).await.unwrap();

    let recorded = stub.recorded();
    for expected in [
        "-L",
        "Cache-Control: no-cache",
        "Lookup Time: %{time_namelookup}",
        "StartXfer Time (TTFB): %{time_starttransfer}",
        "Total Time: %{time_total}",
        "https://example.com",
    ] {
        assert!(recorded.contains(expected), "missing {expected}");
    }
    // The default template must not carry the full-mode fields.
    assert!(!recorded.contains("%{time_appconnect}"));
    assert!(!recorded.contains("%{time_redirect}"));
}

#[tokio::test]
async fn mid_loop_probe_failure_aborts_remaining_iterations() {
    let stub = StubProbe::failing_after(2, 6).unwrap();
    let probe = Probe::new(stub.path.clone(), "https://example.com".into());

    let mut outcome = Ok(());
    for _ in 0..5 {
        if let Err(err) = probe.measure(OutputMode::Minimal).await {
            outcome = Err(err);
            break;
        }
    }

    assert!(matches!(outcome, Err(ProbeError::Failed { status: 6 })));
    // Two successes plus the failing third call; iterations four and five
    // never ran.
    assert_eq!(stub.invocation_count(), 3);
}

#[tokio::test]
async fn missing_prerequisites_are_listed_per_command() {
    let stub = StubProbe::counting(0).unwrap();
    let search = std::env::join_paths([stub.path.parent().unwrap()])
        .unwrap_or_else(|_| OsString::new());

    let resolved = prereqs::resolve_with_path(&["curl"], &search).unwrap();
    assert_eq!(resolved["curl"], stub.path);

    let err = prereqs::resolve_with_path(&["curl", "httpstat", "hey"], &search).unwrap_err();
    assert_eq!(err.missing, vec!["httpstat".to_string(), "hey".to_string()]);
}
