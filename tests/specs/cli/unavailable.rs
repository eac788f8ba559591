// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behaviour when no notification library can be bound

use crate::prelude::*;

#[test]
fn send_reports_service_unavailable() {
    cli()
        .args(&["send", "--title", "Build complete", "--timeout", "0"])
        .exits_with(2)
        .stdout_is_empty()
        .stderr_has("notification service unavailable")
        .stderr_has(MISSING_LIBRARY);
}

#[test]
fn caps_reports_service_unavailable() {
    cli().args(&["caps"]).exits_with(2).stderr_has("no notification library could be loaded");
}

#[test]
fn info_reports_service_unavailable() {
    cli().args(&["info", "--format", "json"]).exits_with(2).stdout_is_empty();
}

#[test]
fn every_candidate_is_reported() {
    let second = "/nonexistent/nudge-specs/libnotify.so";
    cli()
        .env("NUDGE_LIBNOTIFY", &format!("{MISSING_LIBRARY}:{second}"))
        .args(&["caps"])
        .exits_with(2)
        .stderr_has(MISSING_LIBRARY)
        .stderr_has(second);
}

#[test]
fn debug_logging_names_rejected_candidates() {
    cli()
        .env("NUDGE_LOG", "debug")
        .args(&["caps"])
        .exits_with(2)
        .stderr_has("DEBUG");
}
