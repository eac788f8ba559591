// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use nudge_adapters::FakeNotifyService;

#[test]
fn text_lists_one_capability_per_line() {
    let service = FakeNotifyService::with_caps(&["actions", "body", "x-canonical-append"]);
    let out = render(&service, OutputFormat::Text).unwrap();
    assert_eq!(out, "actions\nbody\nx-canonical-append\n");
}

#[test]
fn text_is_empty_without_capabilities() {
    let service = FakeNotifyService::new();
    assert_eq!(render(&service, OutputFormat::Text).unwrap(), "");
}

#[test]
fn json_is_a_plain_array() {
    let service = FakeNotifyService::with_caps(&["actions", "sound"]);
    let out = render(&service, OutputFormat::Json).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, vec!["actions", "sound"]);
}
