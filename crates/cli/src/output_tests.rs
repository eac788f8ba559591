// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn without_color() {
    std::env::set_var("NO_COLOR", "1");
}

#[test]
#[serial]
fn field_pads_labels_to_a_column() {
    without_color();
    assert_eq!(field("server", "notify-osd"), "server:          notify-osd\n");
    assert_eq!(field("action buttons", "yes"), "action buttons:  yes\n");
}

#[test]
#[serial]
fn or_none_marks_missing_values() {
    without_color();
    assert_eq!(or_none(Some("append")), "append");
    assert_eq!(or_none(None), "none");
}

#[test]
fn yes_no_words() {
    assert_eq!(yes_no(true), "yes");
    assert_eq!(yes_no(false), "no");
}

#[test]
fn to_json_ends_with_newline() {
    let json = to_json(&["actions", "body"]).unwrap();
    assert!(json.ends_with("]\n"));
    let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vec!["actions", "body"]);
}

#[test]
fn output_format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
