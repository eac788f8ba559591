// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("send")
        .stdout_has("caps")
        .stdout_has("info");
}

#[test]
fn send_help_lists_options() {
    cli()
        .args(&["send", "--help"])
        .passes()
        .stdout_has("--title")
        .stdout_has("--tag")
        .stdout_has("--icon-color")
        .stdout_has("--timeout");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn send_requires_title() {
    cli().args(&["send"]).exits_with(2).stderr_has("--title");
}

#[test]
fn bad_icon_color_is_rejected_before_binding() {
    cli()
        .args(&["send", "--title", "t", "--icon-color", "green"])
        .exits_with(2)
        .stderr_has("RRGGBB");
}
