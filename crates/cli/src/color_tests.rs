// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

struct ColorEnv;

impl ColorEnv {
    fn forced() -> Self {
        std::env::set_var("COLOR", "1");
        std::env::remove_var("NO_COLOR");
        Self
    }

    fn disabled() -> Self {
        std::env::set_var("NO_COLOR", "1");
        std::env::remove_var("COLOR");
        Self
    }
}

impl Drop for ColorEnv {
    fn drop(&mut self) {
        std::env::remove_var("COLOR");
        std::env::remove_var("NO_COLOR");
    }
}

#[yare::parameterized(
    header  = { Tone::Header, 74 },
    literal = { Tone::Literal, 250 },
    context = { Tone::Context, 245 },
    muted   = { Tone::Muted, 240 },
)]
fn tone_codes(tone: Tone, code: u8) {
    assert_eq!(tone.code(), code);
}

#[test]
#[serial]
fn styles_plain_when_no_color() {
    let _env = ColorEnv::disabled();
    assert_eq!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_styled_when_forced() {
    let _env = ColorEnv::forced();
    assert_ne!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn paint_wraps_in_ansi_when_forced() {
    let _env = ColorEnv::forced();
    let painted = paint(Tone::Header, "server");
    assert_eq!(painted, "\x1b[38;5;74mserver\x1b[0m");
}

#[test]
#[serial]
fn no_color_wins_over_forced() {
    let _env = ColorEnv::forced();
    std::env::set_var("NO_COLOR", "1");
    assert!(!should_colorize());
    assert_eq!(paint(Tone::Muted, "none"), "none");
}
