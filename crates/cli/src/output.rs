// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

use crate::color::{paint, Tone};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// One aligned `label: value` line.
pub fn field(label: &str, value: &str) -> String {
    let label = format!("{label}:");
    format!("{} {value}\n", paint(Tone::Header, &format!("{label:<16}")))
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// `value`, or a muted `none`.
pub fn or_none(value: Option<&str>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => paint(Tone::Muted, "none"),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
