// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nudge caps`: list what the service advertises

use anyhow::Result;
use nudge_adapters::NotifyService;

use crate::output::{to_json, OutputFormat};

pub fn render<S: NotifyService>(service: &S, format: OutputFormat) -> Result<String> {
    let caps = service.server_caps();
    match format {
        OutputFormat::Text => Ok(caps.iter().map(|name| format!("{name}\n")).collect()),
        OutputFormat::Json => to_json(&caps),
    }
}

#[cfg(test)]
#[path = "caps_tests.rs"]
mod tests;
