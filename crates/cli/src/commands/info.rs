// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nudge info`: describe the bound service and what was negotiated

use anyhow::Result;
use nudge_adapters::{NotifyService, ServerInfo};
use nudge_core::CapabilitySet;
use nudge_engine::Notifier;
use serde::Serialize;

use crate::output::{field, or_none, to_json, yes_no, OutputFormat};

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub library: String,
    pub server: Option<ServerInfo>,
    pub capabilities: CapabilitySet,
    pub action_buttons: bool,
    pub append_hint: Option<&'static str>,
    pub sound: bool,
    pub legacy_presentation: bool,
}

impl InfoReport {
    pub fn collect<S: NotifyService>(notifier: &Notifier<S>, library: &str) -> Self {
        let negotiated = notifier.capabilities();
        Self {
            library: library.to_string(),
            server: notifier.service().server_info(),
            capabilities: notifier.service().server_caps(),
            action_buttons: negotiated.supports_action_buttons(),
            append_hint: negotiated.append_hint(),
            sound: negotiated.supports_sound(),
            legacy_presentation: notifier.settings().legacy_presentation,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Json => to_json(self),
        }
    }

    fn text(&self) -> String {
        let mut out = field("library", &self.library);
        match &self.server {
            Some(server) => {
                let name = format!("{} {} ({})", server.name, server.version, server.vendor);
                out.push_str(&field("server", &name));
                out.push_str(&field("spec version", &server.spec_version));
            }
            None => out.push_str(&field("server", &or_none(None))),
        }
        let caps: Vec<&str> = self.capabilities.iter().collect();
        let caps = if caps.is_empty() { or_none(None) } else { caps.join(", ") };
        out.push_str(&field("capabilities", &caps));
        out.push_str(&field("action buttons", yes_no(self.action_buttons)));
        out.push_str(&field("append hint", &or_none(self.append_hint)));
        out.push_str(&field("sound", yes_no(self.sound)));
        out.push_str(&field("legacy mode", yes_no(self.legacy_presentation)));
        out
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
