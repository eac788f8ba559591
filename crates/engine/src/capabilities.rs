// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability Negotiator: boolean questions about the live service.
//!
//! Every answer is a fresh round-trip to the service. Nothing is memoized,
//! so a service that changes what it advertises is seen immediately.

use nudge_adapters::NotifyService;
use nudge_core::capability::{ACTIONS, APPEND, SOUND, X_CANONICAL_APPEND};

use crate::env::Settings;

pub struct Capabilities<'a, S: NotifyService> {
    service: &'a S,
    legacy_presentation: bool,
}

impl<'a, S: NotifyService> Capabilities<'a, S> {
    pub fn new(service: &'a S, settings: &Settings) -> Self {
        Self { service, legacy_presentation: settings.legacy_presentation }
    }

    /// Whether the service currently advertises `name` (exact match).
    pub fn has_capability(&self, name: &str) -> bool {
        self.service.server_caps().contains(name)
    }

    /// Whether a notification may offer an action button.
    ///
    /// Always false under the legacy presentation override.
    pub fn supports_action_buttons(&self) -> bool {
        if self.legacy_presentation {
            return false;
        }
        self.has_capability(ACTIONS)
    }

    /// The hint requesting append presentation, preferring the standard name.
    pub fn append_hint(&self) -> Option<&'static str> {
        if self.has_capability(APPEND) {
            Some(APPEND)
        } else if self.has_capability(X_CANONICAL_APPEND) {
            Some(X_CANONICAL_APPEND)
        } else {
            None
        }
    }

    pub fn supports_sound(&self) -> bool {
        self.has_capability(SOUND)
    }
}

#[cfg(test)]
#[path = "capabilities_tests.rs"]
mod tests;
