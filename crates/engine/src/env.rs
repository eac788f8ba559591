// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use nudge_adapters::libnotify::DEFAULT_CANDIDATES;

/// Set (to anything) to present notifications without action buttons.
///
/// Notify-OSD style shells render a notification that carries an action as a
/// modal dialog; this opts out of offering one.
pub const USE_UBUNTU_NOTIFIER: &str = "NUDGE_USE_UBUNTU_NOTIFIER";

/// Colon-separated library names or paths replacing the default candidates.
pub const LIBNOTIFY: &str = "NUDGE_LIBNOTIFY";

/// Whether the legacy presentation override is set.
pub fn use_ubuntu_notifier() -> bool {
    std::env::var_os(USE_UBUNTU_NOTIFIER).is_some()
}

/// Library candidates: `NUDGE_LIBNOTIFY` if it names any, else the defaults.
pub fn library_candidates() -> Vec<String> {
    let from_env: Vec<String> = std::env::var(LIBNOTIFY)
        .ok()
        .map(|v| v.split(':').filter(|s| !s.is_empty()).map(String::from).collect())
        .unwrap_or_default();
    if from_env.is_empty() {
        default_candidates()
    } else {
        from_env
    }
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

/// Process-level notification settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Never offer action buttons, whatever the service advertises.
    pub legacy_presentation: bool,
    /// Library variants the binding loader tries, in order.
    pub candidates: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { legacy_presentation: false, candidates: default_candidates() }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self { legacy_presentation: use_ubuntu_notifier(), candidates: library_candidates() }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
