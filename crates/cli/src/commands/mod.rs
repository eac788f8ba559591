// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod caps;
pub mod info;
pub mod send;

use nudge_adapters::libnotify::Libnotify;
use nudge_engine::{Notifier, Settings};

use crate::exit_error::ExitError;

/// Bind and initialize the notification service from the environment.
pub fn connect(app_name: &str) -> Result<Notifier<Libnotify>, ExitError> {
    let settings = Settings::from_env();
    tracing::debug!(candidates = ?settings.candidates, legacy = settings.legacy_presentation, "connecting");
    Ok(Notifier::connect(app_name, settings)?)
}
