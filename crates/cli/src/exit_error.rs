// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` rather than exiting themselves, so `main()`
//! owns process termination.

use std::fmt;

use nudge_adapters::BindError;

/// Generic failure.
pub const FAILURE: i32 = 1;
/// No notification service could be bound or initialized.
pub const SERVICE_UNAVAILABLE: i32 = 2;
/// The service refused to display the notification.
pub const SHOW_FAILED: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<BindError> for ExitError {
    fn from(err: BindError) -> Self {
        Self::new(SERVICE_UNAVAILABLE, format!("notification service unavailable: {err}"))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
