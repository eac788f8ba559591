// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

/// How long the service keeps a notification on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// The service's own default.
    Default,
    /// Stays until closed.
    Never,
    After(Duration),
}

impl Expiry {
    /// Milliseconds in the notification protocol's encoding: `-1` default,
    /// `0` never, otherwise a positive timeout clamped to `i32::MAX`.
    pub fn as_millis(self) -> i32 {
        match self {
            Expiry::Default => -1,
            Expiry::Never => 0,
            Expiry::After(d) => i32::try_from(d.as_millis()).unwrap_or(i32::MAX).max(1),
        }
    }
}
