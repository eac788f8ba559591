// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-engine: Capability negotiation and the notification lifecycle.

pub mod capabilities;
pub mod env;
pub mod notification;
pub mod notifier;
pub mod report;

pub use capabilities::Capabilities;
pub use env::Settings;
pub use notification::Notification;
pub use notifier::Notifier;
pub use report::report_native_error;

/// Action identifier of the single action a notification may offer.
pub const DEFAULT_ACTION: &str = "default";

/// Label shown on that action.
pub const DEFAULT_ACTION_LABEL: &str = "View";
