// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-core: Domain types for desktop notifications driven through a
//! runtime-bound notification service.

pub mod macros;

pub mod bitmap;
pub mod capability;
pub mod content;
pub mod delegate;
pub mod error;
pub mod expiry;
pub mod identity;
pub mod state;

pub use bitmap::{Bitmap, BitmapError};
pub use capability::CapabilitySet;
pub use content::NotificationContent;
#[cfg(any(test, feature = "test-support"))]
pub use delegate::FakeDelegate;
pub use delegate::{DelegateEvent, NotificationDelegate};
pub use error::NativeError;
pub use expiry::Expiry;
pub use identity::TagId;
pub use state::NotificationState;
