// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-adapters: Seams to the system notification service.
//!
//! The service is never linked at build time. [`loader::initialize`] binds
//! one of several library variants at runtime; everything above this crate
//! talks to it through [`NotifyService`] and [`NativeNotification`].

pub mod libnotify;
pub mod loader;
pub mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use loader::{initialize, BindError, Binder};
pub use service::{BitmapPresenter, ImageOf, NativeNotification, NotifyService, ServerInfo};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{
    FakeBinder, FakeImage, FakeNotificationRecord, FakeNotifyService, FakePresenter, HintValue,
};
