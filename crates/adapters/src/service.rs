// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traits for the bound notification service and its native handles.

use nudge_core::{Bitmap, CapabilitySet, Expiry, NativeError, TagId};
use serde::Serialize;

/// Name, vendor and version the service reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub spec_version: String,
}

/// A bound, process-wide notification service.
///
/// All calls are synchronous and made from the thread that drives the
/// service's event loop.
pub trait NotifyService {
    type Handle: NativeNotification + 'static;

    /// Whether the service has already been initialized in this process.
    fn is_initted(&self) -> bool;

    /// One-time initialization; `app_name` is passed through opaquely.
    fn init(&self, app_name: &str) -> bool;

    /// The capabilities the live service advertises right now.
    fn server_caps(&self) -> CapabilitySet;

    fn server_info(&self) -> Option<ServerInfo>;

    /// Construct an unsubmitted native notification.
    fn new_notification(&self, summary: &str, body: &str) -> Result<Self::Handle, NativeError>;

    /// Intern a tag into the service's identity space.
    fn intern_tag(&self, tag: &str) -> TagId;

    /// Run one non-blocking iteration of the service's event loop, delivering
    /// any pending callbacks. Returns whether anything was dispatched.
    fn dispatch_pending(&self) -> bool;
}

/// An exclusively owned native notification.
///
/// Dropping the handle disconnects its callbacks and releases it.
pub trait NativeNotification {
    type Image;

    /// Called when the service reports the notification closed for any reason.
    fn connect_closed(&mut self, callback: Box<dyn Fn()>);

    /// Register an action button; `callback` receives the action identifier.
    fn add_action(&mut self, action: &str, label: &str, callback: Box<dyn Fn(&str)>);

    fn set_image(&mut self, image: &Self::Image);

    fn set_expiry(&mut self, expiry: Expiry);

    /// Give the notification a service identity so later notifications with
    /// the same identity replace or append to it.
    fn assign_identity(&mut self, id: TagId);

    fn set_hint_string(&mut self, key: &str, value: &str);

    fn set_hint_bool(&mut self, key: &str, value: bool);

    /// Submit for display.
    fn show(&mut self) -> Result<(), NativeError>;

    /// Ask the service to close the notification. The effect arrives later
    /// through the closed callback.
    fn close(&mut self) -> Result<(), NativeError>;
}

/// Converts in-memory bitmaps into the service's native image type.
pub trait BitmapPresenter {
    type Image;

    /// `None` when the bitmap cannot be converted.
    fn native_image(&self, bitmap: &Bitmap) -> Option<Self::Image>;
}

/// The native image type a service's handles accept.
pub type ImageOf<S> = <<S as NotifyService>::Handle as NativeNotification>::Image;
