// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification Lifecycle Manager.
//!
//! A [`Notification`] owns at most one native handle. The handle's callbacks
//! hold only a weak reference to the lifecycle, so callbacks arriving after
//! the notification is gone are dropped on the floor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use nudge_adapters::{BitmapPresenter, ImageOf, NativeNotification, NotifyService};
use nudge_core::{Expiry, NotificationContent, NotificationDelegate, NotificationState};

use crate::capabilities::Capabilities;
use crate::env::Settings;
use crate::report::report_native_error;
use crate::{DEFAULT_ACTION, DEFAULT_ACTION_LABEL};

/// Boolean hint asking the service not to play a sound.
pub const SUPPRESS_SOUND_HINT: &str = "suppress-sound";

struct Lifecycle<H> {
    state: NotificationState,
    handle: Option<H>,
    delegate: Weak<dyn NotificationDelegate>,
}

/// Move to `next` if legal, releasing the handle on terminal states.
///
/// The delegate is signalled after the borrow is released, and the released
/// handle is dropped after the delegate returns.
fn advance<H>(inner: &RefCell<Lifecycle<H>>, next: NotificationState) -> bool {
    let (released, delegate) = {
        let mut lifecycle = inner.borrow_mut();
        if !lifecycle.state.can_become(next) {
            tracing::debug!(from = %lifecycle.state, to = %next, "ignoring transition");
            return false;
        }
        lifecycle.state = next;
        let released = if next.is_terminal() { lifecycle.handle.take() } else { None };
        (released, lifecycle.delegate.clone())
    };

    if let (Some(event), Some(delegate)) = (next.signal(), delegate.upgrade()) {
        event.deliver(&*delegate);
    }
    drop(released);
    true
}

/// One on-screen alert and its native handle.
pub struct Notification<S: NotifyService> {
    service: Rc<S>,
    presenter: Rc<dyn BitmapPresenter<Image = ImageOf<S>>>,
    settings: Rc<Settings>,
    inner: Rc<RefCell<Lifecycle<S::Handle>>>,
}

impl<S: NotifyService> Notification<S> {
    pub(crate) fn new(
        service: Rc<S>,
        presenter: Rc<dyn BitmapPresenter<Image = ImageOf<S>>>,
        settings: Rc<Settings>,
        delegate: Weak<dyn NotificationDelegate>,
    ) -> Self {
        let lifecycle =
            Lifecycle { state: NotificationState::Created, handle: None, delegate };
        Self { service, presenter, settings, inner: Rc::new(RefCell::new(lifecycle)) }
    }

    pub fn state(&self) -> NotificationState {
        self.inner.borrow().state
    }

    /// Whether a native handle is currently owned.
    pub fn has_native_handle(&self) -> bool {
        self.inner.borrow().handle.is_some()
    }

    /// Configure a native handle from `content` and submit it for display.
    ///
    /// Ends in `Displayed` or `Failed`, signalling the delegate either way.
    /// Only honoured once, from `Created`.
    pub fn show(&self, content: &NotificationContent) {
        let state = self.state();
        if state != NotificationState::Created {
            tracing::warn!(%state, "show ignored");
            return;
        }

        let mut handle = match self.service.new_notification(&content.title, &content.body) {
            Ok(handle) => handle,
            Err(e) => {
                report_native_error("notify_notification_new", &e);
                advance(&self.inner, NotificationState::Failed);
                return;
            }
        };
        self.configure(&mut handle, content);

        match handle.show() {
            Ok(()) => {
                self.inner.borrow_mut().handle = Some(handle);
                advance(&self.inner, NotificationState::Displayed);
            }
            Err(e) => {
                report_native_error("notify_notification_show", &e);
                advance(&self.inner, NotificationState::Failed);
                drop(handle);
            }
        }
    }

    fn configure(&self, handle: &mut S::Handle, content: &NotificationContent) {
        let caps = Capabilities::new(&*self.service, &self.settings);

        let weak = Rc::downgrade(&self.inner);
        handle.connect_closed(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                advance(&inner, NotificationState::Dismissed);
            }
        }));

        if caps.supports_action_buttons() {
            let weak = Rc::downgrade(&self.inner);
            handle.add_action(
                DEFAULT_ACTION,
                DEFAULT_ACTION_LABEL,
                Box::new(move |_action| {
                    if let Some(inner) = weak.upgrade() {
                        advance(&inner, NotificationState::Clicked);
                    }
                }),
            );
        }

        if let Some(icon) = content.effective_icon() {
            match self.presenter.native_image(icon) {
                Some(image) => {
                    handle.set_image(&image);
                    handle.set_expiry(Expiry::Default);
                }
                None => tracing::debug!(
                    width = icon.width(),
                    height = icon.height(),
                    "icon not converted, showing without image"
                ),
            }
        }

        if let Some(tag) = content.effective_tag() {
            handle.assign_identity(self.service.intern_tag(tag));
        }

        if let Some(hint) = caps.append_hint() {
            handle.set_hint_string(hint, "true");
        }

        if content.silent && caps.supports_sound() {
            handle.set_hint_bool(SUPPRESS_SOUND_HINT, true);
        }
    }

    /// Ask the service to close the notification.
    ///
    /// On success the closed callback later moves it to `Dismissed`. If the
    /// service refuses, the notification is torn down locally as `Destroyed`
    /// and no `dismissed` signal follows.
    pub fn dismiss(&self) {
        let taken = self.inner.borrow_mut().handle.take();
        let Some(mut handle) = taken else {
            tracing::debug!(state = %self.state(), "dismiss without a native handle");
            return;
        };

        match handle.close() {
            Ok(()) => {
                let mut lifecycle = self.inner.borrow_mut();
                if lifecycle.state == NotificationState::Displayed {
                    lifecycle.handle = Some(handle);
                    return;
                }
                drop(lifecycle);
                drop(handle);
            }
            Err(e) => {
                report_native_error("notify_notification_close", &e);
                advance(&self.inner, NotificationState::Destroyed);
                drop(handle);
            }
        }
    }
}

impl<S: NotifyService> Drop for Notification<S> {
    fn drop(&mut self) {
        let released = match self.inner.try_borrow_mut() {
            Ok(mut lifecycle) => lifecycle.handle.take(),
            Err(_) => None,
        };
        drop(released);
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
