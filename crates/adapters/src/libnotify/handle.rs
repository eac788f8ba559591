// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owned `NotifyNotification` handles and their callback trampolines.
//!
//! Each registered callback is boxed into a slot whose address is the native
//! user-data pointer. The trampolines recover the slot and call the typed
//! callback; GLib frees the slot through the matching destroy function when
//! the connection or the notification goes away.

use std::ffi::{c_char, c_int, c_ulong, c_void, CStr};
use std::ptr::{self, NonNull};
use std::rc::Rc;

use nudge_core::{Expiry, NativeError, TagId};

use super::ffi::{
    c_string, ActionCallback, ClosedCallback, GCallback, GError, GlibApi, Gboolean, NotifyApi,
    NotifyNotification,
};
use super::pixbuf::Pixbuf;
use crate::service::NativeNotification;

struct ClosedSlot {
    glib: Rc<GlibApi>,
    callback: Box<dyn Fn()>,
}

struct ActionSlot {
    glib: Rc<GlibApi>,
    callback: Box<dyn Fn(&str)>,
}

/// Keeps the notification alive while a callback runs, so a callback that
/// releases the last owning reference does not finalize it mid-emission.
struct EmissionRef {
    glib: Rc<GlibApi>,
    object: *mut c_void,
}

impl EmissionRef {
    unsafe fn hold(glib: &Rc<GlibApi>, object: *mut c_void) -> Self {
        (glib.g_object_ref)(object);
        Self { glib: Rc::clone(glib), object }
    }
}

impl Drop for EmissionRef {
    fn drop(&mut self) {
        unsafe { (self.glib.g_object_unref)(self.object) }
    }
}

unsafe extern "C" fn closed_trampoline(notification: *mut NotifyNotification, data: *mut c_void) {
    let slot = &*(data as *const ClosedSlot);
    let _hold = EmissionRef::hold(&slot.glib, notification.cast());
    (slot.callback)();
}

unsafe extern "C" fn action_trampoline(
    notification: *mut NotifyNotification,
    action: *mut c_char,
    data: *mut c_void,
) {
    let slot = &*(data as *const ActionSlot);
    let _hold = EmissionRef::hold(&slot.glib, notification.cast());
    let action = if action.is_null() {
        String::new()
    } else {
        CStr::from_ptr(action).to_string_lossy().into_owned()
    };
    (slot.callback)(&action);
}

unsafe extern "C" fn drop_closed_slot(data: *mut c_void, _closure: *mut c_void) {
    drop(Box::from_raw(data as *mut ClosedSlot));
}

unsafe extern "C" fn drop_action_slot(data: *mut c_void) {
    drop(Box::from_raw(data as *mut ActionSlot));
}

/// An owned libnotify notification.
///
/// Dropping it disconnects the closed callbacks it registered and releases
/// the reference taken at construction.
pub struct LibnotifyNotification {
    raw: NonNull<NotifyNotification>,
    api: Rc<NotifyApi>,
    glib: Rc<GlibApi>,
    closed_handlers: Vec<c_ulong>,
}

impl LibnotifyNotification {
    pub(crate) fn from_raw(
        raw: *mut NotifyNotification,
        api: Rc<NotifyApi>,
        glib: Rc<GlibApi>,
    ) -> Option<Self> {
        let raw = NonNull::new(raw)?;
        Some(Self { raw, api, glib, closed_handlers: Vec::new() })
    }

    fn as_ptr(&self) -> *mut NotifyNotification {
        self.raw.as_ptr()
    }

    fn checked(
        &self,
        call: unsafe extern "C" fn(*mut NotifyNotification, *mut *mut GError) -> Gboolean,
        name: &str,
    ) -> Result<(), NativeError> {
        let mut error: *mut GError = ptr::null_mut();
        let ok = unsafe { call(self.as_ptr(), &mut error) } != 0;
        if !error.is_null() {
            return Err(unsafe { self.glib.take_error(error) });
        }
        if !ok {
            return Err(NativeError::new("libnotify", -1, format!("{name} failed")));
        }
        Ok(())
    }
}

impl NativeNotification for LibnotifyNotification {
    type Image = Pixbuf;

    fn connect_closed(&mut self, callback: Box<dyn Fn()>) {
        let slot = Box::into_raw(Box::new(ClosedSlot { glib: Rc::clone(&self.glib), callback }));
        let handler = unsafe {
            // G_CALLBACK: signal handlers are registered through a type-erased pointer
            let trampoline =
                std::mem::transmute::<ClosedCallback, GCallback>(closed_trampoline as ClosedCallback);
            (self.glib.g_signal_connect_data)(
                self.as_ptr().cast(),
                c"closed".as_ptr(),
                trampoline,
                slot.cast(),
                Some(drop_closed_slot),
                0,
            )
        };
        if handler == 0 {
            tracing::warn!("failed to connect closed handler");
            drop(unsafe { Box::from_raw(slot) });
            return;
        }
        self.closed_handlers.push(handler);
    }

    fn add_action(&mut self, action: &str, label: &str, callback: Box<dyn Fn(&str)>) {
        let action = c_string(action);
        let label = c_string(label);
        let slot = Box::into_raw(Box::new(ActionSlot { glib: Rc::clone(&self.glib), callback }));
        unsafe {
            (self.api.notify_notification_add_action)(
                self.as_ptr(),
                action.as_ptr(),
                label.as_ptr(),
                action_trampoline as ActionCallback,
                slot.cast(),
                Some(drop_action_slot),
            );
        }
    }

    fn set_image(&mut self, image: &Pixbuf) {
        unsafe { (self.api.notify_notification_set_image_from_pixbuf)(self.as_ptr(), image.as_ptr()) }
    }

    fn set_expiry(&mut self, expiry: Expiry) {
        unsafe { (self.api.notify_notification_set_timeout)(self.as_ptr(), expiry.as_millis()) }
    }

    fn assign_identity(&mut self, id: TagId) {
        let Some(id) = identity_value(id) else {
            tracing::warn!(%id, "identity out of range for the id property, not assigned");
            return;
        };
        unsafe {
            (self.glib.g_object_set)(
                self.as_ptr().cast(),
                c"id".as_ptr(),
                id,
                ptr::null::<c_char>(),
            );
        }
    }

    fn set_hint_string(&mut self, key: &str, value: &str) {
        let key = c_string(key);
        let value = c_string(value);
        unsafe {
            (self.api.notify_notification_set_hint_string)(self.as_ptr(), key.as_ptr(), value.as_ptr())
        }
    }

    fn set_hint_bool(&mut self, key: &str, value: bool) {
        let key = c_string(key);
        unsafe {
            // The hint takes ownership of the floating variant
            let variant = (self.glib.g_variant_new_boolean)(Gboolean::from(value));
            (self.api.notify_notification_set_hint)(self.as_ptr(), key.as_ptr(), variant);
        }
    }

    fn show(&mut self) -> Result<(), NativeError> {
        self.checked(self.api.notify_notification_show, "notify_notification_show")
    }

    fn close(&mut self) -> Result<(), NativeError> {
        self.checked(self.api.notify_notification_close, "notify_notification_close")
    }
}

/// The `gint` value for the "id" property, if `id` fits.
fn identity_value(id: TagId) -> Option<c_int> {
    c_int::try_from(id.get()).ok()
}

// Action slots are freed by libnotify when the object finalizes; only the
// closed handlers are connected by us and need disconnecting.
impl Drop for LibnotifyNotification {
    fn drop(&mut self) {
        unsafe {
            for handler in self.closed_handlers.drain(..) {
                (self.glib.g_signal_handler_disconnect)(self.raw.as_ptr().cast(), handler);
            }
            (self.glib.g_object_unref)(self.raw.as_ptr().cast());
        }
    }
}
