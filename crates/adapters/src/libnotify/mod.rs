// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! libnotify, bound at runtime.
//!
//! Nothing here links against libnotify or GLib. [`LibnotifyBinder`] opens
//! the requested library variant with `dlopen`, resolves the function table,
//! and hands back a [`Libnotify`] service. Callbacks are delivered from the
//! GLib default main context, which the host drives through
//! [`NotifyService::dispatch_pending`].

#![allow(unsafe_code)]

mod ffi;
mod handle;
mod pixbuf;

use std::ffi::c_char;
use std::ptr;
use std::rc::Rc;

use nudge_core::{CapabilitySet, NativeError, TagId};

use crate::loader::Binder;
use crate::service::{NotifyService, ServerInfo};
use ffi::{c_string, GlibApi, NotifyApi};

pub use handle::LibnotifyNotification;
pub use pixbuf::{Pixbuf, PixbufPresenter};

/// Library variants tried in order.
pub const DEFAULT_CANDIDATES: &[&str] = &["libnotify.so.4", "libnotify.so.1", "libnotify.so"];

/// Binds libnotify variants by library name or path.
#[derive(Clone, Copy, Debug, Default)]
pub struct LibnotifyBinder;

impl Binder for LibnotifyBinder {
    type Service = Libnotify;

    fn bind(&self, library: &str) -> Result<Libnotify, String> {
        // SAFETY: the candidates are libnotify builds; resolved signatures
        // follow the libnotify 0.7 ABI shared by every listed variant.
        let api = unsafe { NotifyApi::load(library) }.map_err(|e| e.to_string())?;
        let glib = unsafe { GlibApi::load() }.map_err(|e| e.to_string())?;
        Ok(Libnotify { api: Rc::new(api), glib: Rc::new(glib), library: library.to_string() })
    }
}

/// The bound libnotify service.
pub struct Libnotify {
    api: Rc<NotifyApi>,
    glib: Rc<GlibApi>,
    library: String,
}

impl Libnotify {
    /// The library variant this service was bound from.
    pub fn library(&self) -> &str {
        &self.library
    }

    /// A presenter producing pixbufs this service's notifications accept.
    pub fn presenter(&self) -> PixbufPresenter {
        PixbufPresenter::new(Rc::clone(&self.glib))
    }
}

impl NotifyService for Libnotify {
    type Handle = LibnotifyNotification;

    fn is_initted(&self) -> bool {
        unsafe { (self.api.notify_is_initted)() != 0 }
    }

    fn init(&self, app_name: &str) -> bool {
        let name = c_string(app_name);
        unsafe { (self.api.notify_init)(name.as_ptr()) != 0 }
    }

    fn server_caps(&self) -> CapabilitySet {
        unsafe {
            let list = (self.api.notify_get_server_caps)();
            CapabilitySet::new(self.glib.take_string_list(list))
        }
    }

    fn server_info(&self) -> Option<ServerInfo> {
        let mut name: *mut c_char = ptr::null_mut();
        let mut vendor: *mut c_char = ptr::null_mut();
        let mut version: *mut c_char = ptr::null_mut();
        let mut spec_version: *mut c_char = ptr::null_mut();
        unsafe {
            let ok = (self.api.notify_get_server_info)(
                &mut name,
                &mut vendor,
                &mut version,
                &mut spec_version,
            ) != 0;
            let info = ServerInfo {
                name: self.glib.take_string(name),
                vendor: self.glib.take_string(vendor),
                version: self.glib.take_string(version),
                spec_version: self.glib.take_string(spec_version),
            };
            ok.then_some(info)
        }
    }

    fn new_notification(&self, summary: &str, body: &str) -> Result<LibnotifyNotification, NativeError> {
        let summary = c_string(summary);
        let body = c_string(body);
        let raw = unsafe {
            (self.api.notify_notification_new)(summary.as_ptr(), body.as_ptr(), ptr::null())
        };
        LibnotifyNotification::from_raw(raw, Rc::clone(&self.api), Rc::clone(&self.glib))
            .ok_or_else(|| NativeError::new("libnotify", -1, "notify_notification_new returned null"))
    }

    fn intern_tag(&self, tag: &str) -> TagId {
        let tag = c_string(tag);
        TagId::new(unsafe { (self.glib.g_quark_from_string)(tag.as_ptr()) })
    }

    fn dispatch_pending(&self) -> bool {
        unsafe { (self.glib.g_main_context_iteration)(ptr::null_mut(), 0) != 0 }
    }
}
