// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Function tables resolved from libnotify, GLib and GObject at runtime.

use std::ffi::{c_char, c_int, c_uint, c_ulong, c_void, CStr, CString};
use std::mem::ManuallyDrop;

use libloading::Library;
use nudge_core::NativeError;

pub(crate) type Gboolean = c_int;

/// Opaque `NotifyNotification` instance.
#[repr(C)]
pub struct NotifyNotification {
    _private: [u8; 0],
}

/// Opaque `GdkPixbuf` instance.
#[repr(C)]
pub struct GdkPixbuf {
    _private: [u8; 0],
}

/// Opaque `GVariant`.
#[repr(C)]
pub struct GVariant {
    _private: [u8; 0],
}

#[repr(C)]
pub(crate) struct GError {
    pub domain: u32,
    pub code: c_int,
    pub message: *mut c_char,
}

#[repr(C)]
pub(crate) struct GList {
    pub data: *mut c_void,
    pub next: *mut GList,
    pub prev: *mut GList,
}

pub(crate) type GCallback = unsafe extern "C" fn();
pub(crate) type GDestroyNotify = unsafe extern "C" fn(data: *mut c_void);
pub(crate) type GClosureNotify = unsafe extern "C" fn(data: *mut c_void, closure: *mut c_void);
pub(crate) type ClosedCallback = unsafe extern "C" fn(*mut NotifyNotification, *mut c_void);
pub(crate) type ActionCallback =
    unsafe extern "C" fn(*mut NotifyNotification, *mut c_char, *mut c_void);

pub(crate) const GLIB_LIBRARY: &str = "libglib-2.0.so.0";
pub(crate) const GOBJECT_LIBRARY: &str = "libgobject-2.0.so.0";
pub(crate) const GDK_PIXBUF_LIBRARY: &str = "libgdk_pixbuf-2.0.so.0";

/// Copy a function pointer out of a loaded library.
///
/// # Safety
/// `T` must match the C signature of `name`, and the library must stay loaded
/// for as long as the pointer is used.
pub(crate) unsafe fn sym<T: Copy>(lib: &Library, name: &[u8]) -> Result<T, libloading::Error> {
    Ok(*lib.get::<T>(name)?)
}

// Libraries in these tables are never unloaded. The service registers GObject
// types that must stay mapped for the life of the process.

pub(crate) struct NotifyApi {
    _lib: ManuallyDrop<Library>,
    pub notify_init: unsafe extern "C" fn(*const c_char) -> Gboolean,
    pub notify_is_initted: unsafe extern "C" fn() -> Gboolean,
    pub notify_get_server_caps: unsafe extern "C" fn() -> *mut GList,
    pub notify_get_server_info: unsafe extern "C" fn(
        *mut *mut c_char,
        *mut *mut c_char,
        *mut *mut c_char,
        *mut *mut c_char,
    ) -> Gboolean,
    pub notify_notification_new: unsafe extern "C" fn(
        *const c_char,
        *const c_char,
        *const c_char,
    ) -> *mut NotifyNotification,
    pub notify_notification_add_action: unsafe extern "C" fn(
        *mut NotifyNotification,
        *const c_char,
        *const c_char,
        ActionCallback,
        *mut c_void,
        Option<GDestroyNotify>,
    ),
    pub notify_notification_set_image_from_pixbuf:
        unsafe extern "C" fn(*mut NotifyNotification, *mut GdkPixbuf),
    pub notify_notification_set_timeout: unsafe extern "C" fn(*mut NotifyNotification, c_int),
    pub notify_notification_set_hint_string:
        unsafe extern "C" fn(*mut NotifyNotification, *const c_char, *const c_char),
    pub notify_notification_set_hint:
        unsafe extern "C" fn(*mut NotifyNotification, *const c_char, *mut GVariant),
    pub notify_notification_show:
        unsafe extern "C" fn(*mut NotifyNotification, *mut *mut GError) -> Gboolean,
    pub notify_notification_close:
        unsafe extern "C" fn(*mut NotifyNotification, *mut *mut GError) -> Gboolean,
}

impl NotifyApi {
    /// # Safety
    /// Loading runs the library's initializers; `library` must be a libnotify.
    pub(crate) unsafe fn load(library: &str) -> Result<Self, libloading::Error> {
        let lib = Library::new(library)?;
        Ok(Self {
            notify_init: sym(&lib, b"notify_init\0")?,
            notify_is_initted: sym(&lib, b"notify_is_initted\0")?,
            notify_get_server_caps: sym(&lib, b"notify_get_server_caps\0")?,
            notify_get_server_info: sym(&lib, b"notify_get_server_info\0")?,
            notify_notification_new: sym(&lib, b"notify_notification_new\0")?,
            notify_notification_add_action: sym(&lib, b"notify_notification_add_action\0")?,
            notify_notification_set_image_from_pixbuf: sym(
                &lib,
                b"notify_notification_set_image_from_pixbuf\0",
            )?,
            notify_notification_set_timeout: sym(&lib, b"notify_notification_set_timeout\0")?,
            notify_notification_set_hint_string: sym(
                &lib,
                b"notify_notification_set_hint_string\0",
            )?,
            notify_notification_set_hint: sym(&lib, b"notify_notification_set_hint\0")?,
            notify_notification_show: sym(&lib, b"notify_notification_show\0")?,
            notify_notification_close: sym(&lib, b"notify_notification_close\0")?,
            _lib: ManuallyDrop::new(lib),
        })
    }
}

pub(crate) struct GlibApi {
    _glib: ManuallyDrop<Library>,
    _gobject: ManuallyDrop<Library>,
    pub g_free: GDestroyNotify,
    pub g_list_free_full: unsafe extern "C" fn(*mut GList, GDestroyNotify),
    pub g_error_free: unsafe extern "C" fn(*mut GError),
    pub g_quark_from_string: unsafe extern "C" fn(*const c_char) -> u32,
    pub g_quark_to_string: unsafe extern "C" fn(u32) -> *const c_char,
    pub g_variant_new_boolean: unsafe extern "C" fn(Gboolean) -> *mut GVariant,
    pub g_main_context_iteration: unsafe extern "C" fn(*mut c_void, Gboolean) -> Gboolean,
    pub g_object_ref: unsafe extern "C" fn(*mut c_void) -> *mut c_void,
    pub g_object_unref: unsafe extern "C" fn(*mut c_void),
    pub g_object_set: unsafe extern "C" fn(*mut c_void, *const c_char, ...),
    pub g_signal_connect_data: unsafe extern "C" fn(
        *mut c_void,
        *const c_char,
        GCallback,
        *mut c_void,
        Option<GClosureNotify>,
        c_uint,
    ) -> c_ulong,
    pub g_signal_handler_disconnect: unsafe extern "C" fn(*mut c_void, c_ulong),
}

impl GlibApi {
    /// # Safety
    /// Loading runs the libraries' initializers.
    pub(crate) unsafe fn load() -> Result<Self, libloading::Error> {
        let glib = Library::new(GLIB_LIBRARY)?;
        let gobject = Library::new(GOBJECT_LIBRARY)?;
        Ok(Self {
            g_free: sym(&glib, b"g_free\0")?,
            g_list_free_full: sym(&glib, b"g_list_free_full\0")?,
            g_error_free: sym(&glib, b"g_error_free\0")?,
            g_quark_from_string: sym(&glib, b"g_quark_from_string\0")?,
            g_quark_to_string: sym(&glib, b"g_quark_to_string\0")?,
            g_variant_new_boolean: sym(&glib, b"g_variant_new_boolean\0")?,
            g_main_context_iteration: sym(&glib, b"g_main_context_iteration\0")?,
            g_object_ref: sym(&gobject, b"g_object_ref\0")?,
            g_object_unref: sym(&gobject, b"g_object_unref\0")?,
            g_object_set: sym(&gobject, b"g_object_set\0")?,
            g_signal_connect_data: sym(&gobject, b"g_signal_connect_data\0")?,
            g_signal_handler_disconnect: sym(&gobject, b"g_signal_handler_disconnect\0")?,
            _glib: ManuallyDrop::new(glib),
            _gobject: ManuallyDrop::new(gobject),
        })
    }

    /// Extract domain, code and message from a `GError` and free it.
    ///
    /// # Safety
    /// `error` must be a valid, owned `GError`; it is freed on return.
    pub(crate) unsafe fn take_error(&self, error: *mut GError) -> NativeError {
        let (domain, code, message) = {
            let e = &*error;
            (self.quark_name(e.domain), e.code, lossy(e.message))
        };
        (self.g_error_free)(error);
        NativeError::new(domain, code, message)
    }

    /// The registered name for a quark, or its number when unnamed.
    ///
    /// # Safety
    /// GLib must be initialized (it is once loaded).
    pub(crate) unsafe fn quark_name(&self, quark: u32) -> String {
        let name = (self.g_quark_to_string)(quark);
        if name.is_null() {
            quark.to_string()
        } else {
            lossy(name)
        }
    }

    /// Copy every string in a `GList` of `gchar*` and free the list.
    ///
    /// # Safety
    /// `list` must be null or an owned list whose elements are owned strings.
    pub(crate) unsafe fn take_string_list(&self, list: *mut GList) -> Vec<String> {
        let mut out = Vec::new();
        let mut node = list;
        while !node.is_null() {
            out.push(lossy((*node).data.cast::<c_char>()));
            node = (*node).next;
        }
        if !list.is_null() {
            (self.g_list_free_full)(list, self.g_free);
        }
        out
    }

    /// Copy and free an owned `gchar*` out-parameter.
    ///
    /// # Safety
    /// `s` must be null or an owned, NUL-terminated string.
    pub(crate) unsafe fn take_string(&self, s: *mut c_char) -> String {
        let out = lossy(s);
        if !s.is_null() {
            (self.g_free)(s.cast());
        }
        out
    }
}

/// # Safety
/// `s` must be null or NUL-terminated.
pub(crate) unsafe fn lossy(s: *const c_char) -> String {
    if s.is_null() {
        return String::new();
    }
    CStr::from_ptr(s).to_string_lossy().into_owned()
}

/// C strings cannot carry interior NULs; drop them rather than fail.
pub(crate) fn c_string(s: &str) -> CString {
    let bytes: Vec<u8> = s.bytes().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}
