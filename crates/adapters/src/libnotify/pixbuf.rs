// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bitmap to `GdkPixbuf` conversion.
//!
//! gdk-pixbuf is opened on first use. Hosts without it still get
//! notifications, just without images.

use std::cell::OnceCell;
use std::ffi::c_int;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;
use std::rc::Rc;

use libloading::Library;
use nudge_core::Bitmap;

use super::ffi::{sym, GdkPixbuf, GlibApi, Gboolean, GDK_PIXBUF_LIBRARY};
use crate::service::BitmapPresenter;

const GDK_COLORSPACE_RGB: c_int = 0;
const BITS_PER_SAMPLE: c_int = 8;

struct PixbufApi {
    _lib: ManuallyDrop<Library>,
    gdk_pixbuf_new: unsafe extern "C" fn(c_int, Gboolean, c_int, c_int, c_int) -> *mut GdkPixbuf,
    gdk_pixbuf_get_pixels: unsafe extern "C" fn(*const GdkPixbuf) -> *mut u8,
    gdk_pixbuf_get_rowstride: unsafe extern "C" fn(*const GdkPixbuf) -> c_int,
}

impl PixbufApi {
    unsafe fn load() -> Result<Self, libloading::Error> {
        let lib = Library::new(GDK_PIXBUF_LIBRARY)?;
        Ok(Self {
            gdk_pixbuf_new: sym(&lib, b"gdk_pixbuf_new\0")?,
            gdk_pixbuf_get_pixels: sym(&lib, b"gdk_pixbuf_get_pixels\0")?,
            gdk_pixbuf_get_rowstride: sym(&lib, b"gdk_pixbuf_get_rowstride\0")?,
            _lib: ManuallyDrop::new(lib),
        })
    }
}

/// An owned `GdkPixbuf` reference.
pub struct Pixbuf {
    raw: NonNull<GdkPixbuf>,
    glib: Rc<GlibApi>,
}

impl Pixbuf {
    pub(crate) fn as_ptr(&self) -> *mut GdkPixbuf {
        self.raw.as_ptr()
    }
}

impl Drop for Pixbuf {
    fn drop(&mut self) {
        unsafe { (self.glib.g_object_unref)(self.raw.as_ptr().cast()) }
    }
}

/// Converts RGBA bitmaps into pixbufs.
pub struct PixbufPresenter {
    glib: Rc<GlibApi>,
    api: OnceCell<Option<PixbufApi>>,
}

impl PixbufPresenter {
    pub(crate) fn new(glib: Rc<GlibApi>) -> Self {
        Self { glib, api: OnceCell::new() }
    }

    fn api(&self) -> Option<&PixbufApi> {
        self.api
            .get_or_init(|| match unsafe { PixbufApi::load() } {
                Ok(api) => Some(api),
                Err(e) => {
                    tracing::warn!(library = GDK_PIXBUF_LIBRARY, error = %e, "images disabled");
                    None
                }
            })
            .as_ref()
    }
}

impl BitmapPresenter for PixbufPresenter {
    type Image = Pixbuf;

    fn native_image(&self, bitmap: &Bitmap) -> Option<Pixbuf> {
        if bitmap.is_empty() {
            return None;
        }
        let api = self.api()?;
        let width = c_int::try_from(bitmap.width()).ok()?;
        let height = c_int::try_from(bitmap.height()).ok()?;

        unsafe {
            let raw = (api.gdk_pixbuf_new)(GDK_COLORSPACE_RGB, 1, BITS_PER_SAMPLE, width, height);
            let pixbuf = Pixbuf { raw: NonNull::new(raw)?, glib: Rc::clone(&self.glib) };
            let dest = (api.gdk_pixbuf_get_pixels)(raw);
            let rowstride = usize::try_from((api.gdk_pixbuf_get_rowstride)(raw)).ok()?;
            if dest.is_null() || rowstride < bitmap.stride() {
                return None;
            }
            for (y, row) in bitmap.rows().enumerate() {
                std::ptr::copy_nonoverlapping(row.as_ptr(), dest.add(y * rowstride), row.len());
            }
            Some(pixbuf)
        }
    }
}
