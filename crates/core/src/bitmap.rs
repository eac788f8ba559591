// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory pixel bitmaps handed to the presenter for conversion.

use thiserror::Error;

/// Bytes per pixel (RGBA, 8 bits per channel).
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors from constructing a bitmap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch { width: u32, height: u32, expected: usize, actual: usize },

    #[error("bitmap dimensions {width}x{height} overflow")]
    TooLarge { width: u32, height: u32 },
}

/// Row-major, non-premultiplied RGBA8 pixels.
///
/// A bitmap with zero width or height draws nothing and is treated as
/// "no icon".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(BitmapError::SizeMismatch { width, height, expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// A bitmap filled with a single RGBA colour.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BitmapError> {
        let len = byte_len(width, height)?;
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes in one tightly packed row.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Iterate over packed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on zero; an empty bitmap has no rows anyway
        self.pixels.chunks_exact(self.stride().max(1)).take(self.height as usize)
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(BitmapError::TooLarge { width, height })
}

#[cfg(test)]
#[path = "bitmap_tests.rs"]
mod tests;
