//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Rasterlab types, handling the conversion between Rust and JavaScript
//! data representations.

use rasterlab_core::Image;
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// This type wraps the core `Image` type and provides a JavaScript-friendly
/// interface built around canvas-style RGBA buffers.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `to_image_data()`,
/// a copy is made to JavaScript memory as a `Uint8Array`. For
/// performance-critical code, keep the image in WASM memory and only extract
/// pixels when needed.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new white image.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<JsImage, JsValue> {
        if width == 0 || height == 0 {
            return Err(JsValue::from_str("image dimensions must be nonzero"));
        }
        Ok(JsImage {
            inner: Image::new(width, height),
        })
    }

    /// Create an image from canvas-style RGBA bytes.
    ///
    /// The alpha channel is dropped; the core image is opaque RGB.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `data` - RGBA pixel data (4 bytes per pixel, row-major order)
    pub fn from_image_data(width: u32, height: u32, data: &[u8]) -> Result<JsImage, JsValue> {
        if width == 0 || height == 0 {
            return Err(JsValue::from_str("image dimensions must be nonzero"));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(JsValue::from_str(&format!(
                "expected {} RGBA bytes, got {}",
                expected,
                data.len()
            )));
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for rgba in data.chunks_exact(4) {
            pixels.extend_from_slice(&rgba[..3]);
        }
        Ok(JsImage {
            inner: Image::from_raw(width, height, pixels),
        })
    }

    /// Export the image as canvas-style RGBA bytes (alpha fixed at 255).
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn to_image_data(&self) -> Vec<u8> {
        self.inner.to_rgba_bytes()
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Read the pixel at `(x, y)` as a 3-byte RGB array.
    ///
    /// Coordinates outside the image resolve through the image's border
    /// behavior, exactly like in the core library.
    pub fn get_pixel(&self, x: i32, y: i32) -> Vec<u8> {
        self.inner.get_pixel(i64::from(x), i64::from(y)).to_vec()
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// Channel values are floored and mapped through the image's overflow
    /// behavior; writes outside the image follow the border behavior.
    pub fn set_pixel(&mut self, x: i32, y: i32, red: f64, green: f64, blue: f64) {
        self.inner
            .set_pixel(i64::from(x), i64::from(y), [red, green, blue]);
    }
}

impl JsImage {
    /// Get a reference to the inner image.
    pub(crate) fn inner(&self) -> &Image {
        &self.inner
    }

    /// Get a mutable reference to the inner image.
    pub(crate) fn inner_mut(&mut self) -> &mut Image {
        &mut self.inner
    }
}
