//! Rasterlab WASM - WebAssembly bindings for Rasterlab
//!
//! This crate provides WASM bindings to expose the rasterlab-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `settings` - Border/overflow/interpolation policy configuration
//! - `ops` - Operator bindings (fill, blend, convolve, morphology, resize)
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, convolve, apply_settings } from '@rasterlab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Wrap canvas pixels and blur them
//! const image = JsImage.from_image_data(id.width, id.height, id.data);
//! apply_settings(image, { border: 'Closest' });
//! convolve(image, new Float64Array(9).fill(1 / 9), 3, 3);
//! const out = image.to_image_data();
//! ```

use wasm_bindgen::prelude::*;

mod ops;
mod settings;
mod types;

// Re-export public types
pub use ops::{
    blend, convolve, dilate, erode, fill, invert, resize, set_size, threshold, to_grayscale,
};
pub use settings::{apply_settings, current_settings, PolicySettings};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Simple function to verify WASM is working
#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    format!("Hello, {}! Rasterlab WASM is ready.", name)
}
