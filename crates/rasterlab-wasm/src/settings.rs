//! Policy configuration bindings.
//!
//! Border, overflow and interpolation behavior cross the JS boundary as a
//! plain object deserialized with `serde-wasm-bindgen`, for example
//! `{ border: "Closest", overflow: "Wrap", interpolation: "Bicubic" }`.
//! Missing fields keep the core defaults.

use rasterlab_core::{BorderBehavior, Interpolation, OverflowBehavior};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// Bounded-value policies of an image as one serializable bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicySettings {
    /// How out-of-range pixel coordinates are treated.
    #[serde(default)]
    pub border: BorderBehavior,
    /// How out-of-range channel values are treated at write time.
    #[serde(default)]
    pub overflow: OverflowBehavior,
    /// How fractional coordinates are resolved when sampling.
    #[serde(default)]
    pub interpolation: Interpolation,
}

/// Configure an image's policies from a JavaScript settings object.
#[wasm_bindgen]
pub fn apply_settings(image: &mut JsImage, settings: JsValue) -> Result<(), JsValue> {
    let settings: PolicySettings =
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let inner = image.inner_mut();
    inner.set_border(settings.border);
    inner.set_overflow(settings.overflow);
    inner.set_interpolation(settings.interpolation);
    Ok(())
}

/// Read an image's current policies as a JavaScript settings object.
#[wasm_bindgen]
pub fn current_settings(image: &JsImage) -> Result<JsValue, JsValue> {
    let inner = image.inner();
    let settings = PolicySettings {
        border: inner.border(),
        overflow: inner.overflow(),
        interpolation: inner.interpolation(),
    };
    serde_wasm_bindgen::to_value(&settings).map_err(|e| JsValue::from_str(&e.to_string()))
}
