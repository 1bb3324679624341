//! Operator WASM bindings.
//!
//! Each binding mutates the image in place, matching the core library's
//! operators. Kernels and structuring elements arrive as a flat
//! `Float64Array` plus dimensions and are validated at the boundary, so
//! bad input surfaces as a JavaScript error instead of a WASM trap.

use js_sys::Float64Array;
use rasterlab_core::{BlendMode, Matrix};
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

/// Build a core matrix from a flat JavaScript array and dimensions.
fn matrix_from_js(values: &Float64Array, width: u32, height: u32) -> Result<Matrix, JsValue> {
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("matrix dimensions must be nonzero"));
    }
    let values = values.to_vec();
    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(JsValue::from_str(&format!(
            "expected {} matrix values, got {}",
            expected,
            values.len()
        )));
    }

    let mut matrix = Matrix::new(width, height);
    matrix.set_values(&values);
    Ok(matrix)
}

/// Convert a u8 blend mode value to the core BlendMode enum.
///
/// Values:
/// - 0 = Add
/// - 1 = Subtract
/// - 2 = Multiply
///
/// Any other value defaults to Add.
fn blend_mode_from_u8(value: u8) -> BlendMode {
    match value {
        1 => BlendMode::Subtract,
        2 => BlendMode::Multiply,
        _ => BlendMode::Add,
    }
}

/// Fill the whole image with one color.
#[wasm_bindgen]
pub fn fill(image: &mut JsImage, red: f64, green: f64, blue: f64) {
    image.inner_mut().fill([red, green, blue]);
}

/// Invert the image colors.
#[wasm_bindgen]
pub fn invert(image: &mut JsImage) {
    image.inner_mut().invert();
}

/// Convert the image to grayscale.
#[wasm_bindgen]
pub fn to_grayscale(image: &mut JsImage) {
    image.inner_mut().to_grayscale();
}

/// Quantize each channel into `levels` evenly spaced output values.
///
/// `shift` is added to every channel before quantization.
#[wasm_bindgen]
pub fn threshold(image: &mut JsImage, levels: u32, shift: f64) -> Result<(), JsValue> {
    if levels < 2 {
        return Err(JsValue::from_str("threshold needs at least 2 levels"));
    }
    image.inner_mut().threshold(levels, shift);
    Ok(())
}

/// Blend another image into this one.
///
/// `ratio` is clamped into `[0, 1]`; see `blend_mode_from_u8` for the
/// `mode` encoding.
#[wasm_bindgen]
pub fn blend(image: &mut JsImage, other: &JsImage, ratio: f64, mode: u8) {
    image
        .inner_mut()
        .blend(other.inner(), ratio, blend_mode_from_u8(mode));
}

/// Convolve the image with a kernel given as a flat row-major array.
#[wasm_bindgen]
pub fn convolve(
    image: &mut JsImage,
    kernel: &Float64Array,
    kernel_width: u32,
    kernel_height: u32,
) -> Result<(), JsValue> {
    let kernel = matrix_from_js(kernel, kernel_width, kernel_height)?;
    image.inner_mut().convolve(&kernel);
    Ok(())
}

/// Morphological dilation with a structuring element given as a flat
/// row-major array. Negative entries are not probed.
#[wasm_bindgen]
pub fn dilate(
    image: &mut JsImage,
    element: &Float64Array,
    element_width: u32,
    element_height: u32,
    center_x: i32,
    center_y: i32,
) -> Result<(), JsValue> {
    let element = matrix_from_js(element, element_width, element_height)?;
    image
        .inner_mut()
        .dilate(&element, i64::from(center_x), i64::from(center_y));
    Ok(())
}

/// Morphological erosion with a structuring element given as a flat
/// row-major array. Negative entries are not probed.
#[wasm_bindgen]
pub fn erode(
    image: &mut JsImage,
    element: &Float64Array,
    element_width: u32,
    element_height: u32,
    center_x: i32,
    center_y: i32,
) -> Result<(), JsValue> {
    let element = matrix_from_js(element, element_width, element_height)?;
    image
        .inner_mut()
        .erode(&element, i64::from(center_x), i64::from(center_y));
    Ok(())
}

/// Resample the image to a new size using its interpolation policy.
#[wasm_bindgen]
pub fn resize(image: &mut JsImage, width: u32, height: u32) -> Result<(), JsValue> {
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("image dimensions must be nonzero"));
    }
    image.inner_mut().resize(width, height);
    Ok(())
}

/// Change the image size without resampling.
///
/// New area is filled according to the image's border behavior.
#[wasm_bindgen]
pub fn set_size(image: &mut JsImage, width: u32, height: u32) -> Result<(), JsValue> {
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("image dimensions must be nonzero"));
    }
    image.inner_mut().set_size(width, height);
    Ok(())
}
