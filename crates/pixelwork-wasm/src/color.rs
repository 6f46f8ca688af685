//! Color-space conversion bindings.
//!
//! The core converts in place; these bindings return a converted copy so the
//! JavaScript-side image stays valid.

use crate::types::JsImage;
use pixelwork_core::color;
use wasm_bindgen::prelude::*;

/// Convert a 3-channel RGB image to HSV (all components in [0, 1]).
///
/// # Errors
/// Returns an error if the image does not have 3 channels.
#[wasm_bindgen]
pub fn rgb_to_hsv(image: &JsImage) -> Result<JsImage, JsValue> {
    let mut out = image.as_image().clone();
    color::rgb_to_hsv(&mut out).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsImage::from_image(out))
}

/// Convert a 3-channel HSV image back to RGB.
///
/// # Errors
/// Returns an error if the image does not have 3 channels.
#[wasm_bindgen]
pub fn hsv_to_rgb(image: &JsImage) -> Result<JsImage, JsValue> {
    let mut out = image.as_image().clone();
    color::hsv_to_rgb(&mut out).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsImage::from_image(out))
}

/// Reduce a 3-channel RGB image to one luma plane.
///
/// # Errors
/// Returns an error if the image does not have 3 channels.
#[wasm_bindgen]
pub fn rgb_to_grayscale(image: &JsImage) -> Result<JsImage, JsValue> {
    color::rgb_to_grayscale(image.as_image())
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
