//! WASM bindings for resampling and rotation.

use crate::types::{filter_from_u8, JsImage};
use pixelwork_core::resize::resize as core_resize;
use pixelwork_core::transform::rotate as core_rotate;
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - Source image
/// * `width` - Target width
/// * `height` - Target height
/// * `filter` - 0 = Nearest, anything else = Bilinear
#[wasm_bindgen]
pub fn resize(image: &JsImage, width: u32, height: u32, filter: u8) -> JsImage {
    JsImage::from_image(core_resize(
        image.as_image(),
        width as usize,
        height as usize,
        filter_from_u8(filter),
    ))
}

/// Rotate an image by `angle_degrees`.
///
/// The canvas grows to the rotated bounding box; uncovered corners are 0.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const stamp = rotate(brush, 30.0);
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsImage, angle_degrees: f64) -> JsImage {
    JsImage::from_image(core_rotate(image.as_image(), angle_degrees))
}
