//! Convolution and edge-detection bindings.

use crate::types::JsImage;
use pixelwork_core::filter::{self, KernelKind, MAX_GAUSSIAN_SIZE};
use pixelwork_core::{edge, Image};
use wasm_bindgen::prelude::*;

/// Convolve an image with a named kernel.
///
/// # Arguments
///
/// * `image` - Source image
/// * `kernel` - One of `box`, `gaussian`, `sobel_x`, `sobel_y`, `highpass`,
///   `sharpen`, `emboss`
/// * `param` - Side length for `box`, sigma for `gaussian`, ignored otherwise
/// * `preserve` - Keep one output plane per channel instead of summing them
///
/// Results are not clamped; call `clamp()` on the returned image to display
/// high-pass, sharpen or emboss output.
///
/// # Errors
///
/// Returns an error for an unknown kernel name.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const soft = convolve(image, "box", 5, true);
/// const edges = convolve(image, "highpass", 0, false);
/// edges.clamp();
/// ```
#[wasm_bindgen]
pub fn convolve(image: &JsImage, kernel: &str, param: f32, preserve: bool) -> Result<JsImage, JsValue> {
    let kind = kernel_from_name(kernel, param)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown kernel: {}", kernel)))?;
    run(image.as_image(), kind, preserve)
}

/// Filter an image with a named kernel using that kernel's usual output shape.
///
/// Smoothing, sharpen and emboss keep every channel; gradient and high-pass
/// kernels sum the channels into one plane. Kernels whose output can leave
/// [0, 1] (high-pass, sharpen, emboss) are clamped so the result is
/// displayable.
///
/// # Errors
///
/// Returns an error for an unknown kernel name.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const embossed = apply_filter(image, "emboss", 0);
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsImage, kernel: &str, param: f32) -> Result<JsImage, JsValue> {
    let kind = kernel_from_name(kernel, param)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown kernel: {}", kernel)))?;
    let mut out = run(image.as_image(), kind, kind.preserves_channels())?;
    if kind.needs_clamp() {
        out.clamp();
    }
    Ok(out)
}

/// Blur every channel with a normalized Gaussian of standard deviation `sigma`.
#[wasm_bindgen]
pub fn gaussian_blur(image: &JsImage, sigma: f32) -> Result<JsImage, JsValue> {
    run(image.as_image(), KernelKind::Gaussian(sigma), true)
}

/// Render Sobel edges as an RGB image (hue = direction, brightness = strength).
#[wasm_bindgen]
pub fn colorize_sobel(image: &JsImage) -> JsImage {
    JsImage::from_image(edge::colorize_sobel(image.as_image()))
}

fn run(image: &Image, kind: KernelKind, preserve: bool) -> Result<JsImage, JsValue> {
    filter::convolve(image, &kind.build(), preserve)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Box side length from a JS number, limited to `1..=MAX_GAUSSIAN_SIZE`.
fn box_side(param: f32) -> usize {
    if param.is_nan() {
        return 1;
    }
    param.round().clamp(1.0, MAX_GAUSSIAN_SIZE as f32) as usize
}

/// Map a kernel name from JavaScript to a kernel kind.
pub(crate) fn kernel_from_name(name: &str, param: f32) -> Option<KernelKind> {
    let kind = match name {
        "box" => KernelKind::Box(box_side(param)),
        "gaussian" => KernelKind::Gaussian(param),
        "sobel_x" => KernelKind::SobelX,
        "sobel_y" => KernelKind::SobelY,
        "highpass" => KernelKind::Highpass,
        "sharpen" => KernelKind::Sharpen,
        "emboss" => KernelKind::Emboss,
        _ => return None,
    };
    Some(kind)
}
