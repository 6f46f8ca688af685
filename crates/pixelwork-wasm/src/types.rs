//! WASM-compatible wrapper types for image data.
//!
//! Images cross the boundary as planar `f32` buffers (`Float32Array` on the
//! JavaScript side), plane after plane, matching the core layout.

use pixelwork_core::resize::FilterType;
use pixelwork_core::Image;
use wasm_bindgen::prelude::*;

/// A planar float image for JavaScript.
///
/// # Memory Management
///
/// Samples live in WASM memory. `data()` copies them out to a new
/// `Float32Array`; keep images in WASM memory while chaining operations and
/// only extract samples at the end.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from planar sample data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Number of channel planes
    /// * `data` - `width * height * channels` samples, one plane after another
    ///
    /// # Errors
    /// Returns an error if `data` has the wrong length.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<JsImage, JsValue> {
        Image::from_data(width as usize, height as usize, channels as usize, data)
            .map(Self::from_image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a zero-filled image.
    pub fn blank(width: u32, height: u32, channels: u32) -> JsImage {
        Self::from_image(Image::new(width as usize, height as usize, channels as usize))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width as u32
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height as u32
    }

    /// Get the number of channel planes
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u32 {
        self.inner.channels as u32
    }

    /// Get the number of samples (width * height * channels)
    #[wasm_bindgen(getter)]
    pub fn sample_length(&self) -> usize {
        self.inner.data.len()
    }

    /// Returns the planar samples as Float32Array.
    ///
    /// Note: This creates a copy of the sample data.
    pub fn data(&self) -> Vec<f32> {
        self.inner.data.clone()
    }

    /// Clamp every sample to [0, 1] in place.
    pub fn clamp(&mut self) {
        self.inner.clamp();
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    pub(crate) fn as_image(&self) -> &Image {
        &self.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest
/// - 1 = Bilinear
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        _ => FilterType::Bilinear,
    }
}
