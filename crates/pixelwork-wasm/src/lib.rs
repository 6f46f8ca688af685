//! Pixelwork WASM - WebAssembly bindings for Pixelwork
//!
//! This crate exposes the pixelwork-core raster engine to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - `JsImage`, a planar float image living in WASM memory
//! - `color` - RGB/HSV conversion and grayscale
//! - `filter` - Named-kernel convolution and filtering, Gaussian blur, Sobel colorization
//! - `transform` - Resize and rotation
//! - `brush` - `JsBrushSet` and the brush-stamp painter
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, gaussian_blur } from '@pixelwork/wasm';
//!
//! await init();
//!
//! const image = new JsImage(width, height, 3, planes);
//! const blurred = gaussian_blur(image, 2.0);
//! console.log(`Blurred ${blurred.width}x${blurred.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod brush;
mod color;
mod filter;
mod transform;
mod types;

// Re-export public types
pub use brush::{apply_brushes, JsBrushSet};
pub use color::{hsv_to_rgb, rgb_to_grayscale, rgb_to_hsv};
pub use filter::{apply_filter, colorize_sobel, convolve, gaussian_blur};
pub use transform::{resize, rotate};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
