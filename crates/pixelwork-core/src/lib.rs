//! Pixelwork Core - planar floating-point raster engine
//!
//! Images are stored as `f32` planes (one plane per channel, values nominally
//! in `[0, 1]`) and read with clamp-to-edge addressing. On top of that buffer
//! this crate provides color-space conversion, kernel construction and
//! convolution, resampling, Sobel edge visualization, arbitrary-angle
//! rotation, and randomized brush-stamp compositing.

pub mod brush;
pub mod color;
pub mod edge;
pub mod filter;
pub mod image;
pub mod luma;
pub mod resize;
pub mod transform;

pub use brush::{apply_brushes, apply_brushes_seeded, mix, mix_image, BrushSource};
pub use color::{hsv_to_rgb, rgb_to_grayscale, rgb_to_hsv};
pub use edge::{colorize_sobel, feature_normalize, sobel, SobelGradient};
pub use filter::{convolve, KernelKind};
pub use crate::image::{add, subtract, Image, ImageError};
pub use resize::{bilinear_resize, nearest_resize, resize, FilterType};
pub use transform::{compute_rotated_bounds, rotate};

/// Smallest brush downscale factor.
pub const MIN_RESIZE_FACTOR: f32 = 4.0;

/// Largest brush downscale factor.
pub const MAX_RESIZE_FACTOR: f32 = 10.0;

/// Largest accepted coverage: four times full cover.
pub const MAX_COVERAGE: f32 = 4.0;

/// Settings for the brush-stamp painter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Brush downscale hint, clamped to [4, 10]
    pub scale_hint: f32,
    /// Fraction of the canvas area covered by stamps, before overlap,
    /// clamped to [0, 4]
    pub coverage: f32,
    /// Stamps may start this many pixels outside the canvas
    pub margin: i32,
    /// Fixed seed for reproducible paintings
    pub seed: Option<u64>,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            scale_hint: 6.0,
            coverage: 0.25,
            margin: 50,
            seed: None,
        }
    }
}

impl BrushSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Factor each brush dimension is divided by before stamping.
    ///
    /// A NaN hint falls back to the smallest factor.
    pub fn resize_factor(&self) -> f32 {
        if self.scale_hint.is_nan() {
            return MIN_RESIZE_FACTOR;
        }
        self.scale_hint.clamp(MIN_RESIZE_FACTOR, MAX_RESIZE_FACTOR)
    }

    /// Coverage clamped to `[0, MAX_COVERAGE]`; NaN counts as 0.
    pub fn effective_coverage(&self) -> f32 {
        if self.coverage.is_nan() {
            return 0.0;
        }
        self.coverage.clamp(0.0, MAX_COVERAGE)
    }

    /// Number of stamps for a `width x height` canvas.
    ///
    /// `ceil(width * height * coverage / factor²)` with the coverage from
    /// [`effective_coverage`](Self::effective_coverage), never less than one.
    pub fn stamp_count(&self, width: usize, height: usize) -> usize {
        let factor = self.resize_factor() as f64;
        let area = width as f64 * height as f64;
        let count = (area * self.effective_coverage() as f64 / (factor * factor)).ceil();
        (count as usize).max(1)
    }
}
