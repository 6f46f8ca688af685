//! Core types for the planar pixel buffer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The operation needs a specific number of channels.
    #[error("Expected {expected} channels, image has {actual}")]
    ChannelCount { expected: usize, actual: usize },

    /// Kernel channel count is neither 1 nor the image channel count.
    #[error("Kernel has {kernel} channels, image has {image} (kernel must have 1 or {image})")]
    KernelChannels { kernel: usize, image: usize },

    /// Two images that must share dimensions do not.
    #[error("Dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },

    /// A raw sample buffer does not match the declared dimensions.
    #[error("Sample buffer has {actual} values, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The brush source has no stamps to draw from.
    #[error("No brushes available")]
    NoBrushes,

    /// A brush index outside the source was requested.
    #[error("Brush {0} not found")]
    MissingBrush(usize),
}

/// A dense floating-point image with planar channel layout.
///
/// Sample `(x, y, c)` lives at `x + y * width + c * width * height`: each
/// channel is a row-major `width x height` plane and planes are stored one after
/// another. Samples carry no range invariant; only [`Image::clamp`] forces
/// them into `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Number of channel planes.
    pub channels: usize,
    /// Planar sample data, `width * height * channels` values.
    pub data: Vec<f32>,
}

impl Image {
    /// Create a zero-filled image with the given dimensions.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width * height * channels],
        }
    }

    /// Wrap an existing planar sample buffer.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::BufferSize` if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_data(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, ImageError> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Dimensions as `(width, height, channels)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Number of pixels in one plane.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Total number of samples across all planes.
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Check if this image holds no samples.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.channels == 0
    }

    #[inline]
    fn index(&self, x: isize, y: isize, c: usize) -> usize {
        assert!(
            c < self.channels,
            "channel {} out of range for {}-channel image",
            c,
            self.channels
        );
        assert!(
            self.width > 0 && self.height > 0,
            "pixel access on an empty {}x{} image",
            self.width,
            self.height
        );
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        x + y * self.width + c * self.width * self.height
    }

    /// Read a sample with clamp-to-edge addressing.
    ///
    /// `x` and `y` may lie anywhere; each is clamped independently to the
    /// nearest valid column / row.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels` or the image has zero width or height.
    #[inline]
    pub fn get(&self, x: isize, y: isize, c: usize) -> f32 {
        self.data[self.index(x, y, c)]
    }

    /// Write a sample with clamp-to-edge addressing.
    ///
    /// Out-of-range coordinates overwrite the nearest edge sample.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels` or the image has zero width or height.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, c: usize, value: f32) {
        let idx = self.index(x, y, c);
        self.data[idx] = value;
    }

    /// Borrow one channel plane.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn plane(&self, c: usize) -> &[f32] {
        assert!(c < self.channels, "channel {} out of range", c);
        let n = self.pixel_count();
        &self.data[c * n..(c + 1) * n]
    }

    /// Mutably borrow one channel plane.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn plane_mut(&mut self, c: usize) -> &mut [f32] {
        assert!(c < self.channels, "channel {} out of range", c);
        let n = self.pixel_count();
        &mut self.data[c * n..(c + 1) * n]
    }
}
