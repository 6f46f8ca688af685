//! Pointwise image arithmetic.
//!
//! In-place adjustments (`shift`, `scale`, `clamp`) mutate the receiver;
//! `add` and `subtract` allocate a new image.

use super::{Image, ImageError};

impl Image {
    /// Add `value` to every sample of channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn shift(&mut self, c: usize, value: f32) {
        for v in self.plane_mut(c) {
            *v += value;
        }
    }

    /// Multiply every sample of channel `c` by `factor`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels`.
    pub fn scale(&mut self, c: usize, factor: f32) {
        for v in self.plane_mut(c) {
            *v *= factor;
        }
    }

    /// Clamp every sample into `[0, 1]`.
    pub fn clamp(&mut self) {
        for v in self.data.iter_mut() {
            *v = v.clamp(0.0, 1.0);
        }
    }
}

/// Elementwise sum of two images.
///
/// # Errors
///
/// Returns `ImageError::DimensionMismatch` unless width, height and channel
/// count all agree.
pub fn add(a: &Image, b: &Image) -> Result<Image, ImageError> {
    zip_with(a, b, |x, y| x + y)
}

/// Elementwise difference `a - b`.
///
/// # Errors
///
/// Returns `ImageError::DimensionMismatch` unless width, height and channel
/// count all agree.
pub fn subtract(a: &Image, b: &Image) -> Result<Image, ImageError> {
    zip_with(a, b, |x, y| x - y)
}

fn zip_with(a: &Image, b: &Image, op: impl Fn(f32, f32) -> f32) -> Result<Image, ImageError> {
    if a.dimensions() != b.dimensions() {
        return Err(ImageError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| op(x, y))
        .collect();
    Image::from_data(a.width, a.height, a.channels, data)
}
