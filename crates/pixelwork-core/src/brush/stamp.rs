//! Randomized brush-stamp painting.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::mix::mix;
use crate::image::{Image, ImageError};
use crate::resize::bilinear_resize;
use crate::transform::rotate;
use crate::BrushSettings;

/// A collection of brush opacity images.
///
/// Channel 0 of each brush is read as opacity. Brushes are handed out by value
/// so a source may load or decode them on demand.
pub trait BrushSource {
    /// Number of available brushes.
    fn len(&self) -> usize;

    /// Whether the source has no brushes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch brush `index`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::MissingBrush` if `index >= len()`; other sources
    /// may fail for their own reasons.
    fn brush(&self, index: usize) -> Result<Image, ImageError>;
}

impl BrushSource for [Image] {
    fn len(&self) -> usize {
        <[Image]>::len(self)
    }

    fn brush(&self, index: usize) -> Result<Image, ImageError> {
        self.get(index).cloned().ok_or(ImageError::MissingBrush(index))
    }
}

impl BrushSource for Vec<Image> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn brush(&self, index: usize) -> Result<Image, ImageError> {
        BrushSource::brush(self.as_slice(), index)
    }
}

/// Paint `base` with randomly placed, scaled and rotated brush stamps.
///
/// Each stamp picks a brush uniformly, shrinks it by
/// [`BrushSettings::resize_factor`], rotates it by a uniform angle in
/// `[0, 360)` and places its top-left corner uniformly in
/// `[-margin, width + margin) x [-margin, height + margin)`. The stamp is then
/// blended with [`mix`], tinted by the `base` color under its center. The
/// number of stamps is [`BrushSettings::stamp_count`].
///
/// `base` itself is never modified. Empty brushes are skipped.
///
/// # Errors
///
/// Returns `ImageError::NoBrushes` if `brushes` is empty, or the first error
/// reported by the brush source.
pub fn apply_brushes<B, R>(
    base: &Image,
    brushes: &B,
    settings: &BrushSettings,
    rng: &mut R,
) -> Result<Image, ImageError>
where
    B: BrushSource + ?Sized,
    R: Rng,
{
    if brushes.is_empty() {
        return Err(ImageError::NoBrushes);
    }
    if base.is_empty() {
        return Ok(base.clone());
    }

    let factor = settings.resize_factor();
    let stamps = settings.stamp_count(base.width, base.height);
    let margin = i64::from(settings.margin.max(0));
    debug!(
        "painting {}x{} with {} stamps from {} brushes (factor {:.2})",
        base.width,
        base.height,
        stamps,
        brushes.len(),
        factor
    );

    let mut canvas = base.clone();
    for _ in 0..stamps {
        let brush = brushes.brush(rng.random_range(0..brushes.len()))?;
        if brush.is_empty() {
            continue;
        }

        let width = scaled_dimension(brush.width, factor);
        let height = scaled_dimension(brush.height, factor);
        let angle = rng.random_range(0.0..360.0);
        let stamp = rotate(&bilinear_resize(&brush, width, height), angle);

        let x = stamp_offset(rng, margin, base.width);
        let y = stamp_offset(rng, margin, base.height);
        mix(base, &mut canvas, &stamp, x, y);
    }

    Ok(canvas)
}

/// [`apply_brushes`] with randomness taken from `settings.seed`.
///
/// A fixed seed reproduces the same painting; without one the thread-local
/// generator is used.
pub fn apply_brushes_seeded<B>(
    base: &Image,
    brushes: &B,
    settings: &BrushSettings,
) -> Result<Image, ImageError>
where
    B: BrushSource + ?Sized,
{
    match settings.seed {
        Some(seed) => apply_brushes(base, brushes, settings, &mut StdRng::seed_from_u64(seed)),
        None => apply_brushes(base, brushes, settings, &mut rand::rng()),
    }
}

/// Uniform offset in `[-margin, extent + margin)`.
///
/// Drawn as `i64` since `rand` has no uniform sampler for `isize`.
fn stamp_offset<R: Rng>(rng: &mut R, margin: i64, extent: usize) -> isize {
    rng.random_range(-margin..extent as i64 + margin) as isize
}

#[inline]
fn scaled_dimension(dim: usize, factor: f32) -> usize {
    ((dim as f32 / factor).round() as usize).max(1)
}
