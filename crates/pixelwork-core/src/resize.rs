//! Nearest-neighbor and bilinear resampling.
//!
//! Both resizers use pixel-center alignment: output pixel `d` maps to source
//! coordinate `-0.5 + (src_dim / dst_dim) * (d + 0.5)`. Samples are read
//! through the clamp-to-edge accessor, so coordinates that land slightly
//! outside the source reuse the border. Every channel is resampled
//! independently and a new image of the target size is returned.

use serde::{Deserialize, Serialize};

use crate::image::Image;

/// Filter type for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, blocky).
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Bilinear,
}

/// Resize an image to exact dimensions with the given filter.
pub fn resize(image: &Image, width: usize, height: usize, filter: FilterType) -> Image {
    match filter {
        FilterType::Nearest => nearest_resize(image, width, height),
        FilterType::Bilinear => bilinear_resize(image, width, height),
    }
}

/// Resize by sampling the nearest source pixel.
pub fn nearest_resize(image: &Image, width: usize, height: usize) -> Image {
    resample(image, width, height, nearest_interpolate)
}

/// Resize by blending the four surrounding source pixels.
pub fn bilinear_resize(image: &Image, width: usize, height: usize) -> Image {
    resample(image, width, height, bilinear_interpolate)
}

/// Sample channel `c` at the rounded coordinate.
#[inline]
pub fn nearest_interpolate(image: &Image, x: f32, y: f32, c: usize) -> f32 {
    image.get(x.round() as isize, y.round() as isize, c)
}

/// Sample channel `c` by bilinear interpolation.
///
/// The four taps are the floor/ceil combinations of `x` and `y`. On an axis
/// where the coordinate is integral both taps coincide and that sample is
/// returned unchanged.
#[inline]
pub fn bilinear_interpolate(image: &Image, x: f32, y: f32, c: usize) -> f32 {
    let (x0, x1) = (x.floor(), x.ceil());
    let (y0, y1) = (y.floor(), y.ceil());
    let fx = x - x0;
    let fy = y - y0;

    let (xl, xr) = (x0 as isize, x1 as isize);
    let (yt, yb) = (y0 as isize, y1 as isize);

    let top = image.get(xl, yt, c) * (1.0 - fx) + image.get(xr, yt, c) * fx;
    let bottom = image.get(xl, yb, c) * (1.0 - fx) + image.get(xr, yb, c) * fx;
    top * (1.0 - fy) + bottom * fy
}

/// Map an output coordinate back into source space.
#[inline]
fn source_coord(dst: usize, ratio: f32) -> f32 {
    -0.5 + ratio * (dst as f32 + 0.5)
}

fn resample(
    image: &Image,
    width: usize,
    height: usize,
    sample: impl Fn(&Image, f32, f32, usize) -> f32,
) -> Image {
    let mut out = Image::new(width, height, image.channels);
    if out.is_empty() {
        return out;
    }

    let x_ratio = image.width as f32 / width as f32;
    let y_ratio = image.height as f32 / height as f32;

    for c in 0..image.channels {
        for y in 0..height {
            let sy = source_coord(y, y_ratio);
            for x in 0..width {
                let sx = source_coord(x, x_ratio);
                out.set(x as isize, y as isize, c, sample(image, sx, sy, c));
            }
        }
    }

    out
}
