//! RGB <-> HSV conversion and grayscale reduction.
//!
//! Hue, saturation and value are all expressed in `[0, 1]`: hue is the usual
//! angle divided by 360 degrees. Conversions work in place on a 3-channel image,
//! channel 0/1/2 holding R/G/B or H/S/V.
//!
//! Both directions reject any other channel count and leave the image untouched.

use log::warn;

use crate::image::{Image, ImageError};
use crate::luma::calculate_luma;

/// Convert a 3-channel RGB image to HSV in place.
///
/// # Errors
///
/// Returns `ImageError::ChannelCount` (and logs a warning) if the image does
/// not have exactly 3 channels. The image is left unmodified in that case.
pub fn rgb_to_hsv(image: &mut Image) -> Result<(), ImageError> {
    require_three_channels(image, "rgb_to_hsv")?;
    for_each_triple(image, rgb_to_hsv_pixel);
    Ok(())
}

/// Convert a 3-channel HSV image back to RGB in place.
///
/// # Errors
///
/// Returns `ImageError::ChannelCount` (and logs a warning) if the image does
/// not have exactly 3 channels. The image is left unmodified in that case.
pub fn hsv_to_rgb(image: &mut Image) -> Result<(), ImageError> {
    require_three_channels(image, "hsv_to_rgb")?;
    hsv_to_rgb_planes(image);
    Ok(())
}

/// Reduce a 3-channel RGB image to a single luma plane.
///
/// # Errors
///
/// Returns `ImageError::ChannelCount` if the image does not have 3 channels.
pub fn rgb_to_grayscale(image: &Image) -> Result<Image, ImageError> {
    if image.channels != 3 {
        return Err(ImageError::ChannelCount {
            expected: 3,
            actual: image.channels,
        });
    }
    let mut gray = Image::new(image.width, image.height, 1);
    let (r, g, b) = (image.plane(0), image.plane(1), image.plane(2));
    for (i, out) in gray.data.iter_mut().enumerate() {
        *out = calculate_luma(r[i], g[i], b[i]);
    }
    Ok(gray)
}

/// HSV -> RGB without the channel check; callers guarantee 3 planes.
pub(crate) fn hsv_to_rgb_planes(image: &mut Image) {
    for_each_triple(image, hsv_to_rgb_pixel);
}

/// Convert one RGB triple to `(h, s, v)`.
///
/// Hue ties are resolved in r, g, b order. A zero-chroma (gray) input has hue 0.
#[inline]
pub fn rgb_to_hsv_pixel(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = v - min;
    let s = if v > 0.0 { chroma / v } else { 0.0 };

    let hh = if chroma == 0.0 {
        0.0
    } else if v == r {
        (g - b) / chroma
    } else if v == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let mut h = if hh < 0.0 { hh / 6.0 + 1.0 } else { hh / 6.0 };
    if h < 0.0 {
        h += 1.0;
    } else if h >= 1.0 {
        h -= 1.0;
    }

    (h, s, v)
}

/// Convert one HSV triple to `(r, g, b)`.
///
/// Zero chroma short-circuits to `(v, v, v)`. A hue outside `[0, 1)` falls in
/// no sextant and yields the gray offset `(v - c)` on all channels.
#[inline]
pub fn hsv_to_rgb_pixel(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    if c == 0.0 {
        return (v, v, v);
    }
    let m = v - c;
    let hh = h * 6.0;
    let x = c * (1.0 - ((hh % 2.0) - 1.0).abs());

    let (r, g, b) = if (0.0..1.0).contains(&hh) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&hh) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&hh) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&hh) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&hh) {
        (x, 0.0, c)
    } else if (5.0..6.0).contains(&hh) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (r + m, g + m, b + m)
}

fn require_three_channels(image: &Image, op: &str) -> Result<(), ImageError> {
    if image.channels != 3 {
        warn!(
            "{} failed: image channels must be 3, got {}",
            op, image.channels
        );
        return Err(ImageError::ChannelCount {
            expected: 3,
            actual: image.channels,
        });
    }
    Ok(())
}

fn for_each_triple(image: &mut Image, f: impl Fn(f32, f32, f32) -> (f32, f32, f32)) {
    let n = image.pixel_count();
    let (p0, rest) = image.data.split_at_mut(n);
    let (p1, p2) = rest.split_at_mut(n);
    for i in 0..n {
        let (a, b, c) = f(p0[i], p1[i], p2[i]);
        p0[i] = a;
        p1[i] = b;
        p2[i] = c;
    }
}
