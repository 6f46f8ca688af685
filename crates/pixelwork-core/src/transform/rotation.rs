//! Arbitrary-angle rotation by forward mapping with hole filling.
//!
//! # Algorithm
//!
//! Every source pixel `(i, j)` is pushed to
//!
//! ```text
//! x' = i * cos(θ) - j * sin(θ) + ox
//! y' = j * cos(θ) + i * sin(θ) + oy
//! ```
//!
//! where `(ox, oy)` depends on the quadrant of `θ` and shifts the rotated
//! rectangle onto a non-negative canvas sized to its bounding box. Writes go
//! through the clamping setter in scan order, so colliding pixels keep the
//! last value written.
//!
//! Forward mapping leaves gaps. A second pass replaces every sample that is
//! still exactly zero with the mean of its eight neighbours. A genuine zero in
//! the source is treated as a gap too.

use log::debug;

use crate::image::Image;

/// Compute the canvas size for a rotated image.
///
/// The bounding box of a `width x height` rectangle rotated by `angle_degrees`
/// is `|w·cos| + |h·sin|` by `|h·cos| + |w·sin|`, rounded to whole pixels and
/// never smaller than 1x1. Quarter turns are exact.
pub fn compute_rotated_bounds(width: usize, height: usize, angle_degrees: f64) -> (usize, usize) {
    let angle = angle_degrees.rem_euclid(360.0);

    // Fast paths: quarter turns keep or swap the dimensions exactly
    if angle.abs() < 0.001 || (360.0 - angle).abs() < 0.001 || (angle - 180.0).abs() < 0.001 {
        return (width.max(1), height.max(1));
    }
    if (angle - 90.0).abs() < 0.001 || (angle - 270.0).abs() < 0.001 {
        return (height.max(1), width.max(1));
    }

    let rad = angle.to_radians();
    let cos = rad.cos().abs();
    let sin = rad.sin().abs();
    let (w, h) = (width as f64, height as f64);

    let new_w = (w * cos + h * sin).round() as usize;
    let new_h = (h * cos + w * sin).round() as usize;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image counter-clockwise (in image coordinates, `y` down this
/// turns `+x` towards `+y`) by `angle_degrees`.
///
/// The output canvas is the rotated bounding box; uncovered corners stay 0.
/// Each channel plane is rotated with the same mapping. Intended for
/// single-channel stamps, but any channel count works.
pub fn rotate(image: &Image, angle_degrees: f64) -> Image {
    if image.is_empty() {
        return image.clone();
    }

    let angle = angle_degrees.rem_euclid(360.0);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle);
    debug!(
        "rotate {}x{} by {:.2} deg -> {}x{}",
        image.width, image.height, angle, dst_w, dst_h
    );

    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let (ox, oy) = quadrant_offset(image.width, image.height, angle, sin, cos);

    let mut mapped = Image::new(dst_w, dst_h, image.channels);
    for c in 0..image.channels {
        for j in 0..image.height {
            for i in 0..image.width {
                let (fi, fj) = (i as f64, j as f64);
                let x = (fi * cos - fj * sin + ox).round() as isize;
                let y = (fj * cos + fi * sin + oy).round() as isize;
                mapped.set(x, y, c, image.get(i as isize, j as isize, c));
            }
        }
    }

    fill_holes(&mapped)
}

/// Translation that moves the rotated source rectangle onto the canvas.
///
/// Uses the extreme pixel centers (`w - 1`, `h - 1`) so the mapped corners
/// land exactly on the canvas border.
fn quadrant_offset(width: usize, height: usize, angle: f64, sin: f64, cos: f64) -> (f64, f64) {
    let w = (width - 1) as f64;
    let h = (height - 1) as f64;

    if angle <= 90.0 {
        (h * sin, 0.0)
    } else if angle <= 180.0 {
        (h * sin - w * cos, -h * cos)
    } else if angle <= 270.0 {
        (-w * cos, -w * sin - h * cos)
    } else {
        (0.0, -w * sin)
    }
}

/// Replace zero samples by the mean of their 8 neighbours.
///
/// Neighbours are read from the forward-mapped image, not from samples filled
/// earlier in the same pass, so the result does not depend on scan order.
fn fill_holes(mapped: &Image) -> Image {
    let mut out = mapped.clone();
    for c in 0..mapped.channels {
        for y in 0..mapped.height as isize {
            for x in 0..mapped.width as isize {
                if mapped.get(x, y, c) != 0.0 {
                    continue;
                }
                let mut sum = 0.0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        sum += mapped.get(x + dx, y + dy, c);
                    }
                }
                out.set(x, y, c, sum / 8.0);
            }
        }
    }
    out
}
