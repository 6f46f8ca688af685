//! Alpha blending of brush stamps onto an image.
//!
//! A stamp does not copy the patch of `base` beneath it. Every pixel it
//! covers is pulled towards one color, sampled from `base` at the stamp's
//! center, so each stamp lays down a flat tint shaped by the brush opacity.

use crate::image::Image;

/// Blend one brush stamp into `destination`.
///
/// The stamp's top-left corner sits at `(offset_x, offset_y)`. For each
/// destination pixel inside the stamp footprint, with `α` the brush's channel-0
/// value at that position (not clamped):
///
/// ```text
/// dest = dest * (1 - α) + base(cx, cy) * α
/// cx = offset_x + brush.width / 2,  cy = offset_y + brush.height / 2
/// ```
///
/// `base` is sampled with clamp-to-edge addressing, so stamps centered off the
/// canvas take the nearest border color. The footprint is clipped to the
/// destination.
///
/// # Panics
///
/// Panics if `base` is empty or has fewer channels than `destination`.
pub fn mix(base: &Image, destination: &mut Image, brush: &Image, offset_x: isize, offset_y: isize) {
    if destination.is_empty() || brush.is_empty() {
        return;
    }

    let cx = offset_x + (brush.width / 2) as isize;
    let cy = offset_y + (brush.height / 2) as isize;

    let x_start = offset_x.max(0);
    let y_start = offset_y.max(0);
    let x_end = (offset_x + brush.width as isize).min(destination.width as isize);
    let y_end = (offset_y + brush.height as isize).min(destination.height as isize);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    for c in 0..destination.channels {
        let tint = base.get(cx, cy, c);
        for y in y_start..y_end {
            for x in x_start..x_end {
                let alpha = brush.get(x - offset_x, y - offset_y, 0);
                let current = destination.get(x, y, c);
                destination.set(x, y, c, current * (1.0 - alpha) + tint * alpha);
            }
        }
    }
}

/// Blend a single brush anchored at the origin of `base` and return the result.
///
/// Pixels with `x > brush.width` or `y > brush.height` are copied from `base`.
/// Everything else (including the column and row just past the brush, which
/// read the brush's clamped edge) is blended towards
/// `base(brush.width / 2, brush.height / 2)`.
pub fn mix_image(base: &Image, brush: &Image) -> Image {
    let mut out = base.clone();
    if base.is_empty() || brush.is_empty() {
        return out;
    }

    let cx = (brush.width / 2) as isize;
    let cy = (brush.height / 2) as isize;

    for c in 0..base.channels {
        let tint = base.get(cx, cy, c);
        for y in 0..base.height as isize {
            for x in 0..base.width as isize {
                if x > brush.width as isize || y > brush.height as isize {
                    continue;
                }
                let alpha = brush.get(x, y, 0);
                out.set(x, y, c, base.get(x, y, c) * (1.0 - alpha) + tint * alpha);
            }
        }
    }

    out
}
