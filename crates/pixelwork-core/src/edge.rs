//! Sobel edge detection and false-color gradient visualization.

use crate::color::hsv_to_rgb_planes;
use crate::filter::{correlate, sobel_x_kernel, sobel_y_kernel};
use crate::image::Image;

/// Gradient magnitude and direction maps produced by [`sobel`].
#[derive(Debug, Clone, PartialEq)]
pub struct SobelGradient {
    /// `sqrt(gx² + gy²)` per pixel.
    pub magnitude: Image,
    /// `atan2(gy, gx)` per pixel, in `(-π, π]`.
    pub angle: Image,
}

/// Compute Sobel gradient magnitude and angle.
///
/// Both Sobel responses are taken without channel preservation, so a color
/// image contributes the sum of its channel gradients. Outputs are
/// single-channel and the same size as the input.
pub fn sobel(image: &Image) -> SobelGradient {
    let gx = correlate(image, &sobel_x_kernel(), false);
    let gy = correlate(image, &sobel_y_kernel(), false);

    let mut magnitude = Image::new(image.width, image.height, 1);
    let mut angle = Image::new(image.width, image.height, 1);

    for (i, (&x, &y)) in gx.data.iter().zip(&gy.data).enumerate() {
        magnitude.data[i] = (x * x + y * y).sqrt();
        angle.data[i] = y.atan2(x);
    }

    SobelGradient { magnitude, angle }
}

/// Render edges as color: hue from gradient direction, saturation and value
/// from gradient strength.
///
/// Magnitude and angle are feature-normalized independently before the HSV
/// image is converted to RGB. The result has 3 channels.
pub fn colorize_sobel(image: &Image) -> Image {
    let SobelGradient {
        mut magnitude,
        mut angle,
    } = sobel(image);
    feature_normalize(&mut magnitude);
    feature_normalize(&mut angle);

    let mut out = Image::new(image.width, image.height, 3);
    out.plane_mut(0).copy_from_slice(&angle.data);
    out.plane_mut(1).copy_from_slice(&magnitude.data);
    out.plane_mut(2).copy_from_slice(&magnitude.data);
    hsv_to_rgb_planes(&mut out);
    out
}

/// Rescale all samples so the global minimum maps to 0 and the maximum to 1.
///
/// Min and max are taken across every channel and position. When every
/// sample is equal the image becomes all zeros. An image with no samples is
/// left as is.
pub fn feature_normalize(image: &mut Image) {
    let Some(&first) = image.data.first() else {
        return;
    };
    let (min, max) = image
        .data
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;

    for v in image.data.iter_mut() {
        *v = if range != 0.0 { (*v - min) / range } else { 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    /// Vertical step: left half 0, right half 1.
    fn vertical_step(width: usize, height: usize) -> Image {
        let mut img = Image::new(width, height, 1);
        for y in 0..height {
            for x in width / 2..width {
                img.set(x as isize, y as isize, 0, 1.0);
            }
        }
        img
    }

    #[test]
    fn test_sobel_flat_image_has_no_gradient() {
        let img = Image::from_data(4, 4, 1, vec![0.3; 16]).unwrap();
        let grad = sobel(&img);
        assert!(grad.magnitude.data.iter().all(|&v| v.abs() < 1e-5));
    }

    #[test]
    fn test_sobel_vertical_edge() {
        let grad = sobel(&vertical_step(6, 5));
        assert_eq!(grad.magnitude.dimensions(), (6, 5, 1));
        assert_eq!(grad.angle.dimensions(), (6, 5, 1));

        // Columns 2 and 3 straddle the step; gx = 4 there, gy = 0
        assert!((grad.magnitude.get(2, 2, 0) - 4.0).abs() < 1e-5);
        assert!((grad.magnitude.get(3, 2, 0) - 4.0).abs() < 1e-5);
        assert!(grad.angle.get(2, 2, 0).abs() < 1e-5);
        // Far from the step
        assert!(grad.magnitude.get(0, 2, 0).abs() < 1e-5);
    }

    #[test]
    fn test_sobel_horizontal_edge_angle() {
        let mut img = Image::new(5, 6, 1);
        for y in 3..6 {
            for x in 0..5 {
                img.set(x, y, 0, 1.0);
            }
        }
        let grad = sobel(&img);
        // Brighter below: gy positive, angle pi/2
        assert!((grad.angle.get(2, 3, 0) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sobel_sums_color_channels() {
        let gray = vertical_step(6, 4);
        let mut color = Image::new(6, 4, 3);
        for c in 0..3 {
            color.plane_mut(c).copy_from_slice(&gray.data);
        }
        let g1 = sobel(&gray);
        let g3 = sobel(&color);
        assert!((g3.magnitude.get(2, 1, 0) - 3.0 * g1.magnitude.get(2, 1, 0)).abs() < 1e-4);
    }

    #[test]
    fn test_feature_normalize_bounds() {
        let mut img = Image::from_data(2, 1, 2, vec![-1.0, 3.0, 1.0, 0.0]).unwrap();
        feature_normalize(&mut img);
        assert_eq!(img.data, vec![0.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_feature_normalize_constant_is_zero() {
        let mut img = Image::from_data(3, 1, 1, vec![0.7; 3]).unwrap();
        feature_normalize(&mut img);
        assert_eq!(img.data, vec![0.0; 3]);
    }

    #[test]
    fn test_feature_normalize_empty_is_noop() {
        let mut img = Image::new(0, 0, 1);
        feature_normalize(&mut img);
        assert!(img.data.is_empty());
    }

    #[test]
    fn test_colorize_sobel_flat_image_is_black() {
        let img = Image::from_data(3, 3, 3, vec![0.5; 27]).unwrap();
        let out = colorize_sobel(&img);
        assert_eq!(out.dimensions(), (3, 3, 3));
        // Magnitude normalizes to 0 everywhere -> V = 0
        assert!(out.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_colorize_sobel_edges_are_bright() {
        let out = colorize_sobel(&vertical_step(8, 4));
        let edge = (0..3).map(|c| out.get(3, 1, c)).fold(0.0f32, f32::max);
        let flat = (0..3).map(|c| out.get(0, 1, c)).fold(0.0f32, f32::max);
        assert!((edge - 1.0).abs() < 1e-5);
        assert_eq!(flat, 0.0);
    }
}
