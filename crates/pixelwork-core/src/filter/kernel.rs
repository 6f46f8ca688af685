//! Convolution kernel constructors.
//!
//! Every constructor returns a fresh single-channel [`Image`]. The fixed 3x3
//! kernels are written row by row as they appear on the image (`y` down).

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::image::Image;

/// Named kernels that can be built on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KernelKind {
    /// Box (mean) filter of the given side length.
    Box(usize),
    /// Normalized Gaussian with the given standard deviation.
    Gaussian(f32),
    /// Horizontal Sobel gradient.
    SobelX,
    /// Vertical Sobel gradient.
    SobelY,
    /// Laplacian-style high-pass filter.
    Highpass,
    /// Sharpen (identity plus high-pass).
    Sharpen,
    /// Diagonal emboss.
    Emboss,
}

impl KernelKind {
    /// Build the kernel image.
    pub fn build(self) -> Image {
        match self {
            KernelKind::Box(size) => box_kernel(size),
            KernelKind::Gaussian(sigma) => gaussian_kernel(sigma),
            KernelKind::SobelX => sobel_x_kernel(),
            KernelKind::SobelY => sobel_y_kernel(),
            KernelKind::Highpass => highpass_kernel(),
            KernelKind::Sharpen => sharpen_kernel(),
            KernelKind::Emboss => emboss_kernel(),
        }
    }

    /// Whether convolution with this kernel is usually run with per-channel
    /// output.
    ///
    /// High-pass and gradient kernels detect features and are collapsed to
    /// one plane; smoothing, sharpen and emboss keep the image colored.
    pub fn preserves_channels(self) -> bool {
        !matches!(
            self,
            KernelKind::Highpass | KernelKind::SobelX | KernelKind::SobelY
        )
    }

    /// Whether the kernel output can leave `[0, 1]` and should be clamped
    /// before display.
    pub fn needs_clamp(self) -> bool {
        matches!(
            self,
            KernelKind::Highpass | KernelKind::Sharpen | KernelKind::Emboss
        )
    }
}

/// Divide every plane by its sum so its weights add up to 1.
///
/// A plane whose sum is exactly 0 is replaced by the uniform weight
/// `1 / (width * height)`.
pub fn l1_normalize(image: &mut Image) {
    let uniform = 1.0 / image.pixel_count() as f32;
    for c in 0..image.channels {
        let plane = image.plane_mut(c);
        let sum: f32 = plane.iter().sum();
        for v in plane.iter_mut() {
            if sum != 0.0 {
                *v /= sum;
            } else {
                *v = uniform;
            }
        }
    }
}

/// A `size x size` box filter, every weight `1 / size²`.
pub fn box_kernel(size: usize) -> Image {
    let weight = 1.0 / (size * size) as f32;
    let mut kernel = Image::new(size, size, 1);
    kernel.data.fill(weight);
    kernel
}

/// Largest side length of a Gaussian kernel.
pub const MAX_GAUSSIAN_SIZE: usize = 255;

/// A normalized 2D Gaussian with standard deviation `sigma`.
///
/// The side length is `ceil(6 * sigma)` bumped to the next odd number, so the
/// kernel reaches three deviations on either side of the center. A
/// non-positive or non-finite `sigma` gives the 1x1 identity kernel. The side
/// never exceeds [`MAX_GAUSSIAN_SIZE`]; wider Gaussians are truncated.
pub fn gaussian_kernel(sigma: f32) -> Image {
    if !sigma.is_finite() || sigma <= 0.0 {
        return box_kernel(1);
    }

    let size = ((sigma * 6.0).ceil() as usize).min(MAX_GAUSSIAN_SIZE) | 1;
    let radius = (size / 2) as isize;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel = Image::new(size, size, 1);

    for j in -radius..=radius {
        for i in -radius..=radius {
            let d2 = (i * i + j * j) as f32;
            let value = (-d2 / two_sigma_sq).exp() / (PI * two_sigma_sq);
            kernel.set(i + radius, j + radius, 0, value);
        }
    }

    l1_normalize(&mut kernel);
    kernel
}

/// Horizontal Sobel gradient (responds to left-to-right increases).
pub fn sobel_x_kernel() -> Image {
    kernel_3x3([
        [-1.0, 0.0, 1.0],
        [-2.0, 0.0, 2.0],
        [-1.0, 0.0, 1.0],
    ])
}

/// Vertical Sobel gradient (responds to top-to-bottom increases).
pub fn sobel_y_kernel() -> Image {
    kernel_3x3([
        [-1.0, -2.0, -1.0],
        [0.0, 0.0, 0.0],
        [1.0, 2.0, 1.0],
    ])
}

/// High-pass filter: center 4, edge neighbours -1. Weights sum to 0.
pub fn highpass_kernel() -> Image {
    kernel_3x3([
        [0.0, -1.0, 0.0],
        [-1.0, 4.0, -1.0],
        [0.0, -1.0, 0.0],
    ])
}

/// Sharpen filter: center 5, edge neighbours -1. Weights sum to 1.
pub fn sharpen_kernel() -> Image {
    kernel_3x3([
        [0.0, -1.0, 0.0],
        [-1.0, 5.0, -1.0],
        [0.0, -1.0, 0.0],
    ])
}

/// Emboss filter lit from the top-left.
pub fn emboss_kernel() -> Image {
    kernel_3x3([
        [-2.0, -1.0, 0.0],
        [-1.0, 1.0, 1.0],
        [0.0, 1.0, 2.0],
    ])
}

fn kernel_3x3(rows: [[f32; 3]; 3]) -> Image {
    let mut kernel = Image::new(3, 3, 1);
    for (y, row) in rows.iter().enumerate() {
        for (x, &w) in row.iter().enumerate() {
            kernel.set(x as isize, y as isize, 0, w);
        }
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(img: &Image) -> f32 {
        img.data.iter().sum()
    }

    #[test]
    fn test_box_kernel() {
        let k = box_kernel(3);
        assert_eq!(k.dimensions(), (3, 3, 1));
        assert!(k.data.iter().all(|&v| (v - 1.0 / 9.0).abs() < 1e-7));
        assert!((sum(&k) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_size_is_odd() {
        assert_eq!(gaussian_kernel(1.0).width, 7);
        assert_eq!(gaussian_kernel(2.0).width, 13);
        assert_eq!(gaussian_kernel(1.5).width, 9);
        assert_eq!(gaussian_kernel(0.3).width, 3);
        for sigma in [0.1f32, 0.5, 0.9, 1.2, 2.7, 4.0] {
            let k = gaussian_kernel(sigma);
            assert_eq!(k.width % 2, 1, "sigma {}", sigma);
            assert_eq!(k.width, k.height);
        }
    }

    #[test]
    fn test_gaussian_is_normalized_and_peaked() {
        let k = gaussian_kernel(2.0);
        assert!((sum(&k) - 1.0).abs() < 1e-5);
        let center = k.get(6, 6, 0);
        assert!(k.data.iter().all(|&v| v <= center));
        // Symmetric about the center
        assert!((k.get(0, 6, 0) - k.get(12, 6, 0)).abs() < 1e-9);
        assert!((k.get(3, 1, 0) - k.get(1, 3, 0)).abs() < 1e-9);
    }

    #[test]
    fn test_gaussian_degenerate_sigma_is_identity() {
        let k = gaussian_kernel(0.0);
        assert_eq!(k.dimensions(), (1, 1, 1));
        assert_eq!(k.data, vec![1.0]);
        assert_eq!(gaussian_kernel(-1.0).data, vec![1.0]);
        assert_eq!(gaussian_kernel(f32::NAN).data, vec![1.0]);
        assert_eq!(gaussian_kernel(f32::INFINITY).data, vec![1.0]);
        assert_eq!(gaussian_kernel(f32::NEG_INFINITY).data, vec![1.0]);
    }

    #[test]
    fn test_gaussian_size_is_capped() {
        let k = gaussian_kernel(1e6);
        assert_eq!(k.dimensions(), (MAX_GAUSSIAN_SIZE, MAX_GAUSSIAN_SIZE, 1));
        let sum: f32 = k.data.iter().sum();
        assert!((sum - 1.0).abs() < 1e-2);
        // 42.5 * 6 = 255 exactly
        assert_eq!(gaussian_kernel(42.5).width, MAX_GAUSSIAN_SIZE);
    }

    #[test]
    fn test_l1_normalize_per_channel() {
        let mut img = Image::from_data(2, 1, 2, vec![1.0, 3.0, 2.0, 2.0]).unwrap();
        l1_normalize(&mut img);
        assert_eq!(img.data, vec![0.25, 0.75, 0.5, 0.5]);
    }

    #[test]
    fn test_l1_normalize_zero_sum_is_uniform() {
        let mut img = Image::from_data(2, 2, 1, vec![1.0, -1.0, 2.0, -2.0]).unwrap();
        l1_normalize(&mut img);
        assert!(img.data.iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_fixed_kernel_sums() {
        assert_eq!(sum(&highpass_kernel()), 0.0);
        assert_eq!(sum(&sharpen_kernel()), 1.0);
        assert_eq!(sum(&emboss_kernel()), 1.0);
        assert_eq!(sum(&sobel_x_kernel()), 0.0);
        assert_eq!(sum(&sobel_y_kernel()), 0.0);
    }

    #[test]
    fn test_sobel_orientation() {
        let gx = sobel_x_kernel();
        assert_eq!(gx.get(0, 1, 0), -2.0);
        assert_eq!(gx.get(2, 1, 0), 2.0);
        let gy = sobel_y_kernel();
        assert_eq!(gy.get(1, 0, 0), -2.0);
        assert_eq!(gy.get(1, 2, 0), 2.0);
    }

    #[test]
    fn test_emboss_layout() {
        let k = emboss_kernel();
        assert_eq!(k.get(0, 0, 0), -2.0);
        assert_eq!(k.get(2, 2, 0), 2.0);
        assert_eq!(k.get(2, 0, 0), 0.0);
        assert_eq!(k.get(0, 2, 0), 0.0);
    }

    #[test]
    fn test_kernel_kind_build() {
        assert_eq!(KernelKind::Box(5).build(), box_kernel(5));
        assert_eq!(KernelKind::Sharpen.build(), sharpen_kernel());
        assert_eq!(KernelKind::Gaussian(1.0).build(), gaussian_kernel(1.0));
    }

    #[test]
    fn test_kernel_kind_hints() {
        assert!(!KernelKind::Highpass.preserves_channels());
        assert!(KernelKind::Sharpen.preserves_channels());
        assert!(KernelKind::Emboss.needs_clamp());
        assert!(!KernelKind::Gaussian(2.0).needs_clamp());
    }
}
