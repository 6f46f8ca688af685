//! Luma weights for RGB to grayscale conversion (ITU-R BT.601).

/// BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Weighted luma of an RGB triple. No clamping is applied.
#[inline]
pub fn calculate_luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
            assert!((calculate_luma(v, v, v) - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_luma_primaries() {
        assert!((calculate_luma(1.0, 0.0, 0.0) - 0.299).abs() < 1e-6);
        assert!((calculate_luma(0.0, 1.0, 0.0) - 0.587).abs() < 1e-6);
        assert!((calculate_luma(0.0, 0.0, 1.0) - 0.114).abs() < 1e-6);
    }

    #[test]
    fn test_luma_unclamped() {
        assert!(calculate_luma(2.0, 2.0, 2.0) > 1.0);
        assert!(calculate_luma(-1.0, 0.0, 0.0) < 0.0);
    }
}
