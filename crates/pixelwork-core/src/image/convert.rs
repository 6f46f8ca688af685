//! Conversion between 8-bit interleaved `image` crate buffers and planar
//! float images.
//!
//! Decoding and encoding stay with the `image` crate; these helpers only move
//! samples between its interleaved `u8` layout and the planar `[0, 1]` floats
//! the engine works on.

use super::Image;

impl Image {
    /// Build a 3-channel planar image from an `image::RgbImage`.
    pub fn from_rgb_image(img: &::image::RgbImage) -> Self {
        Self::from_interleaved(img.width() as usize, img.height() as usize, 3, img.as_raw())
    }

    /// Build a 1-channel image from an `image::GrayImage`.
    pub fn from_luma_image(img: &::image::GrayImage) -> Self {
        Self::from_interleaved(img.width() as usize, img.height() as usize, 1, img.as_raw())
    }

    /// Convert to an `image::RgbImage`, clamping samples to `[0, 1]`.
    ///
    /// Returns `None` unless the image has exactly 3 channels.
    pub fn to_rgb_image(&self) -> Option<::image::RgbImage> {
        if self.channels != 3 {
            return None;
        }
        ::image::RgbImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.to_interleaved(),
        )
    }

    /// Convert to an `image::GrayImage`, clamping samples to `[0, 1]`.
    ///
    /// Returns `None` unless the image has exactly 1 channel.
    pub fn to_luma_image(&self) -> Option<::image::GrayImage> {
        if self.channels != 1 {
            return None;
        }
        ::image::GrayImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.to_interleaved(),
        )
    }

    fn from_interleaved(width: usize, height: usize, channels: usize, raw: &[u8]) -> Self {
        let mut out = Image::new(width, height, channels);
        let plane = width * height;
        for (i, px) in raw.chunks_exact(channels).enumerate() {
            for (c, &v) in px.iter().enumerate() {
                out.data[i + c * plane] = v as f32 / 255.0;
            }
        }
        out
    }

    fn to_interleaved(&self) -> Vec<u8> {
        let plane = self.pixel_count();
        let mut raw = Vec::with_capacity(self.sample_count());
        for i in 0..plane {
            for c in 0..self.channels {
                let v = self.data[i + c * plane];
                raw.push((v.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_image_is_planar() {
        let rgb = ::image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 51]).unwrap();
        let img = Image::from_rgb_image(&rgb);

        assert_eq!(img.dimensions(), (2, 1, 3));
        assert_eq!(img.plane(0), &[1.0, 0.0]);
        assert_eq!(img.plane(1), &[0.0, 1.0]);
        assert!((img.get(1, 0, 2) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_to_rgb_image_clamps() {
        let img = Image::from_data(1, 1, 3, vec![-1.0, 0.5, 2.0]).unwrap();
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(rgb.as_raw(), &vec![0u8, 128, 255]);
    }

    #[test]
    fn test_rgb_round_trip() {
        let raw: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let rgb = ::image::RgbImage::from_raw(4, 3, raw.clone()).unwrap();
        let back = Image::from_rgb_image(&rgb).to_rgb_image().unwrap();
        assert_eq!(back.into_raw(), raw);
    }

    #[test]
    fn test_luma_conversion() {
        let gray = ::image::GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap();
        let img = Image::from_luma_image(&gray);
        assert_eq!(img.channels, 1);
        assert_eq!(img.to_luma_image().unwrap().into_raw(), vec![0, 128, 255]);
    }

    #[test]
    fn test_wrong_channel_count_returns_none() {
        assert!(Image::new(2, 2, 1).to_rgb_image().is_none());
        assert!(Image::new(2, 2, 3).to_luma_image().is_none());
    }
}
