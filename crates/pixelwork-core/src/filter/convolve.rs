//! 2D correlation of an image with a kernel.

use crate::image::{Image, ImageError};

/// Convolve `image` with `kernel`.
///
/// The kernel is applied without flipping (correlation), centered on each
/// pixel; taps that fall outside the image read the nearest edge sample. A
/// single-channel kernel is reused for every image channel, otherwise kernel
/// channel `c` is applied to image channel `c`.
///
/// With `preserve` the output keeps one plane per image channel. Without it
/// the per-channel responses are added into a single plane.
///
/// Results are not clamped.
///
/// # Errors
///
/// Returns `ImageError::KernelChannels` if the kernel has neither 1 channel nor
/// as many channels as the image.
pub fn convolve(image: &Image, kernel: &Image, preserve: bool) -> Result<Image, ImageError> {
    if kernel.channels != 1 && kernel.channels != image.channels {
        return Err(ImageError::KernelChannels {
            kernel: kernel.channels,
            image: image.channels,
        });
    }
    Ok(correlate(image, kernel, preserve))
}

/// Correlation without the channel check; callers guarantee a compatible kernel.
pub(crate) fn correlate(image: &Image, kernel: &Image, preserve: bool) -> Image {
    let out_channels = if preserve { image.channels } else { 1 };
    let mut out = Image::new(image.width, image.height, out_channels);
    if image.is_empty() || kernel.is_empty() {
        return out;
    }

    let half_w = (kernel.width / 2) as isize;
    let half_h = (kernel.height / 2) as isize;

    for y in 0..image.height as isize {
        for x in 0..image.width as isize {
            let mut total = 0.0;
            for c in 0..image.channels {
                let kc = if kernel.channels == 1 { 0 } else { c };
                let mut sum = 0.0;
                for b in 0..kernel.height as isize {
                    for a in 0..kernel.width as isize {
                        let sample = image.get(x - half_w + a, y - half_h + b, c);
                        sum += sample * kernel.get(a, b, kc);
                    }
                }
                if preserve {
                    out.set(x, y, c, sum);
                }
                total += sum;
            }
            if !preserve {
                out.set(x, y, 0, total);
            }
        }
    }

    out
}
