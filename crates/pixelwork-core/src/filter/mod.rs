//! Kernel construction and convolution.
//!
//! Kernels are ordinary [`Image`](crate::Image)s with one channel (or one per
//! image channel). Sharpen, emboss and high-pass responses leave `[0, 1]`;
//! callers clamp when they need displayable output.

mod convolve;
pub mod kernel;

pub use convolve::convolve;
pub(crate) use convolve::correlate;
pub use kernel::{
    box_kernel, emboss_kernel, gaussian_kernel, highpass_kernel, l1_normalize, sharpen_kernel,
    sobel_x_kernel, sobel_y_kernel, KernelKind, MAX_GAUSSIAN_SIZE,
};
