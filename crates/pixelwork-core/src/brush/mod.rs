//! Brush-stamp compositing.
//!
//! - [`mix`] blends one stamp into a destination image
//! - [`apply_brushes`] paints an image with many randomized stamps

mod mix;
mod stamp;

pub use mix::{mix, mix_image};
pub use stamp::{apply_brushes, apply_brushes_seeded, BrushSource};
