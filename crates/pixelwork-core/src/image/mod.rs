//! Planar float pixel buffer.
//!
//! [`Image`] is the single value type of the engine. Every other module reads
//! and writes pixels through its clamp-to-edge accessors, so spatial algorithms
//! can index past the border without special-casing edges.
//!
//! # Layout
//!
//! Samples are stored plane by plane: index `x + y * width + c * width * height`.

mod convert;
mod ops;
mod types;

pub use ops::{add, subtract};
pub use types::{Image, ImageError};
