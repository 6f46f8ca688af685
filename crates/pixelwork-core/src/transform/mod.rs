//! Geometric transforms.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel, `x` to the right, `y` down
//! - Rotation angles are in degrees and are normalized into `[0, 360)`
//! - Rotated output is sized to the rotated bounding box (no clipping)

mod rotation;

pub use rotation::{compute_rotated_bounds, rotate};
