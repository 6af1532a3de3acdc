//! Interpolation helpers.

/// Bilinear interpolation on uniform lattices.
pub mod bilinear;

pub use bilinear::{bilinear_blend, locate_uniform};
