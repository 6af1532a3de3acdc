//! # mf-math
//!
//! Mathematical utilities: a matrix newtype over nalgebra and bilinear
//! interpolation on uniform lattices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 2D interpolation schemes.
pub mod interpolations;

/// Dense real matrix.
pub mod matrix;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{bilinear_blend, locate_uniform};
pub use matrix::Matrix;
