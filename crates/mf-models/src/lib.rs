//! # mf-models
//!
//! Market models consumed by the finite-difference schemes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Constant-parameter Black-Scholes model.
pub mod black_scholes;

pub use black_scholes::BlackScholesModel;
