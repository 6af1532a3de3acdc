//! # mf-instruments
//!
//! European option payoffs priced by the finite-difference schemes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod option;
pub mod payoff;

pub use option::{EuropeanOption, StrikeSet};
pub use payoff::{
    EuropeanBearSpread, EuropeanBullSpread, EuropeanCall, EuropeanPut, EuropeanStrangleSpread,
};
