//! # mathfin
//!
//! European option pricing by finite-difference solution of the
//! Black-Scholes PDE.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mf-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! mathfin = "0.1"
//! ```
//!
//! Price a strangle with the implicit method and write the surface out for
//! plotting:
//!
//! ```rust
//! use mathfin::instruments::{EuropeanOption, EuropeanStrangleSpread};
//! use mathfin::methods::{Conditions, DiscretizationGrid, FdmScheme, PriceAt};
//! use mathfin::models::BlackScholesModel;
//!
//! let option = EuropeanStrangleSpread::new(1.0, &[80.0, 120.0]);
//! let model = BlackScholesModel::without_dividends(100.0, 0.05, 0.2)?;
//! let grid = DiscretizationGrid::new(0.0, 200.0, 100, 50)?;
//!
//! let (k0, k1) = (option.strikes()[0], option.strikes()[1]);
//! let conditions = Conditions::from_terminal_payoff(
//!     &option,
//!     |t| k0 * model.discount(option.maturity() - t),
//!     |t| grid.max_price() - k1 * model.discount(option.maturity() - t),
//! );
//!
//! let mut surface = grid.surface();
//! FdmScheme::Implicit.solve(&mut surface, &option, &model, &grid, &conditions)?;
//!
//! let price = surface.price_at(0.0, 100.0, &option, &grid)?;
//! assert!(price > 3.5 && price < 4.5);
//!
//! let exported = surface.to_string();
//! assert_eq!(exported.lines().count(), grid.time_steps() + 1);
//! # Ok::<(), mathfin::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use mf_core as core;

/// Dense matrices and bilinear interpolation.
pub use mf_math as math;

/// European options and their payoffs.
pub use mf_instruments as instruments;

/// The Black-Scholes market model.
pub use mf_models as models;

/// Finite-difference schemes, grids and surface lookup.
pub use mf_methods as methods;
