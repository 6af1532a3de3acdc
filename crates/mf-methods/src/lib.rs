//! # mf-methods
//!
//! Finite-difference methods for pricing European options under the
//! Black-Scholes model.
//!
//! # Modules
//!
//! * [`finite_differences`]: grid, conditions, tridiagonal operator, the
//!   explicit, implicit and Crank-Nicolson schemes, and surface lookup
//!
//! # Example
//!
//! ```
//! use mf_instruments::{EuropeanOption, EuropeanPut};
//! use mf_methods::{Conditions, DiscretizationGrid, FdmScheme, PriceAt};
//! use mf_models::BlackScholesModel;
//!
//! let option = EuropeanPut::new(1.0, &[100.0]);
//! let model = BlackScholesModel::without_dividends(100.0, 0.05, 0.2)?;
//! let grid = DiscretizationGrid::new(0.0, 200.0, 200, 100)?;
//! let conditions = Conditions::from_terminal_payoff(
//!     &option,
//!     |t| 100.0 * model.discount(option.maturity() - t),
//!     |_| 0.0,
//! );
//!
//! let mut surface = grid.surface();
//! FdmScheme::CrankNicolson.solve(&mut surface, &option, &model, &grid, &conditions)?;
//! let price = surface.price_at(0.0, 100.0, &option, &grid)?;
//! assert!((price - 5.573).abs() < 0.05);
//! # Ok::<(), mf_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: grid, schemes, tridiagonal solver, lookup.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    Conditions, DiscretizationGrid, FdmScheme, PriceAt, TridiagonalLu, TridiagonalOperator,
};
