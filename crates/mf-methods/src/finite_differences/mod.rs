//! Finite-difference solvers for the Black-Scholes PDE.
//!
//! `∂V/∂t + ½σ²S²·∂²V/∂S² + rS·∂V/∂S − rV = 0`
//!
//! is solved backward in time on a uniform [`DiscretizationGrid`], starting
//! from the terminal condition at maturity and closing the price axis with
//! the lower and upper boundary conditions.
//!
//! # Overview
//!
//! * [`DiscretizationGrid`]: uniform time × price lattice
//! * [`Conditions`]: terminal and boundary conditions
//! * [`TridiagonalOperator`]: banded operator with Thomas-algorithm LU
//! * [`explicit`], [`implicit`], [`crank_nicolson`]: the three schemes
//! * [`FdmScheme`]: pick one of the schemes by value
//! * [`PriceAt`]: bilinear lookup on a solved surface

use mf_core::{errors::Result, Error, Real, Size};
use mf_instruments::EuropeanOption;
use mf_math::Matrix;
use mf_models::BlackScholesModel;
use tracing::warn;

pub mod conditions;
pub mod crank_nicolson;
pub mod explicit;
pub mod grid;
pub mod implicit;
pub mod interpolation;
pub mod tridiagonal;

pub use conditions::Conditions;
pub use grid::DiscretizationGrid;
pub use interpolation::PriceAt;
pub use tridiagonal::{TridiagonalLu, TridiagonalOperator};

// ─── FDM scheme selection ─────────────────────────────────────────────────────

/// Finite difference time-stepping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FdmScheme {
    /// Explicit: `V^{i−1} = A · V^{i}`, conditionally stable (`k ≤ h²/2`).
    Explicit,
    /// Fully implicit: `A · V^{i−1} = V^{i}`, unconditionally stable.
    Implicit,
    /// Crank-Nicolson: average of explicit and implicit, second-order in time.
    CrankNicolson,
}

impl FdmScheme {
    /// All schemes, in the order listed above.
    pub const ALL: [FdmScheme; 3] = [Self::Explicit, Self::Implicit, Self::CrankNicolson];

    /// Human-readable scheme name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
            Self::CrankNicolson => "crank-nicolson",
        }
    }

    /// Fill `surface` by solving the PDE with this scheme.
    ///
    /// `surface` must have the shape of [`DiscretizationGrid::surface`].
    /// On error its contents are unspecified.
    pub fn solve(
        self,
        surface: &mut Matrix,
        option: &dyn EuropeanOption,
        model: &BlackScholesModel,
        grid: &DiscretizationGrid,
        conditions: &Conditions<'_>,
    ) -> Result<()> {
        match self {
            Self::Explicit => explicit::solve(surface, option, model, grid, conditions),
            Self::Implicit => implicit::solve(surface, option, model, grid, conditions),
            Self::CrankNicolson => {
                crank_nicolson::solve(surface, option, model, grid, conditions)
            }
        }
    }
}

impl std::fmt::Display for FdmScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Shared steps ─────────────────────────────────────────────────────────────

/// Checks shared by the implicit-family schemes.
pub(crate) fn validate(
    surface: &Matrix,
    grid: &DiscretizationGrid,
    maturity: Real,
) -> Result<()> {
    grid.ensure_interior_nodes()?;
    grid.ensure_surface_shape(surface)?;
    mf_core::ensure!(
        maturity.is_finite() && maturity > 0.0,
        "maturity must be positive, got {maturity}"
    );
    Ok(())
}

/// Write the terminal condition into the maturity row.
pub(crate) fn fill_terminal(
    surface: &mut Matrix,
    grid: &DiscretizationGrid,
    conditions: &Conditions<'_>,
) -> Result<()> {
    let i_max = grid.time_steps();
    for j in 0..=grid.price_steps() {
        surface[(i_max, j)] = conditions.terminal(grid.s(j))?;
    }
    Ok(())
}

/// Write both boundary values of `row` and return them as `(lower, upper)`.
pub(crate) fn fill_boundaries(
    surface: &mut Matrix,
    grid: &DiscretizationGrid,
    conditions: &Conditions<'_>,
    row: Size,
    k: Real,
) -> (Real, Real) {
    let t = k * row as Real;
    let lower = conditions.lower(t);
    let upper = conditions.upper(t);
    surface[(row, 0)] = lower;
    surface[(row, grid.price_steps())] = upper;
    (lower, upper)
}

/// Fail with [`Error::InvalidConfiguration`] when `row` holds a NaN or an
/// infinity, naming the offending node.
pub(crate) fn ensure_finite_row(
    surface: &Matrix,
    grid: &DiscretizationGrid,
    row: Size,
) -> Result<()> {
    match (0..=grid.price_steps()).find(|&j| !surface[(row, j)].is_finite()) {
        None => Ok(()),
        Some(j) => {
            let value = surface[(row, j)];
            warn!(row, node = j, value, "non-finite value on the surface");
            Err(Error::InvalidConfiguration(format!(
                "non-finite value {value} at time row {row}, price node {j}"
            )))
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
