//! Crank-Nicolson finite-difference scheme.
//!
//! Averages the explicit and implicit discretizations:
//!
//! `d·V(i−1, j−1) + e·V(i−1, j) + f·V(i−1, j+1)
//!     = a·V(i, j−1) + b·V(i, j) + c·V(i, j+1)`
//!
//! Both sides are tridiagonal operators over the interior price nodes.  The
//! explicit side is applied to the known row, the implicit side is
//! factorized once and solved at every step.  Unconditionally stable and
//! second-order accurate in time.

use super::{
    conditions::Conditions, ensure_finite_row, fill_boundaries, fill_terminal,
    grid::DiscretizationGrid, tridiagonal::TridiagonalOperator, validate,
};
use mf_core::{errors::Result, Rate, Real, Volatility};
use mf_instruments::EuropeanOption;
use mf_math::Matrix;
use mf_models::BlackScholesModel;
use tracing::{debug, debug_span, trace, warn};

/// Coefficient of `V(i, j − 1)`.
pub fn a(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (0.25 * k / h) * ((sigma * s).powi(2) / h - r * s)
}

/// Coefficient of `V(i, j)`.
pub fn b(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    1.0 - 0.5 * k * ((sigma * s / h).powi(2) + r)
}

/// Coefficient of `V(i, j + 1)`.
pub fn c(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (0.25 * k / h) * ((sigma * s).powi(2) / h + r * s)
}

/// Coefficient of `V(i − 1, j − 1)`.
pub fn d(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    -a(s, h, k, r, sigma)
}

/// Coefficient of `V(i − 1, j)`.
pub fn e(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    2.0 - b(s, h, k, r, sigma)
}

/// Coefficient of `V(i − 1, j + 1)`.
pub fn f(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    -c(s, h, k, r, sigma)
}

/// Build the `(explicit side, implicit side)` operators over the interior
/// price nodes, from `(a, b, c)` and `(d, e, f)` respectively.
pub fn operators(
    model: &BlackScholesModel,
    grid: &DiscretizationGrid,
    maturity: Real,
) -> (TridiagonalOperator, TridiagonalOperator) {
    let h = grid.h();
    let k = grid.k(maturity);
    let (r, sigma) = (model.rate(), model.volatility());
    let n = grid.interior_nodes();
    let explicit_side = TridiagonalOperator::from_rows(n, |row| {
        let s = grid.s(row + 1);
        (a(s, h, k, r, sigma), b(s, h, k, r, sigma), c(s, h, k, r, sigma))
    });
    let implicit_side = TridiagonalOperator::from_rows(n, |row| {
        let s = grid.s(row + 1);
        (d(s, h, k, r, sigma), e(s, h, k, r, sigma), f(s, h, k, r, sigma))
    });
    (explicit_side, implicit_side)
}

/// Solve the Black-Scholes PDE with the Crank-Nicolson method, filling
/// `surface`.
pub fn solve(
    surface: &mut Matrix,
    option: &dyn EuropeanOption,
    model: &BlackScholesModel,
    grid: &DiscretizationGrid,
    conditions: &Conditions<'_>,
) -> Result<()> {
    let maturity = option.maturity();
    validate(surface, grid, maturity)?;

    let i_max = grid.time_steps();
    let j_max = grid.price_steps();
    let span = debug_span!("crank_nicolson_fd", time_steps = i_max, price_steps = j_max);
    let _guard = span.enter();

    let h = grid.h();
    let k = grid.k(maturity);
    let (r, sigma) = (model.rate(), model.volatility());
    let n = grid.interior_nodes();

    fill_terminal(surface, grid, conditions)?;
    ensure_finite_row(surface, grid, i_max)?;

    let (explicit_side, implicit_side) = operators(model, grid, maturity);
    let lu = implicit_side.factorize().map_err(|err| {
        warn!(error = %err, "crank-nicolson implicit operator is singular");
        err
    })?;
    debug!(order = n, "crank-nicolson operator factorized");

    let (s_first, s_last) = (grid.s(1), grid.s(j_max - 1));
    let (a_first, d_first) = (a(s_first, h, k, r, sigma), d(s_first, h, k, r, sigma));
    let (c_last, f_last) = (c(s_last, h, k, r, sigma), f(s_last, h, k, r, sigma));

    for i in (1..=i_max).rev() {
        let (lower, upper) = fill_boundaries(surface, grid, conditions, i - 1, k);

        let mut rhs = explicit_side.apply(&surface.row_segment(i, 1, n));
        rhs[0] += surface[(i, 0)] * a_first - lower * d_first;
        rhs[n - 1] += surface[(i, j_max)] * c_last - upper * f_last;

        surface.set_row_segment(i - 1, 1, &lu.solve(&rhs));
        ensure_finite_row(surface, grid, i - 1)?;
        trace!(row = i - 1, "crank-nicolson step");
    }

    debug!("crank-nicolson solve complete");
    Ok(())
}
