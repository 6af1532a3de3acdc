//! Explicit finite-difference scheme.
//!
//! Each earlier row is a weighted sum of three already-known values of the
//! later row:
//!
//! `V(i−1, j) = a·V(i, j−1) + b·V(i, j) + c·V(i, j+1)`
//!
//! No linear system is solved.  The scheme is only conditionally stable and
//! refuses to run unless `0 < k ≤ h²/2`.

use super::{
    conditions::Conditions, ensure_finite_row, fill_boundaries, fill_terminal,
    grid::DiscretizationGrid,
};
use mf_core::{errors::Result, Error, Rate, Real, Volatility};
use mf_instruments::EuropeanOption;
use mf_math::Matrix;
use mf_models::BlackScholesModel;
use tracing::{debug, debug_span, trace, warn};

/// Coefficient of `V(i, j − 1)`.
pub fn a(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (0.5 * k * s / h) * (sigma.powi(2) * s / h - r)
}

/// Coefficient of `V(i, j)`.
pub fn b(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    1.0 - k * ((sigma * s / h).powi(2) + r)
}

/// Coefficient of `V(i, j + 1)`.
pub fn c(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (0.5 * s * k / h) * (sigma.powi(2) * s / h + r)
}

/// Check the step-size guard `0 < k ≤ h²/2`.
pub fn check_stability(grid: &DiscretizationGrid, maturity: Real) -> Result<()> {
    let h = grid.h();
    let k = grid.k(maturity);
    let limit = 0.5 * h * h;
    if !(k > 0.0 && k <= limit) {
        warn!(k, limit, "explicit scheme rejected: time step outside (0, h²/2]");
        return Err(Error::UnstableConfiguration { k, limit });
    }
    Ok(())
}

/// Solve the Black-Scholes PDE with the explicit method, filling `surface`.
pub fn solve(
    surface: &mut Matrix,
    option: &dyn EuropeanOption,
    model: &BlackScholesModel,
    grid: &DiscretizationGrid,
    conditions: &Conditions<'_>,
) -> Result<()> {
    grid.ensure_interior_nodes()?;
    grid.ensure_surface_shape(surface)?;
    check_stability(grid, option.maturity())?;

    let i_max = grid.time_steps();
    let j_max = grid.price_steps();
    let span = debug_span!("explicit_fd", time_steps = i_max, price_steps = j_max);
    let _guard = span.enter();

    let h = grid.h();
    let k = grid.k(option.maturity());
    let (r, sigma) = (model.rate(), model.volatility());

    // The weights depend on the price node only.
    let weights: Vec<(Real, Real, Real)> = (1..j_max)
        .map(|j| {
            let s = grid.s(j);
            (a(s, h, k, r, sigma), b(s, h, k, r, sigma), c(s, h, k, r, sigma))
        })
        .collect();

    fill_terminal(surface, grid, conditions)?;
    ensure_finite_row(surface, grid, i_max)?;

    for i in (1..=i_max).rev() {
        fill_boundaries(surface, grid, conditions, i - 1, k);
        for j in 1..j_max {
            let (wa, wb, wc) = weights[j - 1];
            surface[(i - 1, j)] =
                wa * surface[(i, j - 1)] + wb * surface[(i, j)] + wc * surface[(i, j + 1)];
        }
        ensure_finite_row(surface, grid, i - 1)?;
        trace!(row = i - 1, "explicit step");
    }

    debug!("explicit solve complete");
    Ok(())
}
