//! Fully implicit finite-difference scheme.
//!
//! The known later row is expressed through the unknown earlier row,
//!
//! `V(i, j) = a·V(i−1, j−1) + b·V(i−1, j) + c·V(i−1, j+1)`,
//!
//! so every step solves the tridiagonal system `A · x = V(i, ·) − z`, where
//! `z` carries the two boundary values.  `A` does not depend on time and is
//! factorized once per solve.

use super::{
    conditions::Conditions, ensure_finite_row, fill_boundaries, fill_terminal,
    grid::DiscretizationGrid, tridiagonal::TridiagonalOperator, validate,
};
use mf_core::{errors::Result, Rate, Real, Volatility};
use mf_instruments::EuropeanOption;
use mf_math::Matrix;
use mf_models::BlackScholesModel;
use tracing::{debug, debug_span, trace, warn};

/// Coefficient of `V(i − 1, j − 1)`.
pub fn a(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (0.5 * k / h) * (r * s - (sigma * s).powi(2) / h)
}

/// Coefficient of `V(i − 1, j)`.
pub fn b(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    1.0 + k * (r + (sigma * s / h).powi(2))
}

/// Coefficient of `V(i − 1, j + 1)`.
pub fn c(s: Real, h: Real, k: Real, r: Rate, sigma: Volatility) -> Real {
    (-0.5 * k / h) * (r * s + (sigma * s).powi(2) / h)
}

/// Build the time-independent operator `A` over the interior price nodes.
///
/// Row `r` couples node `j = r + 1` to its neighbours.
pub fn operator(
    model: &BlackScholesModel,
    grid: &DiscretizationGrid,
    maturity: Real,
) -> TridiagonalOperator {
    let h = grid.h();
    let k = grid.k(maturity);
    let (r, sigma) = (model.rate(), model.volatility());
    TridiagonalOperator::from_rows(grid.interior_nodes(), |row| {
        let s = grid.s(row + 1);
        (a(s, h, k, r, sigma), b(s, h, k, r, sigma), c(s, h, k, r, sigma))
    })
}

/// Solve the Black-Scholes PDE with the implicit method, filling `surface`.
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
    let span = debug_span!("implicit_fd", time_steps = i_max, price_steps = j_max);
    let _guard = span.enter();

    let h = grid.h();
    let k = grid.k(maturity);
    let (r, sigma) = (model.rate(), model.volatility());
    let n = grid.interior_nodes();

    fill_terminal(surface, grid, conditions)?;
    ensure_finite_row(surface, grid, i_max)?;

    let lu = operator(model, grid, maturity).factorize().map_err(|err| {
        warn!(error = %err, "implicit operator is singular");
        err
    })?;
    debug!(order = n, "implicit operator factorized");

    let a_first = a(grid.s(1), h, k, r, sigma);
    let c_last = c(grid.s(j_max - 1), h, k, r, sigma);

    for i in (1..=i_max).rev() {
        let (lower, upper) = fill_boundaries(surface, grid, conditions, i - 1, k);

        let mut rhs = surface.row_segment(i, 1, n);
        // With a single interior node both corrections land on it.
        rhs[0] -= lower * a_first;
        rhs[n - 1] -= upper * c_last;

        surface.set_row_segment(i - 1, 1, &lu.solve(&rhs));
        ensure_finite_row(surface, grid, i - 1)?;
        trace!(row = i - 1, "implicit step");
    }

    debug!("implicit solve complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use mf_core::Error;
    use mf_instruments::{EuropeanCall, EuropeanPut};

    fn model() -> BlackScholesModel {
        BlackScholesModel::without_dividends(100.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn coefficients_sum_to_one_plus_rk() {
        let (h, k, r, sigma) = (4.0, 0.01, 0.05, 0.2);
        for j in 1..50 {
            let s = h * j as f64;
            let sum = a(s, h, k, r, sigma) + b(s, h, k, r, sigma) + c(s, h, k, r, sigma);
            assert_abs_diff_eq!(sum, 1.0 + r * k, epsilon = 1e-12);
        }
    }

    #[test]
    fn operator_rows_use_interior_node_prices() {
        let m = model();
        let grid = DiscretizationGrid::new(0.0, 200.0, 100, 50).unwrap();
        let op = operator(&m, &grid, 1.0);
        assert_eq!(op.size(), 49);
        let (h, k) = (grid.h(), grid.k(1.0));
        for row in 0..49 {
            let s = grid.s(row + 1);
            assert_abs_diff_eq!(op.diag[row], b(s, h, k, 0.05, 0.2), epsilon = 1e-15);
            if row > 0 {
                assert_abs_diff_eq!(op.lower[row], a(s, h, k, 0.05, 0.2), epsilon = 1e-15);
            }
            if row < 48 {
                assert_abs_diff_eq!(op.upper[row], c(s, h, k, 0.05, 0.2), epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn fills_terminal_row_and_boundaries() {
        let option = EuropeanCall::new(1.0, &[100.0]);
        let m = model();
        let grid = DiscretizationGrid::new(0.0, 200.0, 50, 50).unwrap();
        let conditions = Conditions::from_terminal_payoff(
            &option,
            |_| 0.0,
            |t| 200.0 - 100.0 * m.discount(1.0 - t),
        );
        let mut v = grid.surface();
        solve(&mut v, &option, &m, &grid, &conditions).unwrap();

        for j in 0..=50 {
            assert_eq!(v[(50, j)], option.payoff(grid.s(j)).unwrap());
        }
        for i in 0..50 {
            assert_eq!(v[(i, 0)], 0.0);
            assert_eq!(v[(i, 50)], conditions.upper(grid.t(1.0, i)));
        }
        // call values are monotone in the asset price
        for j in 1..=50 {
            assert!(v[(0, j)] >= v[(0, j - 1)] - 1e-9);
        }
    }

    #[test]
    fn single_interior_node_receives_both_boundaries() {
        // jMax = 2: one unknown per step, coupled to both edges.
        let option = EuropeanPut::new(1.0, &[1.0]);
        let m = BlackScholesModel::without_dividends(1.0, 0.0, 0.5).unwrap();
        let grid = DiscretizationGrid::new(0.0, 2.0, 1, 2).unwrap();
        let conditions = Conditions::new(|_| 0.0, |_| 1.0, |_| 3.0);
        let mut v = grid.surface();
        solve(&mut v, &option, &m, &grid, &conditions).unwrap();

        let (h, k) = (1.0, 1.0);
        let s = 1.0;
        let expected = (0.0 - 1.0 * a(s, h, k, 0.0, 0.5) - 3.0 * c(s, h, k, 0.0, 0.5))
            / b(s, h, k, 0.0, 0.5);
        assert_abs_diff_eq!(v[(0, 1)], expected, epsilon = 1e-14);
    }

    #[test]
    fn zero_maturity_is_rejected() {
        let option = EuropeanPut::new(0.0, &[100.0]);
        let grid = DiscretizationGrid::new(0.0, 200.0, 10, 10).unwrap();
        let conditions = Conditions::from_terminal_payoff(&option, |_| 100.0, |_| 0.0);
        let mut v = grid.surface();
        assert!(matches!(
            solve(&mut v, &option, &model(), &grid, &conditions),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
