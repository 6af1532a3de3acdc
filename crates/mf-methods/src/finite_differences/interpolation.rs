//! Bilinear price lookup on a solved surface.

use super::grid::DiscretizationGrid;
use mf_core::{errors::Result, Error, Price, Real, Time};
use mf_instruments::EuropeanOption;
use mf_math::{bilinear_blend, locate_uniform, Matrix};

/// Price lookup at an arbitrary `(t, S)` inside the grid domain.
pub trait PriceAt {
    /// Bilinear interpolation of the surface at time `t` and asset price `s`.
    ///
    /// Fails with [`Error::OutOfRange`] when `(t, s)` falls outside
    /// `[0, T] × [min_price, max_price]`.  No extrapolation is attempted.
    fn price_at(
        &self,
        t: Time,
        s: Price,
        option: &dyn EuropeanOption,
        grid: &DiscretizationGrid,
    ) -> Result<Price>;
}

impl PriceAt for Matrix {
    fn price_at(
        &self,
        t: Time,
        s: Price,
        option: &dyn EuropeanOption,
        grid: &DiscretizationGrid,
    ) -> Result<Price> {
        let maturity = option.maturity();
        mf_core::ensure!(
            maturity.is_finite() && maturity > 0.0,
            "maturity must be positive, got {maturity}"
        );
        grid.validate()?;
        grid.ensure_surface_shape(self)?;

        let n = grid.time_steps();
        let m = grid.price_steps();
        // The last node may round past the nominal edge.
        let t_max = grid.t(maturity, n).max(maturity);
        let s_max = grid.s(m).max(grid.max_price());
        check_axis("t", t, 0.0, t_max)?;
        check_axis("S", s, grid.min_price(), s_max)?;

        let (i, l1) = locate_uniform(t, 0.0, grid.k(maturity), n);
        let (j, w1) = locate_uniform(s, grid.min_price(), grid.h(), m);
        Ok(bilinear_blend(
            l1,
            w1,
            [
                [self[(i, j)], self[(i, j + 1)]],
                [self[(i + 1, j)], self[(i + 1, j + 1)]],
            ],
        ))
    }
}

fn check_axis(axis: &'static str, value: Real, min: Real, max: Real) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            axis,
            value,
            min,
            max,
        })
    }
}
