//! Discretization of the time × asset-price plane.
//!
//! The grid is uniform in price, `S(j) = S_min + h·j` for
//! `j ∈ [0, price_steps]`, and uniform in time, `t(i) = k·i` for
//! `i ∈ [0, time_steps]`.  The time increment `k = T / time_steps` depends
//! on the maturity `T` of the option being priced, so it is computed on
//! demand rather than stored.

use mf_core::{errors::Result, Price, Real, Size, Time};
use mf_math::Matrix;

/// Uniform rectangular lattice on which the Black-Scholes PDE is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscretizationGrid {
    min_price: Price,
    max_price: Price,
    time_steps: Size,
    price_steps: Size,
}

impl DiscretizationGrid {
    /// Create a grid.
    ///
    /// # Arguments
    /// * `min_price`: lowest asset price on the grid
    /// * `max_price`: highest asset price on the grid
    /// * `time_steps`: number of divisions of the time axis (`i_max`)
    /// * `price_steps`: number of divisions of the price axis (`j_max`)
    pub fn new(
        min_price: Price,
        max_price: Price,
        time_steps: Size,
        price_steps: Size,
    ) -> Result<Self> {
        let grid = Self {
            min_price,
            max_price,
            time_steps,
            price_steps,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check the grid invariants.
    ///
    /// Grids built through [`new`](Self::new) always pass; deserialized
    /// grids are re-checked by every scheme before solving.
    pub fn validate(&self) -> Result<()> {
        mf_core::ensure!(
            self.min_price.is_finite() && self.max_price.is_finite(),
            "price bounds must be finite, got [{}, {}]",
            self.min_price,
            self.max_price
        );
        mf_core::ensure!(
            self.max_price > self.min_price,
            "max price ({}) must exceed min price ({})",
            self.max_price,
            self.min_price
        );
        mf_core::ensure!(self.time_steps >= 1, "need at least 1 time step");
        mf_core::ensure!(self.price_steps >= 1, "need at least 1 price step");
        Ok(())
    }

    /// Check that the grid has interior price nodes to solve for.
    pub fn ensure_interior_nodes(&self) -> Result<()> {
        self.validate()?;
        mf_core::ensure!(
            self.price_steps >= 2,
            "need at least 2 price steps to have interior nodes, got {}",
            self.price_steps
        );
        Ok(())
    }

    /// Lowest asset price.
    pub fn min_price(&self) -> Price {
        self.min_price
    }

    /// Highest asset price.
    pub fn max_price(&self) -> Price {
        self.max_price
    }

    /// Number of time divisions (`i_max`).
    pub fn time_steps(&self) -> Size {
        self.time_steps
    }

    /// Number of price divisions (`j_max`).
    pub fn price_steps(&self) -> Size {
        self.price_steps
    }

    /// Number of interior price nodes, i.e. the order of the tridiagonal
    /// systems solved by the implicit-family schemes.
    pub fn interior_nodes(&self) -> Size {
        self.price_steps.saturating_sub(1)
    }

    /// Price increment `h`.
    pub fn h(&self) -> Real {
        (self.max_price - self.min_price) / self.price_steps as Real
    }

    /// Time increment `k` for an option maturing in `maturity` years.
    pub fn k(&self, maturity: Time) -> Real {
        maturity / self.time_steps as Real
    }

    /// Asset price at price node `j`.
    pub fn s(&self, j: Size) -> Price {
        self.min_price + self.h() * j as Real
    }

    /// Time at time node `i` for an option maturing in `maturity` years.
    pub fn t(&self, maturity: Time, i: Size) -> Time {
        self.k(maturity) * i as Real
    }

    /// Allocate a zeroed price surface of shape
    /// `(time_steps + 1) × (price_steps + 1)`.
    pub fn surface(&self) -> Matrix {
        Matrix::zeros(self.time_steps + 1, self.price_steps + 1)
    }

    /// Check that `surface` has the shape this grid produces.
    pub fn ensure_surface_shape(&self, surface: &Matrix) -> Result<()> {
        mf_core::ensure!(
            surface.rows() == self.time_steps + 1 && surface.cols() == self.price_steps + 1,
            "surface is {}×{}, grid needs {}×{}",
            surface.rows(),
            surface.cols(),
            self.time_steps + 1,
            self.price_steps + 1
        );
        Ok(())
    }
}
