//! Black-Scholes market model.
//!
//! `dS/S = (r − q) dt + σ dW`
//!
//! with constant risk-free rate `r`, continuous dividend yield `q` and
//! volatility `σ`.  The finite-difference schemes read `r` and `σ` only;
//! `q` and the spot are available to callers building boundary conditions.

use mf_core::{errors::Result, Price, Rate, Real, Volatility};

/// Immutable Black-Scholes market parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholesModel {
    spot: Price,
    rate: Rate,
    volatility: Volatility,
    #[cfg_attr(feature = "serde", serde(default))]
    dividend_yield: Rate,
}

impl BlackScholesModel {
    /// Create a model.
    ///
    /// # Arguments
    /// * `spot`: asset spot price
    /// * `rate`: annualized continuously compounded risk-free rate
    /// * `volatility`: annualized volatility of the asset's returns
    /// * `dividend_yield`: annual continuous dividend yield
    ///
    /// All parameters must be finite; spot and volatility must be
    /// non-negative.  Rate and dividend yield may be zero or negative.
    pub fn new(
        spot: Price,
        rate: Rate,
        volatility: Volatility,
        dividend_yield: Rate,
    ) -> Result<Self> {
        mf_core::ensure!(
            spot.is_finite() && spot >= 0.0,
            "spot must be finite and non-negative, got {spot}"
        );
        mf_core::ensure!(rate.is_finite(), "rate must be finite, got {rate}");
        mf_core::ensure!(
            volatility.is_finite() && volatility >= 0.0,
            "volatility must be finite and non-negative, got {volatility}"
        );
        mf_core::ensure!(
            dividend_yield.is_finite(),
            "dividend yield must be finite, got {dividend_yield}"
        );
        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Create a model with zero dividend yield.
    pub fn without_dividends(spot: Price, rate: Rate, volatility: Volatility) -> Result<Self> {
        Self::new(spot, rate, volatility, 0.0)
    }

    /// The spot price.
    pub fn spot(&self) -> Price {
        self.spot
    }

    /// The risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// The continuous dividend yield.
    pub fn dividend_yield(&self) -> Rate {
        self.dividend_yield
    }

    /// Risk-free discount factor over `tau` years: `e^{−r·tau}`.
    pub fn discount(&self, tau: Real) -> Real {
        (-self.rate * tau).exp()
    }

    /// Dividend discount factor over `tau` years: `e^{−q·tau}`.
    pub fn dividend_discount(&self, tau: Real) -> Real {
        (-self.dividend_yield * tau).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use mf_core::Error;

    #[test]
    fn accessors() {
        let m = BlackScholesModel::new(100.0, 0.05, 0.2, 0.01).unwrap();
        assert_eq!(m.spot(), 100.0);
        assert_eq!(m.rate(), 0.05);
        assert_eq!(m.volatility(), 0.2);
        assert_eq!(m.dividend_yield(), 0.01);
    }

    #[test]
    fn default_dividend_is_zero() {
        let m = BlackScholesModel::without_dividends(100.0, 0.05, 0.2).unwrap();
        assert_eq!(m.dividend_yield(), 0.0);
        assert_abs_diff_eq!(m.dividend_discount(3.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn negative_rates_are_allowed() {
        let m = BlackScholesModel::new(100.0, -0.01, 0.2, -0.005).unwrap();
        assert!(m.discount(1.0) > 1.0);
    }

    #[test]
    fn discount_factor() {
        let m = BlackScholesModel::without_dividends(100.0, 0.05, 0.2).unwrap();
        assert_abs_diff_eq!(m.discount(1.0), (-0.05f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(m.discount(0.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            BlackScholesModel::new(-1.0, 0.05, 0.2, 0.0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BlackScholesModel::new(100.0, 0.05, -0.2, 0.0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BlackScholesModel::new(100.0, f64::NAN, 0.2, 0.0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(BlackScholesModel::new(100.0, 0.05, 0.2, f64::INFINITY).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_without_dividend_field() {
        let m: BlackScholesModel =
            serde_json::from_str(r#"{"spot":100.0,"rate":0.05,"volatility":0.2}"#).unwrap();
        assert_eq!(m, BlackScholesModel::without_dividends(100.0, 0.05, 0.2).unwrap());
    }
}
