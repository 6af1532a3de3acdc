//! European payoff variants: call, put, bull spread, bear spread and
//! strangle spread.
//!
//! Every variant stores its maturity and a [`StrikeSet`]; strikes are
//! sorted on construction, so `K₀ ≤ K₁` always holds for the spreads.

use crate::option::{EuropeanOption, StrikeSet};
use mf_core::{errors::Result, Real, Time};

/// European call: `max(S − K₀, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanCall {
    maturity: Time,
    strikes: StrikeSet,
}

impl EuropeanCall {
    /// Create a call maturing in `maturity` years.
    pub fn new(maturity: Time, strikes: &[Real]) -> Self {
        Self {
            maturity,
            strikes: StrikeSet::new(strikes),
        }
    }
}

impl EuropeanOption for EuropeanCall {
    fn maturity(&self) -> Time {
        self.maturity
    }

    fn strikes(&self) -> &[Real] {
        self.strikes.as_slice()
    }

    fn payoff(&self, price: Real) -> Result<Real> {
        let k = self.strikes.get(0)?;
        Ok(if price > k { price - k } else { 0.0 })
    }

    fn name(&self) -> &str {
        "EuropeanCall"
    }
}

/// European put: `max(K₀ − S, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanPut {
    maturity: Time,
    strikes: StrikeSet,
}

impl EuropeanPut {
    /// Create a put maturing in `maturity` years.
    pub fn new(maturity: Time, strikes: &[Real]) -> Self {
        Self {
            maturity,
            strikes: StrikeSet::new(strikes),
        }
    }
}

impl EuropeanOption for EuropeanPut {
    fn maturity(&self) -> Time {
        self.maturity
    }

    fn strikes(&self) -> &[Real] {
        self.strikes.as_slice()
    }

    fn payoff(&self, price: Real) -> Result<Real> {
        let k = self.strikes.get(0)?;
        Ok(if price < k { k - price } else { 0.0 })
    }

    fn name(&self) -> &str {
        "EuropeanPut"
    }
}

/// European bull spread: long a call at `K₀`, short a call at `K₁`.
///
/// Pays `0` below `K₀`, `S − K₀` between the strikes and `K₁ − K₀` from
/// `K₁` upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanBullSpread {
    maturity: Time,
    strikes: StrikeSet,
}

impl EuropeanBullSpread {
    /// Create a bull spread maturing in `maturity` years.
    pub fn new(maturity: Time, strikes: &[Real]) -> Self {
        Self {
            maturity,
            strikes: StrikeSet::new(strikes),
        }
    }
}

impl EuropeanOption for EuropeanBullSpread {
    fn maturity(&self) -> Time {
        self.maturity
    }

    fn strikes(&self) -> &[Real] {
        self.strikes.as_slice()
    }

    fn payoff(&self, price: Real) -> Result<Real> {
        let (k0, k1) = self.strikes.pair()?;
        Ok(if price >= k1 {
            k1 - k0
        } else if price > k0 {
            price - k0
        } else {
            0.0
        })
    }

    fn name(&self) -> &str {
        "EuropeanBullSpread"
    }
}

/// European bear spread: the mirror image of [`EuropeanBullSpread`].
///
/// Pays `K₁ − K₀` up to `K₀`, `K₁ − S` between the strikes and `0` from
/// `K₁` upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanBearSpread {
    maturity: Time,
    strikes: StrikeSet,
}

impl EuropeanBearSpread {
    /// Create a bear spread maturing in `maturity` years.
    pub fn new(maturity: Time, strikes: &[Real]) -> Self {
        Self {
            maturity,
            strikes: StrikeSet::new(strikes),
        }
    }
}

impl EuropeanOption for EuropeanBearSpread {
    fn maturity(&self) -> Time {
        self.maturity
    }

    fn strikes(&self) -> &[Real] {
        self.strikes.as_slice()
    }

    fn payoff(&self, price: Real) -> Result<Real> {
        let (k0, k1) = self.strikes.pair()?;
        Ok(if price <= k0 {
            k1 - k0
        } else if price < k1 {
            k1 - price
        } else {
            0.0
        })
    }

    fn name(&self) -> &str {
        "EuropeanBearSpread"
    }
}

/// European strangle: long a put at `K₀` and a call at `K₁`.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanStrangleSpread {
    maturity: Time,
    strikes: StrikeSet,
}

impl EuropeanStrangleSpread {
    /// Create a strangle maturing in `maturity` years.
    pub fn new(maturity: Time, strikes: &[Real]) -> Self {
        Self {
            maturity,
            strikes: StrikeSet::new(strikes),
        }
    }
}

impl EuropeanOption for EuropeanStrangleSpread {
    fn maturity(&self) -> Time {
        self.maturity
    }

    fn strikes(&self) -> &[Real] {
        self.strikes.as_slice()
    }

    fn payoff(&self, price: Real) -> Result<Real> {
        let (k0, k1) = self.strikes.pair()?;
        Ok(if price < k0 {
            k0 - price
        } else if price > k1 {
            price - k1
        } else {
            0.0
        })
    }

    fn name(&self) -> &str {
        "EuropeanStrangleSpread"
    }
}
