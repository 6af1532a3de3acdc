//! The European option capability consumed by the finite-difference schemes.
//!
//! An option is a maturity, an ascending list of strikes and a terminal
//! payoff.  Strike lists are not validated at construction: a variant that
//! needs more strikes than it was given fails when its payoff is evaluated.

use mf_core::{errors::Result, Error, Real, Time};
use std::fmt;

/// A European-style option on a single underlying.
pub trait EuropeanOption: fmt::Debug + Send + Sync {
    /// Time to maturity in years.
    fn maturity(&self) -> Time;

    /// Strike prices, sorted ascending.
    fn strikes(&self) -> &[Real];

    /// Terminal payoff for an underlying price `price`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when the option carries fewer
    /// strikes than its payoff needs.
    fn payoff(&self, price: Real) -> Result<Real>;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        format!("{} T={} K={:?}", self.name(), self.maturity(), self.strikes())
    }
}

/// An ascending list of strike prices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrikeSet(Vec<Real>);

impl StrikeSet {
    /// Build a strike set, sorting the strikes ascending.
    pub fn new(strikes: &[Real]) -> Self {
        Self::from(strikes.to_vec())
    }

    /// The `n`-th smallest strike.
    pub fn get(&self, n: usize) -> Result<Real> {
        self.0.get(n).copied().ok_or(Error::IndexOutOfRange {
            index: n,
            size: self.0.len(),
        })
    }

    /// The first two strikes `(K₀, K₁)`, for two-strike payoffs.
    pub fn pair(&self) -> Result<(Real, Real)> {
        Ok((self.get(0)?, self.get(1)?))
    }

    /// All strikes as a slice.
    pub fn as_slice(&self) -> &[Real] {
        &self.0
    }

    /// Number of strikes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if there are no strikes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Real>> for StrikeSet {
    fn from(mut v: Vec<Real>) -> Self {
        v.sort_by(|a, b| a.total_cmp(b));
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strikes_are_sorted() {
        let k = StrikeSet::new(&[120.0, 80.0, 100.0]);
        assert_eq!(k.as_slice(), &[80.0, 100.0, 120.0]);
        assert_eq!(k.len(), 3);
        assert_eq!(k.pair(), Ok((80.0, 100.0)));
    }

    #[test]
    fn missing_strike_is_out_of_range() {
        let k = StrikeSet::new(&[100.0]);
        assert_eq!(k.get(0), Ok(100.0));
        assert_eq!(k.get(1), Err(Error::IndexOutOfRange { index: 1, size: 1 }));
        assert_eq!(k.pair(), Err(Error::IndexOutOfRange { index: 1, size: 1 }));

        let empty = StrikeSet::default();
        assert!(empty.is_empty());
        assert_eq!(empty.get(0), Err(Error::IndexOutOfRange { index: 0, size: 0 }));
    }
}
