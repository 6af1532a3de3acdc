//! Terminal and boundary conditions closing the Black-Scholes PDE.
//!
//! The schemes treat the three functions as black boxes: they are evaluated
//! at grid nodes and never checked for financial consistency.  A wrong
//! boundary silently produces a wrong surface.

use mf_core::{errors::Result, Real, Time};
use mf_instruments::EuropeanOption;
use std::fmt;

type Terminal<'a> = Box<dyn Fn(Real) -> Result<Real> + Send + Sync + 'a>;
type Boundary<'a> = Box<dyn Fn(Time) -> Real + Send + Sync + 'a>;

/// The three functions that close the PDE on a finite grid.
///
/// * `terminal(S)`: option value at maturity, usually the payoff
/// * `lower(t)`: option value at the lowest grid price at time `t`
/// * `upper(t)`: option value at the highest grid price at time `t`
///
/// The closures may borrow the option and the model they are built from.
pub struct Conditions<'a> {
    terminal: Terminal<'a>,
    lower: Boundary<'a>,
    upper: Boundary<'a>,
}

impl<'a> Conditions<'a> {
    /// Build conditions from three plain functions.
    pub fn new<T, L, U>(terminal: T, lower: L, upper: U) -> Self
    where
        T: Fn(Real) -> Real + Send + Sync + 'a,
        L: Fn(Time) -> Real + Send + Sync + 'a,
        U: Fn(Time) -> Real + Send + Sync + 'a,
    {
        Self {
            terminal: Box::new(move |s: Real| -> Result<Real> { Ok(terminal(s)) }),
            lower: Box::new(lower),
            upper: Box::new(upper),
        }
    }

    /// Use `option`'s payoff as the terminal condition.
    ///
    /// A payoff failure (too few strikes) surfaces as an error from the
    /// scheme's `solve`.
    pub fn from_terminal_payoff<L, U>(option: &'a dyn EuropeanOption, lower: L, upper: U) -> Self
    where
        L: Fn(Time) -> Real + Send + Sync + 'a,
        U: Fn(Time) -> Real + Send + Sync + 'a,
    {
        Self {
            terminal: Box::new(move |s| option.payoff(s)),
            lower: Box::new(lower),
            upper: Box::new(upper),
        }
    }

    /// Option value at maturity for asset price `s`.
    pub fn terminal(&self, s: Real) -> Result<Real> {
        (self.terminal)(s)
    }

    /// Option value on the lower price boundary at time `t`.
    pub fn lower(&self, t: Time) -> Real {
        (self.lower)(t)
    }

    /// Option value on the upper price boundary at time `t`.
    pub fn upper(&self, t: Time) -> Real {
        (self.upper)(t)
    }
}

impl fmt::Debug for Conditions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditions").finish_non_exhaustive()
    }
}
