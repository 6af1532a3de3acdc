//! Tridiagonal operators and their LU factorization.
//!
//! The implicit-family schemes build their operator once per solve,
//! factorize it once with the Thomas algorithm, and reuse the
//! factorization for every time step; only the right-hand side changes.

use mf_core::{errors::Result, Error, Real};

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands, all of length `n`.
/// `lower[0]` and `upper[n − 1]` fall outside the matrix and are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Sub-diagonal, `lower[r]` multiplies `x[r − 1]`.
    pub lower: Vec<Real>,
    /// Diagonal.
    pub diag: Vec<Real>,
    /// Super-diagonal, `upper[r]` multiplies `x[r + 1]`.
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Build an operator row by row.
    ///
    /// `row(r)` returns the `(lower, diag, upper)` entries of row `r`;
    /// entries falling outside the matrix are discarded.
    pub fn from_rows<F>(n: usize, mut row: F) -> Self
    where
        F: FnMut(usize) -> (Real, Real, Real),
    {
        let mut op = Self::new(n);
        for r in 0..n {
            let (l, d, u) = row(r);
            if r > 0 {
                op.lower[r] = l;
            }
            op.diag[r] = d;
            if r + 1 < n {
                op.upper[r] = u;
            }
        }
        op
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &[Real]) -> Vec<Real> {
        let n = self.size();
        assert_eq!(x.len(), n);
        (0..n)
            .map(|i| {
                let mut y = self.diag[i] * x[i];
                if i > 0 {
                    y += self.lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    y += self.upper[i] * x[i + 1];
                }
                y
            })
            .collect()
    }

    /// LU-factorize the operator (forward sweep of the Thomas algorithm).
    ///
    /// Fails with [`Error::SingularMatrix`] when elimination meets a zero
    /// (or non-finite) pivot.  Elimination does not pivot, so this is
    /// exact for the diagonally dominant operators produced by the
    /// finite-difference schemes.
    pub fn factorize(&self) -> Result<TridiagonalLu> {
        let n = self.size();
        let mut upper_prime = vec![0.0; n];
        let mut pivots = vec![0.0; n];

        for i in 0..n {
            let pivot = if i == 0 {
                self.diag[0]
            } else {
                upper_prime[i - 1] = self.upper[i - 1] / pivots[i - 1];
                self.diag[i] - self.lower[i] * upper_prime[i - 1]
            };
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(Error::SingularMatrix { row: i });
            }
            pivots[i] = pivot;
        }

        Ok(TridiagonalLu {
            lower: self.lower.clone(),
            upper_prime,
            pivots,
        })
    }

    /// Solve `A · x = rhs` once.  Prefer [`factorize`](Self::factorize)
    /// when solving repeatedly with the same operator.
    pub fn solve(&self, rhs: &[Real]) -> Result<Vec<Real>> {
        Ok(self.factorize()?.solve(rhs))
    }
}

/// LU factorization of a [`TridiagonalOperator`], ready for repeated
/// back-substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalLu {
    lower: Vec<Real>,
    /// Normalized upper band `c'ᵢ = cᵢ / mᵢ`.
    upper_prime: Vec<Real>,
    /// Elimination pivots `mᵢ`.
    pivots: Vec<Real>,
}

impl TridiagonalLu {
    /// Size of the factorized system.
    pub fn size(&self) -> usize {
        self.pivots.len()
    }

    /// Solve `A · x = rhs` by forward and back substitution.
    pub fn solve(&self, rhs: &[Real]) -> Vec<Real> {
        let n = self.size();
        assert_eq!(rhs.len(), n);

        // Forward sweep
        let mut x = vec![0.0; n];
        for i in 0..n {
            let carried = if i == 0 { 0.0 } else { self.lower[i] * x[i - 1] };
            x[i] = (rhs[i] - carried) / self.pivots[i];
        }

        // Back substitution
        for i in (0..n.saturating_sub(1)).rev() {
            x[i] -= self.upper_prime[i] * x[i + 1];
        }

        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn thomas_algorithm_solves_identity() {
        let mut op = TridiagonalOperator::new(4);
        for i in 0..4 {
            op.diag[i] = 1.0;
        }
        let rhs = vec![1.0, 2.0, 3.0, 4.0];
        let x = op.solve(&rhs).unwrap();
        for i in 0..4 {
            assert_abs_diff_eq!(x[i], rhs[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn thomas_algorithm_solves_tridiagonal() {
        // A = [[2, -1, 0], [-1, 2, -1], [0, -1, 2]]
        // x = [1, 2, 3]
        // Ax = [0, 0, 4]
        let op = TridiagonalOperator::from_rows(3, |_| (-1.0, 2.0, -1.0));
        assert_eq!(op.lower[0], 0.0);
        assert_eq!(op.upper[2], 0.0);
        let x = op.solve(&[0.0, 0.0, 4.0]).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn single_unknown() {
        let op = TridiagonalOperator::from_rows(1, |_| (7.0, 4.0, 9.0));
        assert_eq!(op.apply(&[2.0]), vec![8.0]);
        let x = op.solve(&[2.0]).unwrap();
        assert_abs_diff_eq!(x[0], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn apply_inverts_solve() {
        let op = TridiagonalOperator::from_rows(5, |r| {
            let r = r as f64;
            (-0.3 * r, 2.0 + r, -0.4 - 0.1 * r)
        });
        let x = vec![1.0, -2.0, 0.5, 3.0, -1.0];
        let lu = op.factorize().unwrap();
        let back = lu.solve(&op.apply(&x));
        for (a, b) in back.iter().zip(&x) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn factorization_is_reusable() {
        let op = TridiagonalOperator::from_rows(4, |_| (-1.0, 4.0, -1.0));
        let lu = op.factorize().unwrap();
        assert_eq!(lu.size(), 4);
        for rhs in [[1.0, 0.0, 0.0, 0.0], [0.0, 2.0, -1.0, 5.0], [3.0; 4]] {
            assert_eq!(lu.solve(&rhs), op.solve(&rhs).unwrap());
        }
    }

    #[test]
    fn varying_bands_are_solved() {
        // [[1.5, -0.3, 0], [0.15, 1.6, -0.28], [0, 0.1, 1.9]] · [1, -2, 0.5] = [2.1, -3.19, 0.75]
        let op = TridiagonalOperator::from_rows(3, |r| {
            let r = r as f64;
            (0.2 - 0.05 * r, 1.5 + 0.1 * r * r, -0.3 + 0.02 * r)
        });
        let x = op.solve(&[2.1, -3.19, 0.75]).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_pivot_is_singular() {
        // [[1, 1], [1, 1]]
        let op = TridiagonalOperator::from_rows(2, |_| (1.0, 1.0, 1.0));
        assert_eq!(op.factorize(), Err(Error::SingularMatrix { row: 1 }));

        let op = TridiagonalOperator::new(3);
        assert_eq!(op.solve(&[1.0, 1.0, 1.0]), Err(Error::SingularMatrix { row: 0 }));
    }
}
