//! `Matrix`: a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`.  The finite-difference
//! schemes use it as the price surface (`[i, j]` = time row, price column).

use mf_core::Real;
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

/// Dense `rows × cols` matrix of reals, indexed `m[(row, col)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create a matrix filled with `value`.
    pub fn from_element(rows: usize, cols: usize, value: Real) -> Self {
        Self(DMatrix::from_element(rows, cols, value))
    }

    /// Build from `data` laid out row after row.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Copy `len` entries of row `i`, starting at column `start`.
    pub fn row_segment(&self, i: usize, start: usize, len: usize) -> Vec<Real> {
        (start..start + len).map(|j| self.0[(i, j)]).collect()
    }

    /// Overwrite row `i` from column `start` onwards with `values`.
    pub fn set_row_segment(&mut self, i: usize, start: usize, values: &[Real]) {
        for (offset, &v) in values.iter().enumerate() {
            self.0[(i, start + offset)] = v;
        }
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

/// One bracketed, comma-separated line per row; suitable for dumping a
/// price surface to a text file for plotting.
impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
