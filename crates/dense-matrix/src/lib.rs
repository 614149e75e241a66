//! Dense, row-major matrices of `f64`.
//!
//! Shape problems and singular systems come back as [`MatrixError`];
//! nothing panics on bad input.
//!
//! ```
//! use dense_matrix::Matrix;
//!
//! let a = Matrix::from_rows(vec![vec![-1.0, 3.0], vec![3.0, -1.0]]).unwrap();
//! let x = a.solve(&[-8.0, -16.0]).unwrap();
//! assert!((x[0] + 7.0).abs() < 1e-9);
//! assert!((x[1] + 5.0).abs() < 1e-9);
//! ```

pub mod elimination;
pub mod error;

use std::fmt;
use std::ops::{Add, Mul};

pub use elimination::SINGULARITY_EPSILON;
pub use error::{MatrixError, Result};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows`×`cols` matrix. Both sizes must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut m = Self::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            m.data[r * cols..(r + 1) * cols].copy_from_slice(row);
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Writes one element; `false` when the index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Overwrites every element; `false` (and no change) unless `values`
    /// has exactly this matrix's shape.
    pub fn set_all(&mut self, values: &[Vec<f64>]) -> bool {
        if values.len() != self.rows || values.iter().any(|row| row.len() != self.cols) {
            return false;
        }
        for (r, row) in values.iter().enumerate() {
            self.data[r * self.cols..(r + 1) * self.cols].copy_from_slice(row);
        }
        true
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col)
            .map(|i| self.data[i])
            .ok_or(MatrixError::IndexOutOfRange { row, col })
    }

    /// Exact element-wise comparison of two same-shaped matrices.
    pub fn equals(&self, other: &Matrix) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(self.data == other.data)
    }

    /// Element-wise comparison within `eps`; different shapes never match.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect(),
        })
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * factor).collect(),
        }
    }

    /// Matrix product; `self.cols()` must equal `other.rows()`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = vec![0.0; self.rows * other.cols];
        for r in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[r * self.cols + k];
                for c in 0..other.cols {
                    out[r * other.cols + c] += a * other.data[k * other.cols + c];
                }
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data: out,
        })
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl Default for Matrix {
    /// A 1×1 zero matrix.
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::mul(self, rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_by_one_zero() {
        let m = Matrix::default();
        assert_eq!((m.rows(), m.cols()), (1, 1));
        assert_eq!(m.get(0, 0), Ok(0.0));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Matrix::from_rows(Vec::new()),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn display_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 0.0]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2.5]\n[-3, 0]");
    }

    #[test]
    fn transpose_of_rectangle() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.to_rows(), vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(t.transpose(), m);
    }
}
