//! Gaussian elimination: determinant, Gauss-Jordan inverse and linear-system
//! solving. All three use partial pivoting on a scratch copy.

use log::debug;

use crate::error::{MatrixError, Result};
use crate::Matrix;

/// Pivots smaller than this, scaled by the largest element magnitude (at
/// least 1), count as zero.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Row-major scratch buffer with `width` columns.
struct Work {
    data: Vec<f64>,
    width: usize,
}

impl Work {
    #[inline]
    fn at(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.width + c]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.width {
            self.data.swap(a * self.width + c, b * self.width + c);
        }
    }

    /// `row[target] -= factor * row[source]`, from column `from` onwards.
    fn eliminate(&mut self, target: usize, source: usize, factor: f64, from: usize) {
        for c in from..self.width {
            let v = self.at(source, c);
            self.data[target * self.width + c] -= factor * v;
        }
    }

    /// Row index in `col..n` with the largest magnitude in column `col`.
    fn pivot_row(&self, col: usize, n: usize) -> usize {
        (col..n)
            .max_by(|&a, &b| self.at(a, col).abs().total_cmp(&self.at(b, col).abs()))
            .unwrap_or(col)
    }
}

impl Matrix {
    fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    fn pivot_threshold(&self) -> f64 {
        let scale = self.data.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
        SINGULARITY_EPSILON * scale
    }

    /// Copies the matrix into a buffer with `extra` zeroed columns appended.
    fn augmented(&self, extra: usize) -> Work {
        let width = self.cols + extra;
        let mut data = vec![0.0; self.rows * width];
        for r in 0..self.rows {
            data[r * width..r * width + self.cols]
                .copy_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
        }
        Work { data, width }
    }

    /// Forward elimination to upper-triangular form. Fails with
    /// [`MatrixError::Singular`] on a vanishing pivot; otherwise returns the
    /// sign flip accumulated by row swaps.
    fn forward(&self, work: &mut Work, n: usize, threshold: f64) -> Result<f64> {
        let mut sign = 1.0;
        for col in 0..n {
            let p = work.pivot_row(col, n);
            if work.at(p, col).abs() <= threshold {
                debug!("singular matrix: no usable pivot in column {col}");
                return Err(MatrixError::Singular);
            }
            if p != col {
                work.swap_rows(p, col);
                sign = -sign;
            }
            let pivot = work.at(col, col);
            for r in col + 1..n {
                let factor = work.at(r, col) / pivot;
                if factor != 0.0 {
                    work.eliminate(r, col, factor, col);
                }
            }
        }
        Ok(sign)
    }

    pub fn determinant(&self) -> Result<f64> {
        let n = self.require_square()?;
        let mut work = self.augmented(0);
        match self.forward(&mut work, n, 0.0) {
            Ok(sign) => Ok((0..n).fold(sign, |acc, i| acc * work.at(i, i))),
            Err(MatrixError::Singular) => Ok(0.0),
            Err(e) => Err(e),
        }
    }

    /// Inverse via Gauss-Jordan elimination on `[A | I]`.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        let mut work = self.augmented(n);
        for i in 0..n {
            work.data[i * work.width + n + i] = 1.0;
        }
        self.forward(&mut work, n, self.pivot_threshold())?;

        // Back-eliminate above each pivot and normalise the pivot rows.
        for col in (0..n).rev() {
            let pivot = work.at(col, col);
            for c in col..work.width {
                work.data[col * work.width + c] /= pivot;
            }
            for r in 0..col {
                let factor = work.at(r, col);
                if factor != 0.0 {
                    work.eliminate(r, col, factor, col);
                }
            }
        }

        let mut out = Matrix::new(n, n)?;
        for r in 0..n {
            out.data[r * n..(r + 1) * n]
                .copy_from_slice(&work.data[r * work.width + n..(r + 1) * work.width]);
        }
        Ok(out)
    }

    /// Solves `A x = b`. The system must be square with a unique solution.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>> {
        let n = self.require_square()?;
        if b.len() != n {
            return Err(MatrixError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (b.len(), 1),
            });
        }
        let mut work = self.augmented(1);
        for (r, v) in b.iter().enumerate() {
            work.data[r * work.width + n] = *v;
        }
        self.forward(&mut work, n, self.pivot_threshold())?;

        let mut x = vec![0.0; n];
        for r in (0..n).rev() {
            let tail: f64 = (r + 1..n).map(|c| work.at(r, c) * x[c]).sum();
            x[r] = (work.at(r, n) - tail) / work.at(r, r);
        }
        Ok(x)
    }
}
