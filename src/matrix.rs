use crate::error::{Error, Operand, Result};
use std::fmt;

/// A dense row-major matrix of `f64` values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        let data = vec![0.0; rows * cols];
        Self { rows, cols, data }
    }

    /// Creates an `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from nested rows.
    ///
    /// Fails if there are no rows or if the rows differ in length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        Self::build(rows, "Inconsistent row size".to_string())
    }

    pub(crate) fn from_operand(rows: &[Vec<f64>], operand: Operand) -> Result<Self> {
        Self::build(rows, format!("Inconsistent {} row size", operand))
    }

    fn build(rows: &[Vec<f64>], inconsistent: String) -> Result<Self> {
        let first = match rows.first() {
            Some(r) => r,
            None => return Err(Error::invalid("Empty matrix")),
        };

        let cols = first.len();
        if rows.iter().any(|r| r.len() != cols) {
            return Err(Error::InvalidArgument(inconsistent));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for r in rows {
            data.extend_from_slice(r);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the value at row `i`, column `j`.
    ///
    /// Panics if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows, "row out of bounds");
        assert!(j < self.cols, "column out of bounds");
        self.data[i * self.cols + j]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let idx = i * self.cols;
        &mut self.data[idx..(idx + self.cols)]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let idx = i * self.cols;
        &self.data[idx..(idx + self.cols)]
    }

    /// Returns the values in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Converts back to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Multiplies two matrices.
    ///
    /// Each cell is summed over the inner dimension in increasing order,
    /// starting from `+0.0`, so results are reproducible bit for bit.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            tracing::debug!(a_cols = self.cols, b_rows = other.rows, "inner dimensions differ");
            return Err(Error::DimensionMismatch {
                a_cols: self.cols,
                b_rows: other.rows,
            });
        }

        let (m, k, n) = (self.rows, self.cols, other.cols);
        tracing::trace!(m, k, n, "matmul");

        let mut res = Matrix::new(m, n);
        for i in 0..m {
            let a = self.row(i);
            let out = res.row_mut(i);
            for (j, cell) in out.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (t, at) in a.iter().enumerate() {
                    sum += at * other.data[t * n + j];
                }
                *cell = sum;
            }
        }
        Ok(res)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", v)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "bench")]
mod tests {
    use super::Matrix;

    #[bench]
    fn bench_matmul(b: &mut test::Bencher) {
        let d = 128;
        let x = Matrix::identity(d);
        let y = Matrix::new(d, d);
        b.iter(|| x.matmul(&y));
    }
}
