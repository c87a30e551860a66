use std::ops::Range;

use rand::{thread_rng, Rng};

use crate::plan::RowRange;
use crate::NumberType;

/// Dense matrix with contiguous row-major storage, so any band of rows can
/// be sent or received as one flat buffer without repacking.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<NumberType>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn from_vec(data: Vec<NumberType>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "buffer does not match shape");
        Matrix { data, rows, cols }
    }

    /// Fills a fresh matrix with uniform random values from `values`.
    pub fn random(rows: usize, cols: usize, values: Range<NumberType>) -> Self {
        let mut rng = thread_rng();
        let data = (0..rows * cols)
            .map(|_| rng.gen_range(values.clone()))
            .collect();
        Matrix { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> NumberType {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    pub fn as_slice(&self) -> &[NumberType] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [NumberType] {
        &mut self.data
    }

    /// Flat view of a contiguous band of rows.
    pub fn row_band(&self, range: RowRange) -> &[NumberType] {
        &self.data[range.start * self.cols..range.end() * self.cols]
    }

    /// Mutable flat view of a contiguous band of rows.
    pub fn row_band_mut(&mut self, range: RowRange) -> &mut [NumberType] {
        &mut self.data[range.start * self.cols..range.end() * self.cols]
    }
}

/// Multiplies a band of rows of A by the full matrix B into the matching
/// band of C: `c[i][j] = Σ_k a[i][k] * b[k][j]`.
///
/// `a_band` holds whole rows of width `b.rows()`, `c_band` whole rows of
/// width `b.cols()`. Writes nothing outside `c_band`; a zero-row band is a
/// no-op.
pub fn multiply_band(a_band: &[NumberType], b: &Matrix, c_band: &mut [NumberType]) {
    let n = b.rows();
    let m = b.cols();
    let band_rows = if n == 0 {
        c_band.len() / m.max(1)
    } else {
        assert_eq!(a_band.len() % n, 0, "ragged A band");
        a_band.len() / n
    };
    assert_eq!(c_band.len(), band_rows * m, "C band does not match A band");

    for i in 0..band_rows {
        let a_row = &a_band[i * n..(i + 1) * n];
        let c_row = &mut c_band[i * m..(i + 1) * m];
        for (j, out) in c_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, a_ik) in a_row.iter().enumerate() {
                acc += a_ik * b.data[k * m + j];
            }
            *out = acc;
        }
    }
}

/// Whole-matrix multiply in one go; the sequential reference the distributed
/// exchange must agree with.
pub fn multiplication(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.cols(), b.rows(), "inner dimensions disagree");
    let mut c = Matrix::zeros(a.rows(), b.cols());
    multiply_band(a.as_slice(), b, c.as_mut_slice());
    c
}
