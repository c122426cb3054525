use crate::foundation::error::{LoopscanError, LoopscanResult};

/// Dense row-major `f64` matrix.
///
/// Shared by the similarity and transition-cost stages; deliberately minimal,
/// no linear algebra beyond what the pipeline reads and writes.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer, validating its length.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> LoopscanResult<Self> {
        if data.len() != rows * cols {
            return Err(LoopscanError::validation(format!(
                "matrix buffer is {} values, {rows}x{cols} needs {}",
                data.len(),
                rows * cols,
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read cell `(row, col)`.
    ///
    /// # Panics
    /// Panics on out-of-bounds indices, like slice indexing.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Mutable access to cell `(row, col)`.
    ///
    /// # Panics
    /// Panics on out-of-bounds indices, like slice indexing.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }

    /// Arithmetic mean over all `rows * cols` cells (0.0 for an empty matrix).
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Multiply every cell by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Borrow the row-major backing buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
