//! Dense 2-D matrix embedding
//!
//! The storage engine this crate reads from embeds matrices as a mapping
//! with `rows`, `cols`, an optional element-type tag `dt`, and a flat
//! row-major `data` sequence:
//!
//! ```yaml
//! cvMat:
//!   rows: 2
//!   cols: 3
//!   dt: d
//!   data: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
//! ```
//!
//! [`Matrix`] deserializes that shape and rejects it when the data length
//! does not match the declared dimensions.

use serde::Deserialize;
use std::fmt;

/// A dense row-major matrix of f64 elements
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    #[serde(default)]
    #[allow(dead_code)]
    dt: Option<String>,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = String;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.rows * raw.cols != raw.data.len() {
            return Err(format!(
                "matrix data length {} does not match {}x{}",
                raw.data.len(),
                raw.rows,
                raw.cols
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl Matrix {
    /// Build a matrix from row-major data
    pub fn from_rows_cols(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows * cols != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col), if in bounds
    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Flat row-major data
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
