//! Rectangular cell matrix returned by the oracle.

use crate::{Value, ValueError};

/// Row-major rectangular matrix of [`Value`] cells.
///
/// Cells are full values, not just numbers: label matrices carry text
/// columns and shape lists nest matrices inside matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Value>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn new(data: Vec<Value>, rows: usize, cols: usize) -> Result<Self, ValueError> {
        if data.len() != rows * cols {
            return Err(ValueError::MatrixShape {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self, ValueError> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let data: Vec<Value> = rows.into_iter().flatten().collect();
        Self::new(data, row_count, cols)
    }

    /// Single-column matrix of numbers, a common test fixture.
    pub fn column(values: impl IntoIterator<Item = f64>) -> Self {
        let data: Vec<Value> = values.into_iter().map(Value::Num).collect();
        let rows = data.len();
        Self { data, rows, cols: 1 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Numeric view of a cell; `None` for out-of-range or non-real cells.
    pub fn num_at(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).and_then(Value::as_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = Matrix::new(vec![Value::Num(1.0)], 2, 1).unwrap_err();
        assert_eq!(
            err,
            ValueError::MatrixShape {
                len: 1,
                rows: 2,
                cols: 1
            }
        );
    }

    #[test]
    fn from_rows_builds_row_major() {
        let m = Matrix::from_rows(vec![
            vec![Value::Num(1.0), Value::Num(2.0)],
            vec![Value::Num(3.0), Value::Num(4.0)],
        ])
        .unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.num_at(1, 0), Some(3.0));
        assert_eq!(m.num_at(0, 1), Some(2.0));
    }

    #[test]
    fn non_numeric_cells_do_not_convert() {
        let m = Matrix::from_rows(vec![vec![Value::Str("a".into()), Value::Num(1.0)]]).unwrap();
        assert_eq!(m.num_at(0, 0), None);
        assert_eq!(m.num_at(0, 1), Some(1.0));
        assert_eq!(m.num_at(5, 0), None);
    }
}
