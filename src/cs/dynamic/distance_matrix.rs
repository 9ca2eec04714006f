use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};

/// The `(m+1) x (n+1)` dynamic-programming table behind an edit distance.
///
/// Cell `(i, j)` holds the cost of turning the length-`i` prefix of the first
/// sequence into the length-`j` prefix of the second. The table lives in one
/// contiguous row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Array2<usize>,
}

impl DistanceMatrix {
    /// Allocates a table of zeros, reporting allocator refusal as an error
    /// instead of aborting.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::Allocation { rows, cols })?;

        let mut buffer: Vec<usize> = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { rows, cols })?;
        buffer.resize(len, 0);

        let cells = Array2::from_shape_vec((rows, cols), buffer)
            .map_err(|_| Error::Allocation { rows, cols })?;
        log::debug!("allocated {rows}x{cols} distance table");

        Ok(Self { cells })
    }

    /// Allocates a table whose first row is `0..cols` and first column is
    /// `0..rows`, the cost of building a prefix from nothing.
    pub(crate) fn ramped(rows: usize, cols: usize) -> Result<Self> {
        let mut matrix = Self::zeroed(rows, cols)?;
        for (i, cell) in matrix.cells.column_mut(0).iter_mut().enumerate() {
            *cell = i;
        }
        for (j, cell) in matrix.cells.row_mut(0).iter_mut().enumerate() {
            *cell = j;
        }
        Ok(matrix)
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> usize {
        self.cells[[row, col]]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[[row, col]] = value;
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.cells.get((row, col)).copied()
    }

    /// The bottom-right cell: the distance between the two full sequences.
    pub fn distance(&self) -> usize {
        self.at(self.rows() - 1, self.cols() - 1)
    }

    /// Copies the table out row by row.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }
}

/// One line per row, every cell followed by a tab.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.outer_iter() {
            for value in row.iter() {
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let m = DistanceMatrix::zeroed(2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_ramped() {
        let m = DistanceMatrix::ramped(3, 4).unwrap();
        assert_eq!(
            m.to_rows(),
            vec![vec![0, 1, 2, 3], vec![1, 0, 0, 0], vec![2, 0, 0, 0]]
        );
    }

    #[test]
    fn test_get_and_distance() {
        let mut m = DistanceMatrix::zeroed(2, 2).unwrap();
        m.set(1, 1, 5);
        assert_eq!(m.get(1, 1), Some(5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.distance(), 5);
    }

    #[test]
    fn test_overflowing_size_is_an_error() {
        match DistanceMatrix::zeroed(usize::MAX, 2) {
            Err(Error::Allocation { rows, cols }) => {
                assert_eq!(rows, usize::MAX);
                assert_eq!(cols, 2);
            }
            other => panic!("expected allocation error, got {other:?}"),
        }
    }

    #[test]
    fn test_refused_reservation_is_an_error() {
        let rows = usize::MAX / 4;
        assert!(matches!(
            DistanceMatrix::ramped(rows, 1),
            Err(Error::Allocation { cols: 1, .. })
        ));
    }

    #[test]
    fn test_display() {
        let m = DistanceMatrix::ramped(2, 3).unwrap();
        assert_eq!(m.to_string(), "0\t1\t2\t\n1\t0\t0\t\n");
    }
}
