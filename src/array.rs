//! Bulk ownership of a fixed number of cells.

use crate::cell::OwnedCell;
use crate::error::CellError;

/// An owner of `n` cells released together in one bulk teardown.
///
/// Scalar and bulk ownership live in separate types with exactly one
/// release path each, so freeing an array element-wise (or a lone cell via
/// the bulk path) cannot be written at all.
#[derive(Debug, Clone)]
pub struct OwnedCellArray {
    cells: Box<[OwnedCell]>,
}

impl OwnedCellArray {
    /// Allocates `n` zero-valued cells.
    pub fn with_len(n: usize) -> Self {
        let cells: Vec<OwnedCell> = (0..n).map(|_| OwnedCell::new()).collect();
        OwnedCellArray {
            cells: cells.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), CellError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(CellError::IndexOutOfBounds {
                index,
                len: self.cells.len(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<i64, CellError> {
        self.check(index)?;
        self.cells[index].value()
    }

    pub fn set(&mut self, index: usize, v: i64) -> Result<(), CellError> {
        self.check(index)?;
        self.cells[index].set(v)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OwnedCell> {
        self.cells.iter()
    }

    /// The held values in index order.
    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().filter_map(|cell| cell.peek()).collect()
    }

    /// Disperses bulk ownership into independent scalar owners, each
    /// releasing its own cell from then on.
    pub fn into_cells(self) -> Vec<OwnedCell> {
        self.cells.into_vec()
    }
}
