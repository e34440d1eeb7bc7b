//! Failure modes of cell access.

use thiserror::Error;

/// Errors returned by cell accessors.
///
/// Allocation failure is not represented here: the allocator aborts the
/// process, and nothing in this crate can continue meaningfully without
/// its storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// The cell's storage was moved out; the owner is empty.
    #[error("cell is empty: its storage was moved to another owner")]
    MovedFrom,

    /// Bulk access past the end of an array of cells.
    #[error("index {index} is out of bounds for an array of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },
}
