//! Exclusive ownership of a single heap cell.

use std::cell::Cell;

use crate::error::CellError;

thread_local! {
    // One counter per thread; ownership transfer in this crate's model is
    // single-threaded, so a cell is released where it was allocated.
    static LIVE_CELLS: Cell<usize> = Cell::new(0);
}

/// Number of heap cells currently allocated on this thread.
///
/// Every allocation increments the count and every release decrements it,
/// which is what the drop and leak tests assert on.
pub fn live_cells() -> usize {
    LIVE_CELLS.with(|live| live.get())
}

fn alloc_cell(v: i64) -> Box<i64> {
    LIVE_CELLS.with(|live| live.set(live.get() + 1));
    Box::new(v)
}

/// A value type that exclusively owns at most one heap-allocated `i64` slot.
///
/// The owner is either *holding* (owns exactly one cell) or *empty* (the
/// state [`take`](OwnedCell::take) leaves behind). Cloning duplicates the
/// cell into independent storage, moving transfers it without allocating,
/// and dropping releases it exactly once; dropping an empty owner releases
/// nothing.
///
/// `OwnedCell` implements no `PartialEq`, `Ord`, or `Hash` of its own:
/// collections that deduplicate or order cells must be handed an explicit
/// strategy such as [`ByValue`](crate::compare::ByValue) at the call site.
#[derive(Debug)]
pub struct OwnedCell {
    slot: Option<Box<i64>>,
}

impl OwnedCell {
    /// Allocates a fresh cell holding `0`.
    pub fn new() -> Self {
        OwnedCell {
            slot: Some(alloc_cell(0)),
        }
    }

    /// Allocates a fresh cell holding `v`.
    pub fn with_value(v: i64) -> Self {
        OwnedCell {
            slot: Some(alloc_cell(v)),
        }
    }

    fn empty() -> Self {
        OwnedCell { slot: None }
    }

    /// Whether the storage has been moved out of this owner.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Reads the owned value, failing fast on an empty owner.
    pub fn value(&self) -> Result<i64, CellError> {
        self.slot.as_deref().copied().ok_or(CellError::MovedFrom)
    }

    /// Overwrites the owned value in place, failing fast on an empty owner.
    pub fn set(&mut self, v: i64) -> Result<(), CellError> {
        match self.slot.as_deref_mut() {
            Some(cell) => {
                *cell = v;
                Ok(())
            }
            None => Err(CellError::MovedFrom),
        }
    }

    /// Total observer: the held value, or `None` for an empty owner.
    ///
    /// Exists so comparison strategies stay total inside container
    /// callbacks; direct reads should prefer [`value`](OwnedCell::value),
    /// which surfaces misuse as an error.
    pub fn peek(&self) -> Option<i64> {
        self.slot.as_deref().copied()
    }

    /// Transfers the heap cell to a new owner without allocating.
    ///
    /// `self` becomes empty and will never release the transferred
    /// storage. Move-assignment is `a = b.take()`: the assignment drops
    /// whatever `a` held before.
    pub fn take(&mut self) -> OwnedCell {
        OwnedCell {
            slot: self.slot.take(),
        }
    }
}

impl Default for OwnedCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OwnedCell {
    /// Deep copy: a new independent cell with the same value. The clone of
    /// an empty owner is empty.
    fn clone(&self) -> Self {
        match self.peek() {
            Some(v) => OwnedCell::with_value(v),
            None => OwnedCell::empty(),
        }
    }
}

impl Drop for OwnedCell {
    fn drop(&mut self) {
        if self.slot.take().is_some() {
            // a cell dropped on a foreign thread only skews that thread's
            // count; drop must not panic
            LIVE_CELLS.with(|live| live.set(live.get().saturating_sub(1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_cell_holds_zero() {
        let cell = OwnedCell::new();
        assert_eq!(cell.value(), Ok(0));
        assert!(!cell.is_empty());
    }

    #[test]
    fn moved_from_owner_rejects_access() {
        let mut a = OwnedCell::with_value(666);
        let b = a.take();

        assert_eq!(b.value(), Ok(666));
        assert!(a.is_empty());
        assert_eq!(a.value(), Err(CellError::MovedFrom));
        assert_eq!(a.set(1), Err(CellError::MovedFrom));
        assert_eq!(a.peek(), None);
    }

    #[test]
    fn clone_of_empty_owner_is_empty() {
        let mut a = OwnedCell::new();
        let _ = a.take();
        assert!(a.clone().is_empty());
    }

    #[test]
    fn drop_releases_exactly_once() {
        let baseline = live_cells();
        let mut a = OwnedCell::with_value(7);
        assert_eq!(live_cells(), baseline + 1);

        // one cell, two owner slots, only one of them holding
        let b = a.take();
        assert_eq!(live_cells(), baseline + 1);

        drop(a); // empty owner: nothing to release
        assert_eq!(live_cells(), baseline + 1);

        drop(b);
        assert_eq!(live_cells(), baseline);
    }

    #[test]
    fn move_assignment_releases_the_overwritten_cell() {
        let baseline = live_cells();
        let mut a = OwnedCell::with_value(1);
        let mut b = OwnedCell::with_value(2);
        assert_eq!(a.value(), Ok(1));
        assert_eq!(live_cells(), baseline + 2);

        a = b.take(); // a's prior cell is released by the assignment
        assert_eq!(live_cells(), baseline + 1);
        assert_eq!(a.value(), Ok(2));
        assert!(b.is_empty());
    }

    proptest! {
        #[test]
        fn set_then_value_roundtrips(x in any::<i64>()) {
            let mut cell = OwnedCell::new();
            cell.set(x).unwrap();
            prop_assert_eq!(cell.value(), Ok(x));
        }

        #[test]
        fn clone_never_aliases(x in any::<i64>(), y in any::<i64>()) {
            let mut a = OwnedCell::with_value(x);
            let b = a.clone();
            a.set(y).unwrap();
            prop_assert_eq!(b.value(), Ok(x));
            prop_assert_eq!(a.value(), Ok(y));
        }

        #[test]
        fn take_transfers_without_allocating(x in any::<i64>()) {
            let mut a = OwnedCell::with_value(x);
            let before = live_cells();
            let b = a.take();
            prop_assert_eq!(live_cells(), before);
            prop_assert_eq!(b.value(), Ok(x));
            prop_assert!(a.is_empty());
        }
    }
}
