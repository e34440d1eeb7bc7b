//! Exclusive ownership of heap cells, with comparator-driven collections.
//!
//! The core type, [`OwnedCell`], owns at most one heap-allocated integer
//! slot. Cloning duplicates the slot into independent storage, moving
//! transfers it and leaves the source observably empty, and dropping
//! releases it exactly once. The type deliberately implements no equality,
//! ordering, or hashing of its own: [`OrderedSet`] and [`HashedSet`] are
//! handed an explicit strategy ([`ByValue`], or any [`Compare`] /
//! [`HashEq`] implementation) at each use site, so comparison semantics are
//! always spelled out by the caller.
//!
//! [`OwnedCellArray`] is the bulk counterpart: it owns a fixed number of
//! cells and releases them together, keeping scalar and bulk teardown in
//! separate types so they cannot be mixed.

pub mod array;
pub mod cell;
pub mod compare;
pub mod error;
pub mod hashed;
pub mod ordered;

pub use array::OwnedCellArray;
pub use cell::{live_cells, OwnedCell};
pub use compare::{ByValue, CmpFn, Compare, HashEq, HashEqFn};
pub use error::CellError;
pub use hashed::HashedSet;
pub use ordered::OrderedSet;
