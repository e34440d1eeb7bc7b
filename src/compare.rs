//! Injectable comparison strategies.
//!
//! [`OwnedCell`] carries no equality, ordering, or hashing of its own, so
//! any collection that deduplicates cells has to be told how to compare
//! them. A strategy is an ordinary value passed to the collection:
//! [`ByValue`] for the usual held-value semantics, or a closure wrapped in
//! [`CmpFn`] / [`HashEqFn`] for one-off orderings at the call site.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::cell::OwnedCell;

/// Ordering strategy supplied by the collection's consumer.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Hashing and equality strategy supplied by the collection's consumer.
///
/// Implementations must keep the two halves consistent: items equal under
/// `eq` must produce the same `hash`.
pub trait HashEq<T> {
    fn hash(&self, v: &T) -> u64;
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// Compares, equates, and hashes cells by the value they hold.
///
/// An empty owner orders before every held value and only equals another
/// empty owner; collections built from live cells never reach that branch.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByValue;

impl Compare<OwnedCell> for ByValue {
    fn compare(&self, a: &OwnedCell, b: &OwnedCell) -> Ordering {
        a.peek().cmp(&b.peek())
    }
}

impl HashEq<OwnedCell> for ByValue {
    fn hash(&self, v: &OwnedCell) -> u64 {
        let mut hasher = FxHasher::default();
        v.peek().hash(&mut hasher);
        hasher.finish()
    }

    fn eq(&self, a: &OwnedCell, b: &OwnedCell) -> bool {
        a.peek() == b.peek()
    }
}

/// Adapts an ordering closure into a [`Compare`] strategy.
pub struct CmpFn<F>(pub F);

impl<T, F> Compare<T> for CmpFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Adapts a hash closure and an equality closure into a [`HashEq`]
/// strategy.
pub struct HashEqFn<H, E> {
    pub hash: H,
    pub eq: E,
}

impl<T, H, E> HashEq<T> for HashEqFn<H, E>
where
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    fn hash(&self, v: &T) -> u64 {
        (self.hash)(v)
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_orders_cells_by_held_value() {
        let three = OwnedCell::with_value(3);
        let five = OwnedCell::with_value(5);

        assert_eq!(ByValue.compare(&three, &five), Ordering::Less);
        assert_eq!(ByValue.compare(&five, &three), Ordering::Greater);
        assert_eq!(
            ByValue.compare(&five, &OwnedCell::with_value(5)),
            Ordering::Equal
        );
    }

    #[test]
    fn empty_owner_orders_before_every_held_value() {
        let mut moved = OwnedCell::with_value(i64::MIN);
        let _ = moved.take();

        assert_eq!(
            ByValue.compare(&moved, &OwnedCell::with_value(i64::MIN)),
            Ordering::Less
        );
        assert!(!ByValue.eq(&moved, &OwnedCell::new()));
        assert!(ByValue.eq(&moved, &moved.clone()));
    }

    #[test]
    fn equal_cells_hash_alike() {
        let a = OwnedCell::with_value(42);
        let b = OwnedCell::with_value(42);
        assert!(ByValue.eq(&a, &b));
        assert_eq!(ByValue.hash(&a), ByValue.hash(&b));
    }

    #[test]
    fn closure_adapters_stand_in_for_strategies() {
        let descending = CmpFn(|a: &i64, b: &i64| b.cmp(a));
        assert_eq!(descending.compare(&1, &2), Ordering::Greater);

        let identity = HashEqFn {
            hash: |v: &i64| *v as u64,
            eq: |a: &i64, b: &i64| a == b,
        };
        assert_eq!(identity.hash(&7), 7);
        assert!(identity.eq(&7, &7));
    }
}
