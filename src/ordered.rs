//! Ordered unique collection driven by an external comparator.

use crate::compare::Compare;

/// A sorted set whose element type needs no `Ord`: every comparison goes
/// through the comparator the set was constructed with.
///
/// Backed by a `Vec` kept sorted ascending per the comparator, with binary
/// search deciding membership and insertion position. Elements the
/// comparator considers equal are deduplicated; the resident element wins.
pub struct OrderedSet<T, C: Compare<T>> {
    items: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> OrderedSet<T, C> {
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T> + Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> OrderedSet<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        OrderedSet {
            items: Vec::new(),
            cmp,
        }
    }

    fn search(&self, item: &T) -> Result<usize, usize> {
        self.items
            .binary_search_by(|resident| self.cmp.compare(resident, item))
    }

    /// Inserts `item` unless an element equal under the comparator is
    /// already present. Returns whether the set grew; a rejected duplicate
    /// is dropped here and the resident element kept.
    pub fn insert(&mut self, item: T) -> bool {
        match self.search(&item) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, item);
                true
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ascending per the comparator.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the set, yielding its elements ascending per the
    /// comparator.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C: Compare<T>> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
