//! Item Sets
//!
//! The fixed, read-only ordered sequences a rotator advances through.
//! An [`ItemSet`] always holds at least one item, so every index a rotator
//! can produce maps to a real record.

use std::num::NonZeroUsize;

use serde::Serialize;
use thiserror::Error;

/// Errors building an item set
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ItemSetError {
    /// No items were supplied
    #[error("item set must contain at least one item")]
    Empty,
}

/// Immutable, non-empty ordered sequence of display records
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemSet<T> {
    items: Vec<T>,
}

impl<T> ItemSet<T> {
    /// Build an item set, rejecting an empty sequence
    ///
    /// # Errors
    ///
    /// Returns [`ItemSetError::Empty`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, ItemSetError> {
        if items.is_empty() {
            return Err(ItemSetError::Empty);
        }
        Ok(Self { items })
    }

    /// Wrap static content that is known to be non-empty
    pub(crate) fn from_static(items: Vec<T>) -> Self {
        debug_assert!(!items.is_empty(), "static content must not be empty");
        Self { items }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of items as a non-zero count
    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Always `false`; present for API symmetry with collections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// First item (always present)
    #[must_use]
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Items matching `predicate`, as a borrowed item set
    ///
    /// # Errors
    ///
    /// Returns [`ItemSetError::Empty`] if nothing matches.
    pub fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Result<ItemSet<&T>, ItemSetError> {
        ItemSet::new(self.items.iter().filter(|item| predicate(item)).collect())
    }
}

impl<T> TryFrom<Vec<T>> for ItemSet<T> {
    type Error = ItemSetError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a ItemSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_item_set_rejected() {
        assert_eq!(ItemSet::<u8>::new(vec![]), Err(ItemSetError::Empty));
        assert_eq!(ItemSet::<u8>::try_from(Vec::new()), Err(ItemSetError::Empty));
    }

    #[test]
    fn test_item_set_access() {
        let set = ItemSet::new(vec!["a", "b", "c"]).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.count().get(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.first(), &"a");
        assert_eq!(set.get(2), Some(&"c"));
        assert_eq!(set.get(3), None);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filtered_item_set() {
        let set = ItemSet::new(vec![1, 2, 3, 4]).unwrap();

        let even = set.filtered(|n| n % 2 == 0).unwrap();
        assert_eq!(even.as_slice(), &[&2, &4]);

        assert_eq!(set.filtered(|n| *n > 10), Err(ItemSetError::Empty));
    }

    #[test]
    fn test_item_set_serializes_as_sequence() {
        let set = ItemSet::new(vec![1, 2]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2]");
    }
}
