//! Insertion-ordered array map
//!
//! `ArrayMap` stores keys and values in two parallel arrays and finds keys by
//! linear scan. Every map in a puzzle holds at most 26 entries, so the scan is
//! cheaper than hashing and keeps iteration in insertion order.

use std::borrow::Borrow;
use std::fmt;
use std::iter::Zip;
use std::mem;
use std::slice;
use std::vec;

/// Capacity of a map created with [`ArrayMap::new`]
pub const DEFAULT_CAPACITY: usize = 10;

/// Error type for cursor misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMapError {
    /// `remove_current` was called before `next_entry`, or twice for the same entry
    InvalidIteratorState,
}

impl fmt::Display for ArrayMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIteratorState => {
                write!(f, "remove_current requires a preceding call to next_entry")
            }
        }
    }
}

impl std::error::Error for ArrayMapError {}

/// Key-value map that preserves insertion order
///
/// Keys are compared by equality only. Re-inserting an existing key replaces
/// its value in place, so the key keeps its original position.
///
/// # Examples
/// ```
/// use cryptograms::core::ArrayMap;
///
/// let mut map = ArrayMap::new();
/// assert_eq!(map.put('Q', 'E'), None);
/// assert_eq!(map.put('X', 'T'), None);
/// assert_eq!(map.put('Q', 'A'), Some('E'));
///
/// let pairs: Vec<_> = map.entries().collect();
/// assert_eq!(pairs, vec![(&'Q', &'A'), (&'X', &'T')]);
/// ```
#[derive(Clone)]
pub struct ArrayMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    capacity: usize,
}

impl<K, V> ArrayMap<K, V> {
    /// Create an empty map with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map that holds `capacity` pairs before growing
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of key-value pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of pairs the map holds before its storage doubles
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn entries(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.keys.iter().zip(self.values.iter()),
        }
    }

    /// Alias for [`ArrayMap::entries`]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries()
    }

    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Open a cursor that can remove entries while walking the map
    ///
    /// The cursor borrows the map mutably, so no other path can modify the
    /// map until the cursor is dropped.
    pub fn cursor(&mut self) -> Cursor<'_, K, V> {
        Cursor {
            map: self,
            index: 0,
            state: CursorState::AwaitingNext,
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn remove_at(&mut self, index: usize) -> (K, V) {
        (self.keys.remove(index), self.values.remove(index))
    }

    fn grow(&mut self) {
        let capacity = (self.capacity * 2).max(1);
        self.keys.reserve_exact(capacity - self.keys.len());
        self.values.reserve_exact(capacity - self.values.len());
        self.capacity = capacity;
    }
}

impl<K: PartialEq, V> ArrayMap<K, V> {
    /// Insert or replace a value
    ///
    /// Returns the previous value if the key was already present. A new key
    /// is appended after all existing keys.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = self.position(&key) {
            return Some(mem::replace(&mut self.values[index], value));
        }

        if self.len() == self.capacity {
            self.grow();
        }

        self.keys.push(key);
        self.values.push(value);
        None
    }

    /// Look up the value stored for `key`
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).map(|index| &self.values[index])
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Remove the first pair whose key equals `key`
    ///
    /// Returns the removed value. Later pairs shift down one position, so the
    /// remaining pairs stay in insertion order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        Some(self.remove_at(index).1)
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for ArrayMap<K, V> {
    /// Maps are equal when they hold the same pairs in the same order
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for ArrayMap<K, V> {}

impl<K: PartialEq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for ArrayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K, V> IntoIterator for ArrayMap<K, V> {
    type Item = (K, V);
    type IntoIter = Zip<vec::IntoIter<K>, vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

/// Borrowing iterator over an [`ArrayMap`], in insertion order
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    /// No entry may be removed until `next_entry` is called
    AwaitingNext,
    /// The entry returned by the last `next_entry` may be removed
    Removable,
}

/// Single-pass cursor over an [`ArrayMap`] that can remove the current entry
///
/// # Examples
/// ```
/// use cryptograms::core::ArrayMap;
///
/// let mut map: ArrayMap<char, usize> = [('A', 3), ('B', 0), ('C', 1)].into_iter().collect();
///
/// let mut cursor = map.cursor();
/// while let Some((_, &count)) = cursor.next_entry() {
///     if count == 0 {
///         cursor.remove_current().unwrap();
///     }
/// }
///
/// assert_eq!(map.len(), 2);
/// assert!(!map.contains_key(&'B'));
/// ```
pub struct Cursor<'a, K, V> {
    map: &'a mut ArrayMap<K, V>,
    index: usize,
    state: CursorState,
}

impl<K, V> Cursor<'_, K, V> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index < self.map.len()
    }

    /// Advance to the next pair and return it
    pub fn next_entry(&mut self) -> Option<(&K, &V)> {
        if !self.has_next() {
            return None;
        }

        let index = self.index;
        self.index += 1;
        self.state = CursorState::Removable;
        Some((&self.map.keys[index], &self.map.values[index]))
    }

    /// Remove the pair most recently returned by [`Cursor::next_entry`]
    ///
    /// The following `next_entry` returns the pair after the removed one.
    ///
    /// # Errors
    /// Returns [`ArrayMapError::InvalidIteratorState`] if `next_entry` has not
    /// been called since the cursor was created or since the last removal.
    pub fn remove_current(&mut self) -> Result<(K, V), ArrayMapError> {
        if self.state != CursorState::Removable {
            return Err(ArrayMapError::InvalidIteratorState);
        }

        self.index -= 1;
        self.state = CursorState::AwaitingNext;
        Ok(self.map.remove_at(self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_returns_previous_value() {
        let mut map = ArrayMap::new();
        assert_eq!(map.put("Test0", "0"), None);
        assert_eq!(map.put("Test0", "zero"), Some("0"));
        assert_eq!(map.get("Test0"), Some(&"zero"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn grows_past_default_capacity() {
        let mut map = ArrayMap::new();
        assert_eq!(map.capacity(), DEFAULT_CAPACITY);

        for i in 0..25 {
            map.put(i, i * 10);
        }

        assert_eq!(map.len(), 25);
        assert_eq!(map.capacity(), 40);
        assert_eq!(map.get(&24), Some(&240));
        assert_eq!(map.get(&0), Some(&0));
    }

    #[test]
    fn zero_capacity_map_still_grows() {
        let mut map = ArrayMap::with_capacity(0);
        map.put('A', 1);
        map.put('B', 2);
        assert_eq!(map.capacity(), 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn len_counts_distinct_keys() {
        let mut map = ArrayMap::new();
        for key in ["a", "b", "a", "c", "b", "a"] {
            map.put(key.to_string(), key.len());
        }
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn lookup_by_borrowed_key() {
        let mut map = ArrayMap::new();
        map.put("Test1".to_string(), 1);

        assert!(map.contains_key("Test1"));
        assert!(!map.contains_key("Test2"));
        assert_eq!(map.get("Test1"), Some(&1));
        assert_eq!(map.get("Test2"), None);
    }

    #[test]
    fn entries_follow_first_insertion_order() {
        let mut map = ArrayMap::new();
        map.put('C', 1);
        map.put('A', 2);
        map.put('B', 3);
        map.put('A', 4);

        let keys: Vec<char> = map.keys().copied().collect();
        assert_eq!(keys, vec!['C', 'A', 'B']);

        let values: Vec<i32> = map.values().copied().collect();
        assert_eq!(values, vec![1, 4, 3]);
    }

    #[test]
    fn entries_are_restartable() {
        let map: ArrayMap<_, _> = [("Test1", 1), ("Test2", 2), ("Test3", 3)]
            .into_iter()
            .collect();

        let first: Vec<_> = map.entries().collect();
        let second: Vec<_> = map.entries().collect();
        assert_eq!(first, second);
        assert_eq!(map.entries().len(), 3);
    }

    #[test]
    fn remove_drops_matching_pair() {
        let mut map: ArrayMap<_, _> = [("Test1", 1), ("Test2", 2), ("Test3", 3)]
            .into_iter()
            .collect();

        assert_eq!(map.remove("Test2"), Some(2));
        assert_eq!(map.remove("Test2"), None);
        assert_eq!(map.len(), 2);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["Test1", "Test3"]);
    }

    #[test]
    fn cursor_visits_every_entry() {
        let mut map: ArrayMap<_, _> = [('A', 1), ('B', 2), ('C', 3)].into_iter().collect();
        let mut cursor = map.cursor();
        let mut seen = Vec::new();

        assert!(cursor.has_next());
        while let Some((&key, _)) = cursor.next_entry() {
            seen.push(key);
        }

        assert!(!cursor.has_next());
        assert_eq!(seen, vec!['A', 'B', 'C']);
    }

    #[test]
    fn cursor_removes_current_entry() {
        let mut map: ArrayMap<_, _> = [('A', 1), ('B', 2), ('C', 3)].into_iter().collect();
        let mut cursor = map.cursor();

        cursor.next_entry();
        cursor.next_entry();
        assert_eq!(cursor.remove_current(), Ok(('B', 2)));

        // Continues with the pair after the removed one
        assert_eq!(cursor.next_entry(), Some((&'C', &3)));
        assert!(!cursor.has_next());

        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(&'B'));
    }

    #[test]
    fn cursor_can_empty_the_map() {
        let mut map: ArrayMap<_, _> = [('A', 1), ('B', 2), ('C', 3)].into_iter().collect();
        let mut cursor = map.cursor();

        while cursor.next_entry().is_some() {
            cursor.remove_current().unwrap();
        }

        assert!(map.is_empty());
    }

    #[test]
    fn remove_before_next_is_invalid() {
        let mut map: ArrayMap<_, _> = [('A', 1)].into_iter().collect();
        let mut cursor = map.cursor();

        assert_eq!(
            cursor.remove_current(),
            Err(ArrayMapError::InvalidIteratorState)
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn double_remove_is_invalid() {
        let mut map: ArrayMap<_, _> = [('A', 1), ('B', 2)].into_iter().collect();
        let mut cursor = map.cursor();

        cursor.next_entry();
        assert!(cursor.remove_current().is_ok());
        assert_eq!(
            cursor.remove_current(),
            Err(ArrayMapError::InvalidIteratorState)
        );

        // A fresh next_entry makes removal legal again
        cursor.next_entry();
        assert_eq!(cursor.remove_current(), Ok(('B', 2)));
        assert!(map.is_empty());
    }

    #[test]
    fn owned_iteration_yields_pairs_in_order() {
        let map: ArrayMap<_, _> = [('X', "x"), ('Y', "y")].into_iter().collect();
        let pairs: Vec<_> = map.into_iter().collect();
        assert_eq!(pairs, vec![('X', "x"), ('Y', "y")]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: ArrayMap<_, _> = [('A', 1), ('B', 2)].into_iter().collect();
        let ba: ArrayMap<_, _> = [('B', 2), ('A', 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn debug_formats_as_map() {
        let map: ArrayMap<_, _> = [('A', 1)].into_iter().collect();
        assert_eq!(format!("{map:?}"), "{'A': 1}");
    }
}
