//! Construction and initialization logic for TreeMap.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::{TreeMap, NULL_NODE};

impl<K: Ord + 'static, V> TreeMap<K, V> {
    /// Create an empty map ordered by the key type's natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let map: TreeMap<i32, &str> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(K::cmp)
    }
}

impl<K, V> TreeMap<K, V> {
    /// Create an empty map ordered by the supplied comparator.
    ///
    /// The comparator must define a total order over keys; it is stored in
    /// the map and consulted on every descent.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::with_comparator(|a: &String, b: &String| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// });
    /// map.insert("B".to_string(), 2);
    /// map.insert("a".to_string(), 1);
    /// assert_eq!(map.keys(), ["a", "B"]);
    /// ```
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering + 'static,
    {
        Self {
            root: NULL_NODE,
            len: 0,
            arena: Arena::new(),
            compare: Box::new(compare),
        }
    }
}

impl<K: Ord + 'static, V> Default for TreeMap<K, V> {
    /// Create an empty map with the natural key order.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + 'static, V> FromIterator<(K, V)> for TreeMap<K, V> {
    /// Build a map from key-value pairs; later pairs overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for TreeMap<K, V> {
    /// Set all pairs from the iterator, overwriting existing keys.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let map: TreeMap<i32, String> = TreeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_default() {
        let map: TreeMap<i32, String> = TreeMap::default();
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_iterator_last_write_wins() {
        let map: TreeMap<i32, &str> = [(1, "x"), (2, "b"), (1, "a")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&"a"));
    }

    #[test]
    fn test_reverse_comparator_order() {
        let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        map.extend([(1, ()), (3, ()), (2, ())]);
        assert_eq!(map.keys(), [&3, &2, &1]);
    }
}
