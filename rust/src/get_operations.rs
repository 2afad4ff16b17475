//! Read operations for TreeMap.
//!
//! Key lookup, containment queries, floor/ceiling search, and first/last
//! access. Absence is reported as `None`, never as an error.

use std::cmp::Ordering;

use crate::types::{TreeMap, NodeId, NULL_NODE};

impl<K, V> TreeMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let id = self.lookup(key);
        self.node(id).map(|n| &n.value)
    }

    /// Get a mutable reference to the value associated with a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.lookup(key);
        self.node_mut(id).map(|n| &mut n.value)
    }

    /// Get the value for a key the caller knows is present.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent. Use [`get`](Self::get) when absence is a
    /// legitimate outcome.
    pub fn must_get(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("TreeMap::must_get: key does not exist"),
        }
    }

    /// Check if the key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "one");
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.lookup(key) != NULL_NODE
    }

    /// Check if every key in `keys` exists in the map.
    ///
    /// An empty key sequence is trivially contained.
    pub fn contains_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Check if any key in `keys` exists in the map.
    ///
    /// An empty key sequence is trivially satisfied.
    pub fn contains_any<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() {
            return true;
        }
        keys.any(|key| self.contains(key))
    }

    // ============================================================================
    // ORDER QUERIES
    // ============================================================================

    /// Find the largest entry whose key is less than or equal to `key`.
    ///
    /// Returns `None` if the map is empty or every key is larger than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let map: TreeMap<_, _> = [(1, "a"), (3, "c"), (7, "g")].into_iter().collect();
    /// assert_eq!(map.floor(&4), Some((&3, &"c")));
    /// assert_eq!(map.floor(&3), Some((&3, &"c")));
    /// assert_eq!(map.floor(&0), None);
    /// ```
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        let mut node = self.root;
        let mut floor = NULL_NODE;
        while let Some(current) = self.node(node) {
            match (self.compare)(key, &current.key) {
                Ordering::Equal => return self.entry_of(node),
                Ordering::Less => node = current.left,
                Ordering::Greater => {
                    floor = node;
                    node = current.right;
                }
            }
        }
        self.entry_of(floor)
    }

    /// Find the smallest entry whose key is greater than or equal to `key`.
    ///
    /// Returns `None` if the map is empty or every key is smaller than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let map: TreeMap<_, _> = [(1, "a"), (3, "c"), (7, "g")].into_iter().collect();
    /// assert_eq!(map.ceiling(&4), Some((&7, &"g")));
    /// assert_eq!(map.ceiling(&8), None);
    /// ```
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        let mut node = self.root;
        let mut ceiling = NULL_NODE;
        while let Some(current) = self.node(node) {
            match (self.compare)(key, &current.key) {
                Ordering::Equal => return self.entry_of(node),
                Ordering::Less => {
                    ceiling = node;
                    node = current.left;
                }
                Ordering::Greater => node = current.right,
            }
        }
        self.entry_of(ceiling)
    }

    /// Get the entry with the minimum key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry_of(self.min_node(self.root))
    }

    /// Get the entry with the maximum key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry_of(self.max_node(self.root))
    }

    // ============================================================================
    // LOOKUP HELPER
    // ============================================================================

    /// Standard BST descent; returns the matching node or `NULL_NODE`.
    pub(crate) fn lookup(&self, key: &K) -> NodeId {
        let mut node = self.root;
        while let Some(current) = self.node(node) {
            match (self.compare)(key, &current.key) {
                Ordering::Equal => return node,
                Ordering::Less => node = current.left,
                Ordering::Greater => node = current.right,
            }
        }
        NULL_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeMap<i32, &'static str> {
        [(1, "a"), (3, "c"), (7, "g")].into_iter().collect()
    }

    #[test]
    fn test_get_and_contains() {
        let map = sample();
        assert_eq!(map.get(&3), Some(&"c"));
        assert_eq!(map.get(&4), None);
        assert!(map.contains(&7));
        assert!(!map.contains(&0));
    }

    #[test]
    fn test_get_mut() {
        let mut map = sample();
        *map.get_mut(&1).unwrap() = "A";
        assert_eq!(map.get(&1), Some(&"A"));
        assert!(map.get_mut(&2).is_none());
    }

    #[test]
    fn test_must_get() {
        let map = sample();
        assert_eq!(map.must_get(&1), &"a");
    }

    #[test]
    #[should_panic(expected = "key does not exist")]
    fn test_must_get_absent_panics() {
        sample().must_get(&99);
    }

    #[test]
    fn test_contains_all_any() {
        let map = sample();
        assert!(map.contains_all(&[1, 3]));
        assert!(!map.contains_all(&[1, 4]));
        assert!(map.contains_all(&[]));
        assert!(map.contains_any(&[4, 7]));
        assert!(!map.contains_any(&[4, 5]));
        assert!(map.contains_any(&[]));
    }

    #[test]
    fn test_floor_ceiling_bounds() {
        let map = sample();
        assert_eq!(map.floor(&4), Some((&3, &"c")));
        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&100), Some((&7, &"g")));
        assert_eq!(map.ceiling(&4), Some((&7, &"g")));
        assert_eq!(map.ceiling(&8), None);
        assert_eq!(map.ceiling(&-5), Some((&1, &"a")));
    }

    #[test]
    fn test_floor_ceiling_empty() {
        let map: TreeMap<i32, ()> = TreeMap::new();
        assert_eq!(map.floor(&1), None);
        assert_eq!(map.ceiling(&1), None);
        assert_eq!(map.first(), None);
        assert_eq!(map.last(), None);
    }

    #[test]
    fn test_first_last() {
        let map = sample();
        assert_eq!(map.first(), Some((&1, &"a")));
        assert_eq!(map.last(), Some((&7, &"g")));
    }
}
