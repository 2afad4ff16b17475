//! Iteration over TreeMap.
//!
//! Two flavors: [`Iter`] is a cheap read-only in-order view, and [`Cursor`]
//! is a mutable walker that supports removing the current entry and then
//! resuming from either neighbor. Bulk snapshots (`keys`, `values`,
//! `entries`) and callback traversal (`each`, `reverse_each`) are built on
//! the read-only walk.

use crate::error::{TreeMapError, TreeResult};
use crate::types::{TreeMap, NodeId, NULL_NODE};

// ============================================================================
// READ-ONLY ITERATION
// ============================================================================

/// In-order iterator over `(&K, &V)` pairs.
///
/// Created by [`TreeMap::iter`]. Walks parent links, so it carries no heap
/// state of its own.
pub struct Iter<'a, K, V> {
    tree: &'a TreeMap<K, V>,
    node: NodeId,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.tree.entry_of(self.node)?;
        self.node = self.tree.successor_of(self.node);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len()))
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> TreeMap<K, V> {
    /// Iterate over all entries in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let map: TreeMap<_, _> = [(2, "b"), (1, "a")].into_iter().collect();
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            node: self.min_node(self.root),
        }
    }

    /// All keys in order.
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// All values in key order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// All entries in key order.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Call `f` for each entry in ascending key order.
    ///
    /// Traversal stops early when `f` returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !f(key, value) {
                return;
            }
        }
    }

    /// Call `f` for each entry in descending key order.
    ///
    /// Traversal stops early when `f` returns `false`.
    pub fn reverse_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut id = self.max_node(self.root);
        while let Some((key, value)) = self.entry_of(id) {
            if !f(key, value) {
                return;
            }
            id = self.predecessor_of(id);
        }
    }

    // ============================================================================
    // CURSOR CONSTRUCTION
    // ============================================================================

    /// Open an unpositioned cursor over the map.
    ///
    /// The first [`next`](Cursor::next) lands on the minimum entry, the
    /// first [`prev`](Cursor::prev) on the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map: TreeMap<_, _> = [(1, "a"), (2, "b")].into_iter().collect();
    /// let mut cursor = map.cursor();
    /// assert!(cursor.next());
    /// assert_eq!(cursor.key(), Some(&1));
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, K, V> {
        Cursor {
            tree: self,
            node: NULL_NODE,
            removed: false,
            saved_prev: NULL_NODE,
            saved_next: NULL_NODE,
        }
    }

    /// Open a cursor positioned on `key`, or `None` if the key is absent.
    pub fn cursor_at(&mut self, key: &K) -> Option<Cursor<'_, K, V>> {
        let id = self.lookup(key);
        if id == NULL_NODE {
            return None;
        }
        Some(Cursor {
            tree: self,
            node: id,
            removed: false,
            saved_prev: NULL_NODE,
            saved_next: NULL_NODE,
        })
    }
}

// ============================================================================
// CURSOR
// ============================================================================

/// A mutable position in a [`TreeMap`].
///
/// The cursor moves with [`next`](Self::next) and [`prev`](Self::prev) and
/// can remove the entry it stands on. After a removal the cursor is
/// detached: it reads as unpositioned, but it remembers both neighbors of
/// the removed entry, so the next movement resumes the walk without
/// skipping or repeating an entry.
///
/// # Examples
///
/// Removing while iterating:
///
/// ```
/// use treemap::TreeMap;
///
/// let mut map: TreeMap<_, _> = (1..=5).map(|k| (k, ())).collect();
/// let mut cursor = map.cursor();
/// while cursor.next() {
///     if cursor.key().is_some_and(|k| k % 2 == 0) {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(map.keys(), [&1, &3, &5]);
/// ```
pub struct Cursor<'a, K, V> {
    tree: &'a mut TreeMap<K, V>,
    node: NodeId,
    removed: bool,
    saved_prev: NodeId,
    saved_next: NodeId,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Advance to the next entry in ascending order.
    ///
    /// From the unpositioned state this lands on the minimum entry. Returns
    /// `false`, leaving the position unchanged, when no next entry exists.
    pub fn next(&mut self) -> bool {
        if self.tree.is_empty() {
            return false;
        }

        if self.removed {
            if self.saved_next == NULL_NODE {
                return false;
            }
            self.node = self.saved_next;
            self.clear_resume();
            return true;
        }

        if self.node == NULL_NODE {
            self.node = self.tree.min_node(self.tree.root);
            return true;
        }

        let next = self.tree.successor_of(self.node);
        if next == NULL_NODE {
            return false;
        }
        self.node = next;
        true
    }

    /// Step to the previous entry in descending order.
    ///
    /// From the unpositioned state this lands on the maximum entry. Returns
    /// `false`, leaving the position unchanged, when no previous entry
    /// exists.
    pub fn prev(&mut self) -> bool {
        if self.tree.is_empty() {
            return false;
        }

        if self.removed {
            if self.saved_prev == NULL_NODE {
                return false;
            }
            self.node = self.saved_prev;
            self.clear_resume();
            return true;
        }

        if self.node == NULL_NODE {
            self.node = self.tree.max_node(self.tree.root);
            return true;
        }

        let prev = self.tree.predecessor_of(self.node);
        if prev == NULL_NODE {
            return false;
        }
        self.node = prev;
        true
    }

    /// Key of the current entry, or `None` when unpositioned or detached.
    pub fn key(&self) -> Option<&K> {
        self.tree.entry_of(self.node).map(|(k, _)| k)
    }

    /// Value of the current entry, or `None` when unpositioned or detached.
    pub fn value(&self) -> Option<&V> {
        self.tree.entry_of(self.node).map(|(_, v)| v)
    }

    /// Mutable value of the current entry.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.tree.node_mut(self.node).map(|n| &mut n.value)
    }

    /// Replace the value of the current entry. No-op when unpositioned or
    /// detached.
    pub fn set_value(&mut self, value: V) {
        if let Some(node) = self.tree.node_mut(self.node) {
            node.value = value;
        }
    }

    /// Remove the current entry and return it.
    ///
    /// The cursor detaches but remembers both neighbors, so `next` and
    /// `prev` continue the walk as if the entry had never been there.
    ///
    /// # Errors
    ///
    /// Returns [`TreeMapError::InvalidCursor`] when the cursor is
    /// unpositioned or the current entry was already removed.
    pub fn remove(&mut self) -> TreeResult<(K, V)> {
        if self.removed {
            return Err(TreeMapError::invalid_cursor(
                "remove",
                "an already removed entry",
            ));
        }
        if self.node == NULL_NODE {
            return Err(TreeMapError::invalid_cursor(
                "remove",
                "before positioning on an entry",
            ));
        }

        let prev = self.tree.predecessor_of(self.node);
        let next = self.tree.successor_of(self.node);

        let unlinked = self.tree.delete_node(self.node);
        // Two-children case: the successor node was the one unlinked and the
        // cursored node now holds the promoted entry, which is exactly the
        // next element of the walk.
        self.saved_next = if unlinked != self.node { self.node } else { next };
        self.saved_prev = prev;

        let entry = match self.tree.arena.deallocate(unlinked) {
            Some(node) => (node.key, node.value),
            None => {
                return Err(TreeMapError::corrupted_tree(
                    "cursor",
                    "removed node missing from arena",
                ))
            }
        };

        self.node = NULL_NODE;
        self.removed = true;
        Ok(entry)
    }

    /// Return the cursor to the unpositioned state.
    pub fn reset(&mut self) {
        self.node = NULL_NODE;
        self.clear_resume();
    }

    fn clear_resume(&mut self) {
        self.removed = false;
        self.saved_prev = NULL_NODE;
        self.saved_next = NULL_NODE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeMap<i32, &'static str> {
        [(1, "a"), (2, "b"), (3, "c")].into_iter().collect()
    }

    #[test]
    fn test_iter_in_order() {
        let map = sample();
        let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [1, 2, 3]);
        assert_eq!(map.keys(), [&1, &2, &3]);
        assert_eq!(map.values(), [&"a", &"b", &"c"]);
        assert_eq!(map.entries(), [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    }

    #[test]
    fn test_iter_empty() {
        let map: TreeMap<i32, ()> = TreeMap::new();
        assert_eq!(map.iter().count(), 0);
        assert!(map.keys().is_empty());
    }

    #[test]
    fn test_each_stops_early() {
        let map = sample();
        let mut seen = Vec::new();
        map.each(|k, _| {
            seen.push(*k);
            *k < 2
        });
        assert_eq!(seen, [1, 2]);

        let mut seen = Vec::new();
        map.reverse_each(|k, _| {
            seen.push(*k);
            *k > 2
        });
        assert_eq!(seen, [3, 2]);
    }

    #[test]
    fn test_cursor_forward_backward() {
        let mut map = sample();
        let mut cursor = map.cursor();

        let mut keys = Vec::new();
        while cursor.next() {
            keys.push(*cursor.key().unwrap());
        }
        assert_eq!(keys, [1, 2, 3]);

        // Exhausted cursor stays on the last entry.
        assert_eq!(cursor.key(), Some(&3));

        cursor.reset();
        let mut keys = Vec::new();
        while cursor.prev() {
            keys.push(*cursor.key().unwrap());
        }
        assert_eq!(keys, [3, 2, 1]);
    }

    #[test]
    fn test_cursor_remove_resumes_both_ways() {
        let mut map: TreeMap<_, _> = (1..=5).map(|k| (k, ())).collect();
        let mut cursor = map.cursor();
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.key(), Some(&3));

        assert_eq!(cursor.remove().unwrap().0, 3);
        assert_eq!(cursor.key(), None);

        assert!(cursor.next());
        assert_eq!(cursor.key(), Some(&4));

        // Remove again and resume backwards this time.
        cursor.remove().unwrap();
        assert!(cursor.prev());
        assert_eq!(cursor.key(), Some(&2));

        assert_eq!(map.keys(), [&1, &2, &5]);
        map.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_cursor_remove_errors() {
        let mut map = sample();
        let mut cursor = map.cursor();
        assert!(cursor.remove().unwrap_err().is_cursor_error());

        cursor.next();
        cursor.remove().unwrap();
        assert!(cursor.remove().unwrap_err().is_cursor_error());
    }

    #[test]
    fn test_cursor_at() {
        let mut map = sample();
        assert!(map.cursor_at(&9).is_none());

        let mut cursor = map.cursor_at(&2).unwrap();
        assert_eq!(cursor.value(), Some(&"b"));
        assert!(cursor.next());
        assert_eq!(cursor.key(), Some(&3));
    }

    #[test]
    fn test_cursor_set_value() {
        let mut map = sample();
        let mut cursor = map.cursor();

        // No-op while unpositioned.
        cursor.set_value("z");

        cursor.next();
        cursor.set_value("A");
        *cursor.value_mut().unwrap() = "AA";
        drop(cursor);
        assert_eq!(map.get(&1), Some(&"AA"));
    }
}
