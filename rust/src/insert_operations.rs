//! Insert operations for TreeMap.
//!
//! Insertion is a standard BST descent: an exact match swaps the value in
//! place with no structural change, a miss attaches a new red node and
//! repairs the coloring invariants bottom-up.

use std::cmp::Ordering;

use crate::types::{Color, TreeMap, TreeNode, NodeId, NULL_NODE};

impl<K, V> TreeMap<K, V> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Set the value for a key, returning the previous value if the key was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(1, "x"), None);
    /// assert_eq!(map.insert(1, "a"), Some("x"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.set_node(key, value).1
    }

    /// Insert the value only if the key is absent.
    ///
    /// Returns the value now associated with the key, plus `true` if the key
    /// was already present (in which case the existing value is unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert_if_absent(1, "a"), (&"a", false));
    /// assert_eq!(map.insert_if_absent(1, "b"), (&"a", true));
    /// ```
    pub fn insert_if_absent(&mut self, key: K, value: V) -> (&V, bool) {
        let (id, existed) = match self.lookup(&key) {
            NULL_NODE => (self.set_node(key, value).0, false),
            id => (id, true),
        };

        let value = self
            .entry_of(id)
            .map(|(_, v)| v)
            .expect("just-located node must be allocated");
        (value, existed)
    }

    // ============================================================================
    // TREE ENGINE
    // ============================================================================

    /// Descend, update in place on an exact match, otherwise attach a new red
    /// node and rebalance. Returns the node holding the key and the previous
    /// value, if any.
    pub(crate) fn set_node(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        if self.root == NULL_NODE {
            let id = self
                .arena
                .allocate(TreeNode::new(key, value, Color::Black, NULL_NODE));
            self.root = id;
            self.len = 1;
            return (id, None);
        }

        let mut node = self.root;
        loop {
            let ordering = match self.node(node) {
                Some(current) => (self.compare)(&key, &current.key),
                None => unreachable!("descent through unallocated node"),
            };

            match ordering {
                Ordering::Equal => {
                    let old = self
                        .node_mut(node)
                        .map(|n| std::mem::replace(&mut n.value, value));
                    return (node, old);
                }
                Ordering::Less => {
                    let left = self.left_of(node);
                    if left == NULL_NODE {
                        let id = self.arena.allocate(TreeNode::new(key, value, Color::Red, node));
                        if let Some(parent) = self.node_mut(node) {
                            parent.left = id;
                        }
                        self.fix_after_insertion(id);
                        self.len += 1;
                        return (id, None);
                    }
                    node = left;
                }
                Ordering::Greater => {
                    let right = self.right_of(node);
                    if right == NULL_NODE {
                        let id = self.arena.allocate(TreeNode::new(key, value, Color::Red, node));
                        if let Some(parent) = self.node_mut(node) {
                            parent.right = id;
                        }
                        self.fix_after_insertion(id);
                        self.len += 1;
                        return (id, None);
                    }
                    node = right;
                }
            }
        }
    }

    /// Classic red-black repair after attaching a red node.
    ///
    /// While the parent is red: a red uncle means recolor and continue from
    /// the grandparent; a black uncle means at most one rotation to
    /// straighten the line, then recolor and rotate at the grandparent.
    pub(crate) fn fix_after_insertion(&mut self, start: NodeId) {
        let mut x = start;

        while x != NULL_NODE && x != self.root && self.color_of(self.parent_of(x)).is_red() {
            if self.parent_of(x) == self.left_of(self.grandparent_of(x)) {
                let y = self.right_of(self.grandparent_of(x));
                if self.color_of(y).is_red() {
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(y, Color::Black);
                    self.set_color(self.grandparent_of(x), Color::Red);
                    x = self.grandparent_of(x);
                } else {
                    if x == self.right_of(self.parent_of(x)) {
                        x = self.parent_of(x);
                        self.rotate_left(x);
                    }
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(self.grandparent_of(x), Color::Red);
                    self.rotate_right(self.grandparent_of(x));
                }
            } else {
                let y = self.left_of(self.grandparent_of(x));
                if self.color_of(y).is_red() {
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(y, Color::Black);
                    self.set_color(self.grandparent_of(x), Color::Red);
                    x = self.grandparent_of(x);
                } else {
                    if x == self.left_of(self.parent_of(x)) {
                        x = self.parent_of(x);
                        self.rotate_right(x);
                    }
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(self.grandparent_of(x), Color::Red);
                    self.rotate_left(self.grandparent_of(x));
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use crate::types::TreeMap;

    #[test]
    fn test_insert_returns_old_value() {
        let mut map = TreeMap::new();
        assert_eq!(map.insert(5, "e"), None);
        assert_eq!(map.insert(5, "E"), Some("e"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&5), Some(&"E"));
    }

    #[test]
    fn test_insert_keeps_invariants() {
        let mut map = TreeMap::new();
        for k in 0..200 {
            map.insert(k, k);
            map.check_invariants_detailed().unwrap();
        }
        for k in (0..200).rev() {
            map.insert(k, -k);
            map.check_invariants_detailed().unwrap();
        }
        assert_eq!(map.len(), 200);
    }

    #[test]
    fn test_insert_if_absent() {
        let mut map = TreeMap::new();
        assert_eq!(map.insert_if_absent(1, 10), (&10, false));
        assert_eq!(map.insert_if_absent(1, 20), (&10, true));
        assert_eq!(map.len(), 1);
    }
}
