//! Delete operations for TreeMap.
//!
//! A node with two children never moves: its entry is swapped with the
//! in-order successor's and the successor (which has at most one child) is
//! unlinked instead. Removing a black node is followed by the usual
//! double-black repair, run against the replacement child or, for a black
//! leaf, against the still-linked node itself before it is detached.

use crate::types::{Color, TreeMap, NodeId, NULL_NODE};

impl<K, V> TreeMap<K, V> {
    // ============================================================================
    // PUBLIC DELETE OPERATIONS
    // ============================================================================

    /// Remove a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map: TreeMap<_, _> = [(1, "a"), (2, "b")].into_iter().collect();
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.lookup(key);
        if id == NULL_NODE {
            return None;
        }
        let unlinked = self.delete_node(id);
        self.arena.deallocate(unlinked).map(|node| node.value)
    }

    /// Remove every key in `keys`; absent keys are skipped.
    pub fn remove_all<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        for key in keys {
            self.remove(key);
        }
    }

    /// Remove and return the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map: TreeMap<_, _> = [(2, "b"), (1, "a")].into_iter().collect();
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.min_node(self.root);
        if id == NULL_NODE {
            return None;
        }
        let unlinked = self.delete_node(id);
        self.arena
            .deallocate(unlinked)
            .map(|node| (node.key, node.value))
    }

    /// Remove and return the entry with the maximum key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.max_node(self.root);
        if id == NULL_NODE {
            return None;
        }
        let unlinked = self.delete_node(id);
        self.arena
            .deallocate(unlinked)
            .map(|node| (node.key, node.value))
    }

    // ============================================================================
    // TREE ENGINE
    // ============================================================================

    /// Unlink one node from the tree and return its id.
    ///
    /// The returned id may differ from `p`: when `p` has two children its
    /// entry is swapped with the successor's and the successor is the node
    /// that physically leaves the tree. The caller owns deallocation; the
    /// returned node always holds the entry that was logically removed.
    pub(crate) fn delete_node(&mut self, p: NodeId) -> NodeId {
        self.len -= 1;
        let mut p = p;

        if self.left_of(p) != NULL_NODE && self.right_of(p) != NULL_NODE {
            let s = self.successor_of(p);
            if let Some((a, b)) = self.arena.get_pair_mut(p, s) {
                std::mem::swap(&mut a.key, &mut b.key);
                std::mem::swap(&mut a.value, &mut b.value);
            }
            p = s;
        }

        let replacement = if self.left_of(p) != NULL_NODE {
            self.left_of(p)
        } else {
            self.right_of(p)
        };

        if replacement != NULL_NODE {
            // Splice the single child into p's place.
            let parent = self.parent_of(p);
            if let Some(node) = self.node_mut(replacement) {
                node.parent = parent;
            }
            if parent == NULL_NODE {
                self.root = replacement;
            } else if self.left_of(parent) == p {
                if let Some(node) = self.node_mut(parent) {
                    node.left = replacement;
                }
            } else if let Some(node) = self.node_mut(parent) {
                node.right = replacement;
            }

            if let Some(node) = self.node_mut(p) {
                node.left = NULL_NODE;
                node.right = NULL_NODE;
                node.parent = NULL_NODE;
            }

            if self.color_of(p).is_black() {
                self.fix_after_deletion(replacement);
            }
        } else if self.parent_of(p) == NULL_NODE {
            self.root = NULL_NODE;
        } else {
            // Black leaf: repair while p is still linked, then detach it.
            if self.color_of(p).is_black() {
                self.fix_after_deletion(p);
            }

            let parent = self.parent_of(p);
            if parent != NULL_NODE {
                if self.left_of(parent) == p {
                    if let Some(node) = self.node_mut(parent) {
                        node.left = NULL_NODE;
                    }
                } else if self.right_of(parent) == p {
                    if let Some(node) = self.node_mut(parent) {
                        node.right = NULL_NODE;
                    }
                }
                if let Some(node) = self.node_mut(p) {
                    node.parent = NULL_NODE;
                }
            }
        }

        p
    }

    /// Double-black repair after removing a black node.
    ///
    /// `x` carries the missing black. A red sibling is rotated into a black
    /// one; a black sibling with black children absorbs the deficit by
    /// recoloring and pushing `x` up; otherwise one or two rotations at the
    /// parent terminate the loop.
    pub(crate) fn fix_after_deletion(&mut self, start: NodeId) {
        let mut x = start;

        while x != self.root && self.color_of(x).is_black() {
            if x == self.left_of(self.parent_of(x)) {
                let mut sib = self.right_of(self.parent_of(x));

                if self.color_of(sib).is_red() {
                    self.set_color(sib, Color::Black);
                    self.set_color(self.parent_of(x), Color::Red);
                    self.rotate_left(self.parent_of(x));
                    sib = self.right_of(self.parent_of(x));
                }

                if self.color_of(self.left_of(sib)).is_black()
                    && self.color_of(self.right_of(sib)).is_black()
                {
                    self.set_color(sib, Color::Red);
                    x = self.parent_of(x);
                } else {
                    if self.color_of(self.right_of(sib)).is_black() {
                        self.set_color(self.left_of(sib), Color::Black);
                        self.set_color(sib, Color::Red);
                        self.rotate_right(sib);
                        sib = self.right_of(self.parent_of(x));
                    }
                    let parent_color = self.color_of(self.parent_of(x));
                    self.set_color(sib, parent_color);
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(self.right_of(sib), Color::Black);
                    self.rotate_left(self.parent_of(x));
                    x = self.root;
                }
            } else {
                let mut sib = self.left_of(self.parent_of(x));

                if self.color_of(sib).is_red() {
                    self.set_color(sib, Color::Black);
                    self.set_color(self.parent_of(x), Color::Red);
                    self.rotate_right(self.parent_of(x));
                    sib = self.left_of(self.parent_of(x));
                }

                if self.color_of(self.right_of(sib)).is_black()
                    && self.color_of(self.left_of(sib)).is_black()
                {
                    self.set_color(sib, Color::Red);
                    x = self.parent_of(x);
                } else {
                    if self.color_of(self.left_of(sib)).is_black() {
                        self.set_color(self.right_of(sib), Color::Black);
                        self.set_color(sib, Color::Red);
                        self.rotate_left(sib);
                        sib = self.left_of(self.parent_of(x));
                    }
                    let parent_color = self.color_of(self.parent_of(x));
                    self.set_color(sib, parent_color);
                    self.set_color(self.parent_of(x), Color::Black);
                    self.set_color(self.left_of(sib), Color::Black);
                    self.rotate_right(self.parent_of(x));
                    x = self.root;
                }
            }
        }

        self.set_color(x, Color::Black);
    }
}
