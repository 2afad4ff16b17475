//! Node access and pointer bookkeeping for TreeMap.
//!
//! All helpers here are nil-safe: passing `NULL_NODE` reads as an absent
//! black leaf, so the rebalancing code never special-cases missing children.

use crate::types::{Color, TreeMap, TreeNode, NodeId, NULL_NODE};

impl<K, V> TreeMap<K, V> {
    // ============================================================================
    // NIL-SAFE ACCESSORS
    // ============================================================================

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Option<&TreeNode<K, V>> {
        self.arena.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<K, V>> {
        self.arena.get_mut(id)
    }

    /// Color of a node; an absent node is a black leaf.
    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.node(id).map_or(Color::Black, |n| n.color)
    }

    /// Recolor a node. No-op on `NULL_NODE`.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.node_mut(id) {
            node.color = color;
        }
    }

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.right)
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.parent)
    }

    #[inline]
    pub(crate) fn grandparent_of(&self, id: NodeId) -> NodeId {
        self.parent_of(self.parent_of(id))
    }

    /// Key/value pair of a node, if it exists.
    #[inline]
    pub(crate) fn entry_of(&self, id: NodeId) -> Option<(&K, &V)> {
        self.node(id).map(|n| (&n.key, &n.value))
    }

    // ============================================================================
    // IN-ORDER NAVIGATION
    // ============================================================================

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn min_node(&self, id: NodeId) -> NodeId {
        let mut current = id;
        if current != NULL_NODE {
            while self.left_of(current) != NULL_NODE {
                current = self.left_of(current);
            }
        }
        current
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn max_node(&self, id: NodeId) -> NodeId {
        let mut current = id;
        if current != NULL_NODE {
            while self.right_of(current) != NULL_NODE {
                current = self.right_of(current);
            }
        }
        current
    }

    /// In-order successor: leftmost of the right subtree, or the first
    /// ancestor reached through a left-child step.
    pub(crate) fn successor_of(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }

        let right = self.right_of(id);
        if right != NULL_NODE {
            return self.min_node(right);
        }

        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && child == self.right_of(parent) {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    /// In-order predecessor, mirror of [`successor_of`](Self::successor_of).
    pub(crate) fn predecessor_of(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }

        let left = self.left_of(id);
        if left != NULL_NODE {
            return self.max_node(left);
        }

        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && child == self.left_of(parent) {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// Rotate the subtree at `p` to the left. No-op on `NULL_NODE`.
    pub(crate) fn rotate_left(&mut self, p: NodeId) {
        if p == NULL_NODE {
            return;
        }

        let r = self.right_of(p);
        let r_left = self.left_of(r);

        if let Some(node) = self.node_mut(p) {
            node.right = r_left;
        }
        if let Some(node) = self.node_mut(r_left) {
            node.parent = p;
        }

        let p_parent = self.parent_of(p);
        if let Some(node) = self.node_mut(r) {
            node.parent = p_parent;
        }
        if p_parent == NULL_NODE {
            self.root = r;
        } else if self.left_of(p_parent) == p {
            if let Some(node) = self.node_mut(p_parent) {
                node.left = r;
            }
        } else if let Some(node) = self.node_mut(p_parent) {
            node.right = r;
        }

        if let Some(node) = self.node_mut(r) {
            node.left = p;
        }
        if let Some(node) = self.node_mut(p) {
            node.parent = r;
        }
    }

    /// Rotate the subtree at `p` to the right. No-op on `NULL_NODE`.
    pub(crate) fn rotate_right(&mut self, p: NodeId) {
        if p == NULL_NODE {
            return;
        }

        let l = self.left_of(p);
        let l_right = self.right_of(l);

        if let Some(node) = self.node_mut(p) {
            node.left = l_right;
        }
        if let Some(node) = self.node_mut(l_right) {
            node.parent = p;
        }

        let p_parent = self.parent_of(p);
        if let Some(node) = self.node_mut(l) {
            node.parent = p_parent;
        }
        if p_parent == NULL_NODE {
            self.root = l;
        } else if self.right_of(p_parent) == p {
            if let Some(node) = self.node_mut(p_parent) {
                node.right = l;
            }
        } else if let Some(node) = self.node_mut(p_parent) {
            node.left = l;
        }

        if let Some(node) = self.node_mut(l) {
            node.right = p;
        }
        if let Some(node) = self.node_mut(p) {
            node.parent = l;
        }
    }
}
