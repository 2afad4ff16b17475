//! Tree validation and diagnostic rendering for TreeMap.
//!
//! `check_invariants` verifies the red-black and BST properties plus the
//! bookkeeping that ties the tree to its arena. The graph renderers print
//! the tree sideways (right subtree above, left below) for debugging.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{TreeMapError, TreeResult};
use crate::types::{TreeMap, NodeId, NULL_NODE};

// Rendering flags.
pub(crate) const GRAPH_COLOR: u8 = 1;
pub(crate) const GRAPH_ID: u8 = 2;
pub(crate) const GRAPH_VALUE: u8 = 4;

impl<K, V> TreeMap<K, V> {
    // ============================================================================
    // INVARIANT CHECKING
    // ============================================================================

    /// Check that the tree satisfies all structural invariants.
    ///
    /// Returns `true` if the tree is valid. Use
    /// [`check_invariants_detailed`](Self::check_invariants_detailed) for
    /// the specific violation.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check all structural invariants, reporting the first violation.
    ///
    /// Verified properties:
    /// - the root is black and has no parent link
    /// - no red node has a red child
    /// - every root-to-leaf path crosses the same number of black nodes
    /// - keys are in strict comparator order
    /// - every child's parent link points back at its parent
    /// - node count matches both `len` and the arena's allocation count
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.root != NULL_NODE {
            if self.color_of(self.root).is_red() {
                return Err(TreeMapError::corrupted_tree("root", "root is red"));
            }
            if self.parent_of(self.root) != NULL_NODE {
                return Err(TreeMapError::corrupted_tree(
                    "root",
                    "root has a parent link",
                ));
            }
        }

        let (_, count) = self.check_subtree(self.root, None, None)?;

        if count != self.len() {
            return Err(TreeMapError::corrupted_tree(
                "length",
                format!("tree holds {} nodes but len is {}", count, self.len()),
            ));
        }
        if count != self.arena.allocated_count() {
            return Err(TreeMapError::corrupted_tree(
                "arena",
                format!(
                    "tree holds {} nodes but arena has {} allocated",
                    count,
                    self.arena.allocated_count()
                ),
            ));
        }

        Ok(())
    }

    /// Recursive check of one subtree within exclusive key bounds.
    /// Returns (black height, node count).
    fn check_subtree(
        &self,
        id: NodeId,
        low: Option<&K>,
        high: Option<&K>,
    ) -> TreeResult<(usize, usize)> {
        if id == NULL_NODE {
            return Ok((1, 0));
        }

        let node = self.node(id).ok_or_else(|| {
            TreeMapError::corrupted_tree("arena", format!("node {} is not allocated", id))
        })?;

        if node.color.is_red()
            && (self.color_of(node.left).is_red() || self.color_of(node.right).is_red())
        {
            return Err(TreeMapError::corrupted_tree(
                "color",
                format!("red node {} has a red child", id),
            ));
        }

        if let Some(low) = low {
            if (self.compare)(&node.key, low) != Ordering::Greater {
                return Err(TreeMapError::corrupted_tree(
                    "order",
                    format!("node {} is out of order with an ancestor", id),
                ));
            }
        }
        if let Some(high) = high {
            if (self.compare)(&node.key, high) != Ordering::Less {
                return Err(TreeMapError::corrupted_tree(
                    "order",
                    format!("node {} is out of order with an ancestor", id),
                ));
            }
        }

        for child in [node.left, node.right] {
            if child != NULL_NODE && self.parent_of(child) != id {
                return Err(TreeMapError::corrupted_tree(
                    "parent link",
                    format!("child {} does not point back at {}", child, id),
                ));
            }
        }

        let (left_black, left_count) = self.check_subtree(node.left, low, Some(&node.key))?;
        let (right_black, right_count) = self.check_subtree(node.right, Some(&node.key), high)?;

        if left_black != right_black {
            return Err(TreeMapError::corrupted_tree(
                "black height",
                format!(
                    "node {} has black heights {} and {}",
                    id, left_black, right_black
                ),
            ));
        }

        let black = left_black + usize::from(node.color.is_black());
        Ok((black, left_count + right_count + 1))
    }
}

// ============================================================================
// DIAGNOSTIC RENDERING
// ============================================================================

impl<K: fmt::Debug, V: fmt::Debug> TreeMap<K, V> {
    /// Render the tree structure as text, one node per line.
    ///
    /// The right subtree is printed above its parent and the left below, so
    /// the output reads as the tree rotated 90 degrees counter-clockwise.
    /// An empty map renders as `(empty)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let map: TreeMap<_, _> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
    /// print!("{}", map.graph(true));
    /// // │   ┌── 3 => "c"
    /// // └── 2 => "b"
    /// //     └── 1 => "a"
    /// ```
    pub fn graph(&self, show_values: bool) -> String {
        let flags = if show_values { GRAPH_VALUE } else { 0 };
        self.graph_with(flags)
    }

    /// Full rendering with colors and node ids, for debugging the tree
    /// structure itself.
    pub fn debug_graph(&self) -> String {
        self.graph_with(GRAPH_COLOR | GRAPH_ID | GRAPH_VALUE)
    }

    pub(crate) fn graph_with(&self, flags: u8) -> String {
        if self.root == NULL_NODE {
            return "(empty)".to_string();
        }
        let mut out = String::new();
        self.graph_node(self.root, &mut out, "", true, flags);
        out
    }

    fn graph_node(&self, id: NodeId, out: &mut String, prefix: &str, tail: bool, flags: u8) {
        let Some(node) = self.node(id) else {
            return;
        };

        if node.right != NULL_NODE {
            let right_prefix = format!("{}{}", prefix, if tail { "│   " } else { "    " });
            self.graph_node(node.right, out, &right_prefix, false, flags);
        }

        out.push_str(prefix);
        out.push_str(if tail { "└── " } else { "┌── " });
        if flags & GRAPH_COLOR != 0 {
            out.push_str(&format!("({}) ", node.color));
        }
        out.push_str(&format!("{:?}", node.key));
        if flags & GRAPH_ID != 0 {
            out.push_str(&format!(" #{}", id));
        }
        if flags & GRAPH_VALUE != 0 {
            out.push_str(&format!(" => {:?}", node.value));
        }
        out.push('\n');

        if node.left != NULL_NODE {
            let left_prefix = format!("{}{}", prefix, if tail { "    " } else { "│   " });
            self.graph_node(node.left, out, &left_prefix, true, flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, TreeMap};

    #[test]
    fn test_valid_tree_passes() {
        let map: TreeMap<_, _> = (0..64).map(|k| (k, k)).collect();
        assert!(map.check_invariants());
        map.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_empty_tree_passes() {
        let map: TreeMap<i32, ()> = TreeMap::new();
        assert!(map.check_invariants());
    }

    #[test]
    fn test_detects_red_root() {
        let mut map: TreeMap<_, _> = [(1, ())].into_iter().collect();
        map.set_color(map.root, Color::Red);
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("root is red"));
    }

    #[test]
    fn test_detects_length_mismatch() {
        let mut map: TreeMap<_, _> = [(1, ()), (2, ())].into_iter().collect();
        map.len = 5;
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("len is 5"));
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut map: TreeMap<_, _> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
        let child = map.left_of(map.root);
        if let Some(node) = map.node_mut(child) {
            node.parent = NULL_NODE;
        }
        assert!(!map.check_invariants());
    }

    #[test]
    fn test_graph_empty() {
        let map: TreeMap<i32, ()> = TreeMap::new();
        assert_eq!(map.graph(false), "(empty)");
    }

    #[test]
    fn test_graph_shapes() {
        let map: TreeMap<_, _> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();

        let plain = map.graph(false);
        assert_eq!(plain, "│   ┌── 3\n└── 2\n    └── 1\n");

        let valued = map.graph(true);
        assert_eq!(
            valued,
            "│   ┌── 3 => \"c\"\n└── 2 => \"b\"\n    └── 1 => \"a\"\n"
        );

        let full = map.debug_graph();
        assert!(full.contains("(black) 2 #"));
        assert!(full.contains("(red) 1 #"));
        assert!(full.contains("=> \"a\""));
    }
}
