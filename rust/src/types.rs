//! Core types and data structures for TreeMap.
//!
//! This module contains the fundamental data structures and type
//! definitions used throughout the red-black tree implementation.

use std::cmp::Ordering;
use std::fmt;

use crate::arena::Arena;

// Re-exported so the rest of the crate has a single import point.
pub use crate::arena::{NodeId, NULL_NODE};

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Per-instance total order over keys.
///
/// Two maps over the same key type may order differently, so the comparator
/// is stored in the map rather than taken from an `Ord` bound.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// Node color. An absent child reads as `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`].
    ///
    /// [`Red`]: Color::Red
    #[must_use]
    pub(crate) fn is_red(&self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Black`].
    ///
    /// [`Black`]: Color::Black
    #[must_use]
    pub(crate) fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single entry of the tree.
///
/// Neighbor links are arena indices; `NULL_NODE` marks an absent neighbor.
/// The parent link is a non-owning back-reference used for navigation and
/// rebalancing only.
#[derive(Debug)]
pub(crate) struct TreeNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<K, V> TreeNode<K, V> {
    pub(crate) fn new(key: K, value: V, color: Color, parent: NodeId) -> Self {
        Self {
            key,
            value,
            color,
            parent,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }
}

/// An ordered map backed by a red-black tree.
///
/// Keys are kept in the order defined by the map's comparator; iteration,
/// floor/ceiling queries, and first/last access all follow that order.
/// Point operations are O(log n), traversal is O(n).
///
/// # Examples
///
/// ```
/// use treemap::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.insert(3, "c");
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// assert_eq!(map.get(&2), Some(&"b"));
/// assert_eq!(map.keys(), [&1, &2, &3]);
/// ```
///
/// A custom comparator reverses (or otherwise redefines) the order:
///
/// ```
/// use treemap::TreeMap;
///
/// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.insert(1, "a");
/// map.insert(2, "b");
/// assert_eq!(map.keys(), [&2, &1]);
/// ```
pub struct TreeMap<K, V> {
    /// Root of the tree, `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of entries in the map.
    pub(crate) len: usize,
    /// Slot storage for all nodes.
    pub(crate) arena: Arena<TreeNode<K, V>>,
    /// Total order over keys.
    pub(crate) compare: Comparator<K>,
}

impl<K, V> TreeMap<K, V> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all entries from the map.
    pub fn clear(&mut self) {
        self.root = NULL_NODE;
        self.len = 0;
        self.arena.clear();
    }

    /// Allocation statistics of the backing arena.
    pub fn arena_stats(&self) -> crate::arena::ArenaStats {
        self.arena.stats()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
