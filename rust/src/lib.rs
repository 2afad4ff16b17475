//! An ordered map backed by a red-black tree.
//!
//! [`TreeMap`] keeps its entries sorted by key at all times, under either
//! the key type's natural order or a caller-supplied comparator. Nodes live
//! in an index-based arena, so the tree is a single contiguous allocation
//! with `u32` links instead of a web of boxed pointers.
//!
//! Beyond the usual map operations it offers:
//!
//! - **Order queries**: [`floor`](TreeMap::floor) and
//!   [`ceiling`](TreeMap::ceiling) find the nearest entry at or below/above
//!   a key, [`first`](TreeMap::first)/[`last`](TreeMap::last) and
//!   [`pop_first`](TreeMap::pop_first)/[`pop_last`](TreeMap::pop_last) work
//!   the ends.
//! - **Cursors**: [`cursor`](TreeMap::cursor) opens a bidirectional walker
//!   that can remove the entry it stands on and keep iterating from either
//!   neighbor.
//! - **Diagnostics**: [`check_invariants`](TreeMap::check_invariants)
//!   verifies the tree structure and [`graph`](TreeMap::graph) renders it
//!   as text.
//!
//! # Examples
//!
//! ```
//! use treemap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.keys(), [&1, &2, &3]);
//! assert_eq!(map.floor(&2), Some((&2, &"two")));
//! assert_eq!(map.pop_first(), Some((1, "one")));
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

#[cfg(feature = "serde")]
mod serde_support;

pub use arena::{Arena, ArenaStats, NodeId, NULL_NODE};
pub use error::{TreeMapError, TreeResult};
pub use iteration::{Cursor, Iter};
pub use types::{Color, Comparator, TreeMap};
