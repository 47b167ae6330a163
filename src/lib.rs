//! An unbalanced binary search tree.
//!
//! [`BinaryTree`] keeps its elements ordered by a [`Comparator`]: smaller
//! elements to the left of a node, greater or equal ones to the right. Equal
//! elements are allowed and come back out in insertion order. There is no
//! rebalancing, so the shape of the tree (and the cost of every operation)
//! follows the insertion order.
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree: BinaryTree<i32> = [5, 3, 8, 1, 4, 7, 9].into();
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! tree.remove(&5);
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.to_string(), "1 3 4 7 8 9");
//! ```
//!
//! Walks that would naturally recurse (copy, drop, size, height and the
//! depth-first traversals) use explicit stacks, so even a fully degenerate
//! tree is safe to use.

pub mod tree_base;

pub use tree_base::{
    iter::{Cursor, IntoIter, Iter, ReverseCursor, TreeCursor},
    tree::Tree,
    tree_stats::TreeStats,
    tree_traits::{Comparator, DefaultComparator, ReverseComparator},
    DefaultTree as BinaryTree,
};
