//! This crate exposes a Binary Search Tree (BST) that is built balanced from
//! any collection and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). A tree built from a
//! sorted sequence by always picking the middle value as the root has a
//! height of `O(lg N)`. Inserting and deleting do not preserve that bound, so
//! [`Tree::rebalance`] rebuilds the tree from its sorted values.
//!
//! ## Example
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 3, 1]);
//!
//! assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
//! assert_eq!(tree.height(), 2);
//!
//! tree.insert(4);
//! assert_eq!(tree.depth_of(&4), Some(2));
//!
//! tree.delete(&5);
//! assert!(!tree.contains(&5));
//! ```

#![deny(missing_docs)]

pub mod node;
pub mod render;
pub mod traversal;
pub mod tree;

pub use node::Node;
pub use traversal::Order;
pub use tree::Tree;

#[cfg(test)]
mod test;
