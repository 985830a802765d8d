//! The owning [`Tree`] and its structural algorithms.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! // Duplicates are dropped and the tree is built balanced.
//! let mut tree = Tree::build([5, 3, 8, 3, 1]);
//! assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
//! assert!(tree.is_balanced());
//!
//! // Inserting never rebalances, so ascending inserts skew the tree.
//! for x in [150, 160, 170] {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder(), [&1, &3, &5, &8, &150, &160, &170]);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::node::{self, Link, Node};

/// A Binary Search Tree over distinct values. It is built height-balanced
/// from any collection but does not balance itself on `insert` or `delete`;
/// call [`rebalance`][Tree::rebalance] to restore the balance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A skewed tree is as deep as it is long, so children are detached and
// dropped one at a time rather than by the recursive `Box` drop.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut n) = pending.pop() {
            pending.extend(n.left.take());
            pending.extend(n.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The height of the root, or -1 for an empty tree.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Whether every node's children differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        node::checked_height(self.root()).is_some()
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree from `values`. The values are sorted and
    /// duplicates are dropped before the tree is built so every level is as
    /// full as it can be.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build(vec![4, 2, 2, 1, 3]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let received = values.len();
        values.sort_unstable();
        values.dedup();
        log::debug!(
            "building tree from {} values ({} distinct)",
            received,
            values.len()
        );

        Self::from_sorted(values)
    }

    /// Builds from values that are already sorted and distinct.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let root = build_balanced(len, &mut values.into_iter());
        Self { root, len }
    }

    /// Finds the node holding `value`. If no node has the value, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| n.value()), Some(&2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        find(self.root(), value)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(&current.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(&current.value)
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree as it
    /// was, if the value is already present. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let link = locate(&mut self.root, &value);
        let inserted = link.is_none();
        if inserted {
            *link = Some(Box::new(Node::leaf(value)));
            self.len += 1;
        }
        log::trace!("insert: inserted = {}, len = {}", inserted, self.len);

        inserted
    }

    /// Deletes `value` from the tree and returns it. If the tree does not
    /// contain the value, nothing happens.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// which is then removed from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 3, 5, 8, 10]);
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.delete(&5), None);
    /// assert_eq!(tree.inorder(), [&1, &3, &8, &10]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let link = locate(&mut self.root, value);
        let deleted = link.take().map(|n| {
            let (replacement, deleted) = delete_node(n);
            *link = replacement;
            deleted
        });
        if deleted.is_some() {
            self.len -= 1;
        }
        log::trace!(
            "delete: found = {}, len = {}",
            deleted.is_some(),
            self.len
        );

        deleted
    }

    /// The number of edges from the root to `node`. The node is located by
    /// comparing values from the root, so any node holding an equal value
    /// gives the same answer. Returns `None` if no such value is stored.
    pub fn depth(&self, node: &Node<T>) -> Option<usize> {
        self.depth_of(&node.value)
    }

    /// The number of edges from the root to the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth_of(&2), Some(0));
    /// assert_eq!(tree.depth_of(&3), Some(1));
    /// assert_eq!(tree.depth_of(&4), None);
    /// ```
    pub fn depth_of(&self, value: &T) -> Option<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(n) = current {
            current = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => n.right(),
            };
            depth += 1;
        }

        None
    }

    /// Rebuilds the tree from its sorted values so that it is balanced again.
    /// Rebalancing a balanced tree rebuilds the same shape.
    pub fn rebalance(&mut self) {
        if self.is_empty() {
            return;
        }
        let before = self.height();
        let tree = mem::take(self);
        *self = Self::from_sorted(tree.into_iter().collect());
        log::debug!(
            "rebalanced {} values: height {} -> {}",
            self.len,
            before,
            self.height()
        );
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Builds a balanced subtree out of the next `len` values. The middle value
/// becomes the root, the `len / 2` values before it the left subtree and the
/// rest the right subtree.
fn build_balanced<T>(len: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_balanced(mid, values);
    let value = values.next()?;
    let right = build_balanced(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}

fn find<'a, T: Ord>(mut node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>> {
    while let Some(n) = node {
        node = match value.cmp(&n.value) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right(),
        };
    }

    None
}

/// Walks down from `link` to the link holding `value`, or to the empty link
/// where `value` would be inserted.
fn locate<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(n) => value.cmp(&n.value),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(n)) => &mut n.left,
            (Ordering::Greater, Some(n)) => &mut n.right,
            (_, found) => return found,
        };
    }
}

/// Removes `n` from its subtree. Returns the new subtree root and the removed
/// value.
fn delete_node<T>(mut n: Box<Node<T>>) -> (Link<T>, T) {
    if n.left.is_none() {
        return (n.right.take(), n.value);
    }
    // Promote the in-order successor: the smallest value on the right.
    let mut right = n.right.take();
    match delete_min(&mut right) {
        None => (n.left.take(), n.value),
        Some(successor) => {
            n.right = right;
            let deleted = mem::replace(&mut n.value, successor);
            (Some(n), deleted)
        }
    }
}

/// Removes the smallest node below `link`, which never has a left child, and
/// returns its value.
fn delete_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let Node { value, right, .. } = *link.take()?;
    *link = right;

    Some(value)
}
