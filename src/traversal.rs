//! Traversals of a [`Tree`].
//!
//! Each order comes in two forms: a method collecting the values into a
//! `Vec` and [`Tree::walk`], which hands every node to a visitor instead.
//! Every call walks the tree from the root again.
//!
//! # Examples
//!
//! ```
//! use bst::{Order, Tree};
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.level_order(), [&3, &2, &5, &1, &4]);
//! assert_eq!(tree.preorder(), [&3, &2, &1, &5, &4]);
//! assert_eq!(tree.inorder(), [&1, &2, &3, &4, &5]);
//! assert_eq!(tree.postorder(), [&1, &2, &4, &5, &3]);
//!
//! let mut leaves = 0;
//! tree.walk(Order::Postorder, |node| {
//!     if node.is_leaf() {
//!         leaves += 1;
//!     }
//! });
//! assert_eq!(leaves, 2);
//! ```

use std::collections::VecDeque;

use crate::node::{Link, Node};
use crate::tree::Tree;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth first, left to right within each level.
    LevelOrder,
    /// A node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. This visits
    /// values in ascending order.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl<T> Tree<T> {
    /// Calls `visit` on every node in the given order.
    pub fn walk<'a, F>(&'a self, order: Order, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        match order {
            Order::LevelOrder => level_order(self.root(), &mut visit),
            Order::Preorder => preorder(self.root(), &mut visit),
            Order::Inorder => inorder(self.root(), &mut visit),
            Order::Postorder => postorder(self.root(), &mut visit),
        }
    }

    /// The values in the given order.
    pub fn values(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.walk(order, |n| values.push(&n.value));
        values
    }

    /// The values level by level, starting at the root.
    pub fn level_order(&self) -> Vec<&T> {
        self.values(Order::LevelOrder)
    }

    /// The values with every node before its subtrees.
    pub fn preorder(&self) -> Vec<&T> {
        self.values(Order::Preorder)
    }

    /// The values in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.values(Order::Inorder)
    }

    /// The values with every node after its subtrees.
    pub fn postorder(&self) -> Vec<&T> {
        self.values(Order::Postorder)
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }
}

fn level_order<'a, T, F>(root: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(n) = queue.pop_front() {
        visit(n);
        queue.extend(n.left());
        queue.extend(n.right());
    }
}

fn preorder<'a, T, F>(root: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    let mut pending: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(n) = pending.pop() {
        visit(n);
        pending.extend(n.right());
        pending.extend(n.left());
    }
}

fn inorder<'a, T, F>(root: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    let mut iter = Iter { stack: Vec::new() };
    iter.push_left_spine(root);
    while let Some(n) = iter.stack.pop() {
        iter.push_left_spine(n.right());
        visit(n);
    }
}

fn postorder<'a, T, F>(root: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    // Node, right, left reversed is left, right, node.
    let mut order = Vec::new();
    let mut pending: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(n) = pending.pop() {
        order.push(n);
        pending.extend(n.left());
        pending.extend(n.right());
    }
    for n in order.into_iter().rev() {
        visit(n);
    }
}

/// A borrowing iterator over a [`Tree`]'s values in ascending order.
///
/// Created by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    // Nodes whose left subtrees have been visited, deepest last.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right());
        Some(&n.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over a [`Tree`]'s values in ascending order.
///
/// Created by `Tree::into_iter`. The tree is flattened up front.
#[derive(Debug)]
pub struct IntoIter<T>(std::vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut values = Vec::with_capacity(self.len());
        into_sorted(self.root.take(), &mut values);
        IntoIter(values.into_iter())
    }
}

fn into_sorted<T>(mut link: Link<T>, values: &mut Vec<T>) {
    // Nodes whose left subtrees are still to be emitted, deepest last.
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    loop {
        while let Some(mut n) = link {
            link = n.left.take();
            stack.push(n);
        }
        match stack.pop() {
            Some(n) => {
                let Node { value, right, .. } = *n;
                values.push(value);
                link = right;
            }
            None => break,
        }
    }
}
