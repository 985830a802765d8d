//! The unit of storage in a [`Tree`][crate::Tree].
//!
//! A `Node` owns its value and both of its children. There are no parent
//! pointers, so replacing a child drops the whole subtree that used to hang
//! there.

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a single value and up to two children. Every value in the
/// left subtree is less than `value` and every value in the right subtree is
/// greater.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Constructs a leaf `Node` holding `value`.
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    /// A leaf has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        height(Some(self))
    }

    /// Whether, for every node in this subtree, the heights of its two
    /// children differ by at most one.
    pub fn is_balanced(&self) -> bool {
        checked_height(Some(self)).is_some()
    }
}

/// Height of a possibly absent subtree. An absent subtree has a height of -1
/// so that a leaf, with two absent children, has a height of 0.
///
/// # Examples
///
/// ```
/// use bst::{node, Tree};
///
/// let tree: Tree<i32> = Tree::new();
/// assert_eq!(node::height(tree.root()), -1);
///
/// let tree = Tree::build([7]);
/// assert_eq!(node::height(tree.root()), 0);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    fold_heights(node, |_, _| true).unwrap_or(-1)
}

/// Returns the height of the subtree if every node in it is balanced, `None`
/// as soon as an unbalanced node is found.
pub(crate) fn checked_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    fold_heights(node, |left, right| (left - right).abs() <= 1)
}

/// Computes heights bottom-up without recursing, so skewed subtrees of any
/// depth are fine. `accept` sees the heights of each node's left and right
/// children; the fold stops with `None` when it returns `false`.
fn fold_heights<T, F>(node: Option<&Node<T>>, mut accept: F) -> Option<isize>
where
    F: FnMut(isize, isize) -> bool,
{
    // Node, right, left order, so reading it backwards visits both
    // subtrees of a node before the node itself.
    let mut order = Vec::new();
    let mut pending: Vec<&Node<T>> = node.into_iter().collect();
    while let Some(n) = pending.pop() {
        order.push(n);
        pending.extend(n.left());
        pending.extend(n.right());
    }

    // The right child's height is on top of the left child's.
    let mut heights: Vec<isize> = Vec::new();
    for n in order.into_iter().rev() {
        let right = if n.right.is_some() { heights.pop()? } else { -1 };
        let left = if n.left.is_some() { heights.pop()? } else { -1 };
        if !accept(left, right) {
            return None;
        }
        heights.push(1 + left.max(right));
    }

    Some(heights.pop().unwrap_or(-1))
}
