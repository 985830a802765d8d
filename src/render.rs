//! Rendering a [`Tree`] sideways, with the root on the left and larger
//! values towards the top.
//!
//! [`walk`] and [`lines`] describe each node by its depth and the side it
//! hangs from, leaving the drawing to the caller. [`pretty`] draws the
//! usual connector diagram:
//!
//! ```
//! use bst::{render, Tree};
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//! let expected = "\
//! │   ┌── 5
//! │   │   └── 4
//! └── 3
//!     └── 2
//!         └── 1
//! ";
//! assert_eq!(render::pretty(&tree), expected);
//! ```

use std::fmt::{self, Write as _};
use std::io;

use crate::node::Node;
use crate::tree::Tree;

/// Which side of its parent a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    /// The node has no parent.
    Root,
    /// The node is its parent's left child.
    Left,
    /// The node is its parent's right child.
    Right,
}

/// One node of a rendered tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line<'a, T> {
    /// The node's value.
    pub value: &'a T,
    /// Edges between the root and the node.
    pub depth: usize,
    /// The side of its parent the node hangs from.
    pub branch: Branch,
}

/// Calls `visit` for every node, top line first: the right subtree, then the
/// node itself, then the left subtree.
pub fn walk<'a, T, F>(tree: &'a Tree<T>, mut visit: F)
where
    F: FnMut(Line<'a, T>),
{
    right_to_left(
        tree.root(),
        (0, Branch::Root),
        |&(depth, _), branch| (depth + 1, branch),
        |node, (depth, branch)| {
            visit(Line {
                value: node.value(),
                depth,
                branch,
            })
        },
    );
}

/// The lines [`walk`] would visit, top to bottom.
pub fn lines<T>(tree: &Tree<T>) -> Vec<Line<'_, T>> {
    let mut lines = Vec::with_capacity(tree.len());
    walk(tree, |line| lines.push(line));
    lines
}

/// Draws the tree with box-drawing connectors, one value per line. An empty
/// tree draws as an empty string.
pub fn pretty<T: fmt::Display>(tree: &Tree<T>) -> String {
    let mut output = String::new();
    // Each node carries its line prefix and whether it is drawn as a left
    // child. The root is drawn like a left child so nothing hangs above it.
    right_to_left(
        tree.root(),
        (String::new(), true),
        |(prefix, is_left), branch| {
            let segment = match (branch, *is_left) {
                (Branch::Left, true) | (Branch::Right, false) | (Branch::Root, _) => "    ",
                (Branch::Left, false) | (Branch::Right, true) => "│   ",
            };
            (format!("{}{}", prefix, segment), branch != Branch::Right)
        },
        |node, (prefix, is_left)| {
            let connector = if is_left { "└── " } else { "┌── " };
            // Writing into a `String` cannot fail.
            let _ = writeln!(output, "{}{}{}", prefix, connector, node.value());
        },
    );
    output
}

/// Writes [`pretty`]'s drawing to `writer`.
pub fn write_pretty<T, W>(tree: &Tree<T>, mut writer: W) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write,
{
    writer.write_all(pretty(tree).as_bytes())?;
    writer.flush()
}

enum Step<'a, T, S> {
    Expand(&'a Node<T>, S),
    Visit(&'a Node<T>, S),
}

/// Visits the right subtree, the node, then the left subtree, using an
/// explicit stack so skewed trees of any depth are fine. Every node carries a
/// state derived from its parent's by `child`.
fn right_to_left<'a, T, S, C, V>(root: Option<&'a Node<T>>, state: S, child: C, mut visit: V)
where
    C: Fn(&S, Branch) -> S,
    V: FnMut(&'a Node<T>, S),
{
    let mut stack: Vec<Step<'a, T, S>> = root
        .map(|n| Step::Expand(n, state))
        .into_iter()
        .collect();
    while let Some(step) = stack.pop() {
        match step {
            Step::Expand(n, state) => {
                if let Some(left) = n.left() {
                    stack.push(Step::Expand(left, child(&state, Branch::Left)));
                }
                let right = n.right().map(|right| (right, child(&state, Branch::Right)));
                stack.push(Step::Visit(n, state));
                if let Some((right, state)) = right {
                    stack.push(Step::Expand(right, state));
                }
            }
            Step::Visit(n, state) => visit(n, state),
        }
    }
}
