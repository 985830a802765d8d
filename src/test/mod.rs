
use crate::node::Node;
use crate::tree::Tree;

/// A right-leaning chain of `0..len`, the shape ascending inserts leave
/// behind. Built directly so the setup is linear in `len`.
pub(crate) fn right_chain(len: i32) -> Tree<i32> {
    let root = (0..len).rev().fold(None, |right, value| {
        Some(Box::new(Node {
            value,
            left: None,
            right,
        }))
    });
    Tree {
        root,
        len: len as usize,
    }
}
