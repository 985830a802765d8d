use bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck::TestResult;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(bst.delete(x), set.take(x));
            }
            Op::Rebalance => bst.rebalance(),
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
                assert_eq!(bst.len(), set.len());
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|x| tree.contains(x)) && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());
        let expected: BTreeSet<i8> = xs.into_iter().collect();

        tree.inorder().into_iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn balanced_after_rebalance(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.extend(xs);
        tree.rebalance();

        tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.extend(xs);
        tree.rebalance();
        let once = tree.clone();
        tree.rebalance();

        tree == once
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());

        xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::build(xs.clone());
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn delete_missing_changes_nothing(xs: Vec<i8>, x: i8) -> TestResult {
        let mut tree = Tree::build(xs);
        if tree.contains(&x) {
            return TestResult::discard();
        }
        let before = tree.clone();
        tree.delete(&x);

        TestResult::from_bool(tree == before)
    }
}

quickcheck::quickcheck! {
    fn delete_then_insert_restores_values(xs: Vec<i8>) -> TestResult {
        let mut tree = Tree::build(xs);
        let root = match tree.root() {
            Some(root) => *root.value(),
            None => return TestResult::discard(),
        };
        let before: Vec<i8> = tree.iter().copied().collect();

        tree.delete(&root);
        tree.insert(root);

        TestResult::from_bool(tree.iter().copied().eq(before))
    }
}

quickcheck::quickcheck! {
    fn depth_is_bounded_by_height(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs);
        let height = tree.height();

        tree.iter()
            .all(|x| tree.depth_of(x).map_or(false, |d| d as isize <= height))
    }
}
