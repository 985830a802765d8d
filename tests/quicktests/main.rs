mod tree;

use quickcheck::{Arbitrary, Gen};

/// Operations applied to both a tree and a model set.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Remove the T from the data structure
    Delete(T),
    /// Rebuild the tree balanced
    Rebalance,
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Weighted the same as the crate's own fuzzer so trees grow and shrink
    /// between rebalances.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Rebalance,
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
