extern crate quickcheck;
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};


/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the key into the tree
    Insert(i8),
    /// Remove the key from the tree
    Remove(i8),
    /// Compare the inorder traversal against the model
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Keys are `i8`s so
    /// that random inserts and removes hit the same keys often.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
