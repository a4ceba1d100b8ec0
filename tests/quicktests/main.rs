//! Randomized checks of both tree flavours against `std::collections::BTreeSet`.

#[macro_use]
extern crate quickcheck_macros;

mod ordered;

use std::collections::BTreeSet;

use avl_bst::{Balance, OrderedTree};
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the value to the data structure
    Add(T),
    /// Delete the value from the data structure
    Delete(T),
    /// Compare in-order traversals
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and deletes we have the same values in both. `after_each` is run
/// on the tree after every operation.
pub(crate) fn do_ops<T, B>(
    ops: &[Op<T>],
    mut tree: OrderedTree<T, B>,
    set: &mut BTreeSet<T>,
    after_each: impl Fn(&OrderedTree<T, B>),
) -> OrderedTree<T, B>
where
    T: Ord + Clone + std::fmt::Debug,
    B: Balance,
{
    let _ = pretty_env_logger::try_init();
    for op in ops {
        match op {
            Op::Add(x) => {
                tree = tree.add(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                tree = tree.delete(x);
                set.remove(x);
            }
            Op::Traverse => {
                assert_eq!(tree.inorder(), set.iter().collect::<Vec<_>>());
            }
        }
        after_each(&tree);
    }

    tree
}

/// Checks that a breadth-first layout is shaped like a complete binary tree of the right height
/// and that every value sits on the correct side of its parent.
pub(crate) fn assert_layout<T, B>(tree: &OrderedTree<T, B>)
where
    T: Ord + std::fmt::Debug,
{
    let layout = tree.bfs_with_placeholders().unwrap();

    assert_eq!(layout.len(), (1usize << tree.height()) - 1);
    assert_eq!(layout.iter().flatten().count(), tree.size());
    assert_eq!(layout.first().copied().flatten(), tree.root().value());

    for (i, slot) in layout.iter().enumerate().skip(1) {
        let index = i + 1;
        if let Some(value) = slot {
            let parent = layout[index / 2 - 1].expect("populated slot has a parent");
            if index % 2 == 0 {
                assert!(*value < parent);
            } else {
                assert!(*value > parent);
            }
        }
    }
}
