use avl_bst::Bst;

use std::collections::{BTreeSet, HashSet};

use crate::{assert_layout, do_ops, Op};

fn bst(xs: &[i8]) -> Bst<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Bst::new(), &mut set, |tree| {
        assert_eq!(tree.check_invariants(), Ok(()));
    });

    tree.size() == set.len() && set.iter().all(|x| tree.is_member(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);

    xs.iter().all(|x| tree.is_member(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = bst(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.is_member(x))
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);

    tree.inorder().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn traversals_agree(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);
    let mut preorder = tree.preorder();
    let mut postorder = tree.postorder();
    preorder.sort();
    postorder.sort();

    preorder == tree.inorder() && postorder == tree.inorder()
}

#[quickcheck]
fn add_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let tree = bst(&xs).add(x);
    let size = tree.size();

    tree.add(x).size() == size
}

#[quickcheck]
fn delete_missing_is_noop(xs: Vec<i8>, x: i8) -> bool {
    let tree = bst(&xs);
    if tree.is_member(&x) {
        return true;
    }

    tree.clone().delete(&x) == tree
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = bst(&xs);
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have added the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.is_member(x))
        && still_present.iter().all(|x| tree.is_member(x))
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn height_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);

    if tree.is_empty() {
        tree.height() == 0
    } else {
        1 <= tree.height() && tree.height() <= tree.size()
    }
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}

#[quickcheck]
fn layout_of_shallow_trees(xs: Vec<i8>) -> bool {
    let tree = bst(&xs);
    if tree.height() <= 16 {
        assert_layout(&tree);
    }
    true
}
