//! A self-balancing (AVL) flavour of [`OrderedTree`]. After every `add` or `delete` each node
//! on the mutated path is rebalanced as the recursion unwinds, so no node's subtrees ever differ
//! in height by more than one.
//!
//! See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
//!
//! # Examples
//!
//! ```
//! use avl_bst::AvlTree;
//!
//! // Ascending input would build a chain in a plain `Bst`.
//! let tree: AvlTree<_> = (1..=7).collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
//! assert!(tree.check_invariants().is_ok());
//! ```

use log::trace;

use crate::error::Error;
use crate::ordered::{Balance, OrderedTree};
use crate::tree::{Node, Tree};

/// Keeps every node's balance factor within `-1..=1` using rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avl;

/// A binary search tree rebalanced with [`Avl`] rotations.
pub type AvlTree<T> = OrderedTree<T, Avl>;

impl Balance for Avl {
    fn balance<T>(tree: Tree<T>) -> Tree<T> {
        balance(tree)
    }

    fn check<T>(tree: &Tree<T>) -> Result<(), Error> {
        match tree.as_node() {
            None => Ok(()),
            Some(node) => {
                let balance_factor = node.balance_factor();
                if balance_factor.abs() > 1 {
                    return Err(Error::Unbalanced { balance_factor });
                }
                Self::check(node.left())?;
                Self::check(node.right())
            }
        }
    }
}

/// Left subtree height minus right subtree height. An empty tree counts as perfectly balanced.
pub fn balance_factor<T>(tree: &Tree<T>) -> isize {
    tree.as_node().map_or(0, Node::balance_factor)
}

/// Rebalances around the root of `tree`, applying whichever rotation the root and its taller
/// child call for, and returns the new root.
///
/// A right heavy root (balance factor `<= -2`) is rotated left, twice if its right child leans
/// left. A left heavy root (`>= 2`) is rotated right, twice if its left child leans right.
pub fn balance<T>(tree: Tree<T>) -> Tree<T> {
    let factor = balance_factor(&tree);
    if factor <= -2 {
        if tree.right().map_or(0, balance_factor) >= 1 {
            trace!("balance factor {}: double left rotation", factor);
            double_left_rotate(tree)
        } else {
            trace!("balance factor {}: single left rotation", factor);
            single_left_rotate(tree)
        }
    } else if factor >= 2 {
        if tree.left().map_or(0, balance_factor) <= -1 {
            trace!("balance factor {}: double right rotation", factor);
            double_right_rotate(tree)
        } else {
            trace!("balance factor {}: single right rotation", factor);
            single_right_rotate(tree)
        }
    } else {
        tree
    }
}

/// Rotates the right child up to become the root. Trees without a right child are returned
/// unchanged.
///
/// ```text
///   old_root                  new_root
///    /    \                   /     \
///   x   new_root  rotate ->  old_root  z
///        /  \                /  \
///       y    z              x    y
/// ```
pub fn single_left_rotate<T>(tree: Tree<T>) -> Tree<T> {
    match tree {
        Tree::Node(mut old_root) => match old_root.take_right() {
            Tree::Node(mut new_root) => {
                old_root.set_right(new_root.take_left());
                new_root.set_left(Tree::Node(old_root));
                Tree::Node(new_root)
            }
            Tree::Empty => Tree::Node(old_root),
        },
        Tree::Empty => Tree::Empty,
    }
}

/// Rotates the left child up to become the root. Trees without a left child are returned
/// unchanged.
///
/// ```text
///      old_root            new_root
///       /    \              /    \
///   new_root  z   rotate ->  x   old_root
///    /  \                         /  \
///   x    y                       y    z
/// ```
pub fn single_right_rotate<T>(tree: Tree<T>) -> Tree<T> {
    match tree {
        Tree::Node(mut old_root) => match old_root.take_left() {
            Tree::Node(mut new_root) => {
                old_root.set_left(new_root.take_right());
                new_root.set_right(Tree::Node(old_root));
                Tree::Node(new_root)
            }
            Tree::Empty => Tree::Node(old_root),
        },
        Tree::Empty => Tree::Empty,
    }
}

/// Rotates the right child right, then the root left. Used when the right child leans left.
pub fn double_left_rotate<T>(tree: Tree<T>) -> Tree<T> {
    match tree {
        Tree::Node(mut root) => {
            root.update_right(single_right_rotate);
            single_left_rotate(Tree::Node(root))
        }
        Tree::Empty => Tree::Empty,
    }
}

/// Rotates the left child left, then the root right. Used when the left child leans right.
pub fn double_right_rotate<T>(tree: Tree<T>) -> Tree<T> {
    match tree {
        Tree::Node(mut root) => {
            root.update_left(single_left_rotate);
            single_right_rotate(Tree::Node(root))
        }
        Tree::Empty => Tree::Empty,
    }
}
