//! This crate exposes an ordered binary tree of distinct values along with a
//! self-balancing (AVL) variant built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has two child trees, either of which may be empty. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for values in the tree takes `O(height)` comparisons (where
//! `height` is the number of `Node`s on the longest path from the root down).
//! A plain [`Bst`] built from sorted input degenerates into a chain whose
//! height equals its size. An [`AvlTree`] rotates nodes after every mutation
//! so that the two subtrees of every `Node` differ in height by at most one,
//! keeping the height within `O(lg N)` where `N` is the number of values.
//!
//! ## Layers
//!
//! - [`Tree`] and [`Node`] are the bare shape with no ordering rules.
//! - [`OrderedTree`] adds the ordering rules, the queries and traversals, and
//!   the `add`/`delete` algorithms. It runs a [`Balance`] strategy on every
//!   node rebuilt by a mutation.
//! - [`Unbalanced`] and [`Avl`] are the two strategies; [`Bst`] and
//!   [`AvlTree`] name the resulting trees.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{AvlTree, Bst};
//!
//! let bst: Bst<_> = (1..=3).collect();
//! let avl: AvlTree<_> = (1..=3).collect();
//!
//! assert_eq!(bst.preorder(), vec![&1, &2, &3]);
//! assert_eq!(avl.preorder(), vec![&2, &1, &3]);
//! assert_eq!(bst.inorder(), avl.inorder());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
pub mod ordered;
pub mod tree;

pub use avl::{Avl, AvlTree};
pub use error::Error;
pub use ordered::{Balance, Bst, OrderedTree, Unbalanced};
pub use tree::{Node, Tree};
