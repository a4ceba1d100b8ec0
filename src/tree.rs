//! The shape every tree in this crate is built from: a [`Tree`] is either
//! [`Empty`][Tree::Empty] or a boxed [`Node`] holding a value and two child trees.
//!
//! Nothing here knows about ordering or balance. Those invariants belong to
//! [`OrderedTree`][crate::OrderedTree] and the [`Balance`][crate::Balance] strategies.
//!
//! # Examples
//!
//! ```
//! use avl_bst::Tree;
//!
//! let tree = Tree::cons(2, Tree::leaf(1), Tree::leaf(3));
//!
//! assert_eq!(tree.value(), Some(&2));
//! assert_eq!(tree.left().and_then(Tree::value), Some(&1));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.right().and_then(Tree::left), Some(&Tree::Empty));
//! ```

use std::mem;

/// An owned binary tree. Each node exclusively owns both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<T> {
    /// A marker for the empty position at the bottom of a subtree.
    Empty,
    /// A populated position. Boxed so an `Empty` child costs a single word.
    Node(Box<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Self::leaf(value)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// A single populated node with two empty children.
    pub fn leaf(value: T) -> Self {
        Self::cons(value, Self::Empty, Self::Empty)
    }

    /// Assembles a populated node from a value and two subtrees. No ordering is checked.
    pub fn cons(value: T, left: Self, right: Self) -> Self {
        Self::Node(Box::new(Node::new(value, left, right)))
    }

    /// Whether this position holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The value stored here, if any.
    pub fn value(&self) -> Option<&T> {
        self.as_node().map(|n| &n.value)
    }

    /// Stores `value` here and returns the previous one. An empty tree becomes a leaf.
    pub fn replace_value(&mut self, value: T) -> Option<T> {
        match self {
            Self::Empty => {
                *self = Self::leaf(value);
                None
            }
            Self::Node(n) => Some(mem::replace(&mut n.value, value)),
        }
    }

    /// The left subtree, or `None` when this tree is empty.
    pub fn left(&self) -> Option<&Self> {
        self.as_node().map(|n| &n.left)
    }

    /// The right subtree, or `None` when this tree is empty.
    pub fn right(&self) -> Option<&Self> {
        self.as_node().map(|n| &n.right)
    }

    /// Borrows the populated node, if any.
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.as_ref()),
        }
    }

    /// Mutably borrows the populated node, if any.
    pub fn as_node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.as_mut()),
        }
    }

    /// Moves this tree out, leaving [`Empty`][Tree::Empty] in its place.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Number of levels in this tree. An empty tree has height 0 and a leaf has height 1.
    pub fn height(&self) -> usize {
        self.as_node().map_or(0, |n| n.height)
    }
}

/// A populated tree position. It always has two children although
/// those children may be [`Empty`][Tree::Empty].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given value and children.
    pub fn new(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        let mut node = Self {
            value,
            left,
            right,
            height: 0,
        };
        node.fix_height();
        node
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Replaces the left subtree, returning the old one.
    pub fn set_left(&mut self, left: Tree<T>) -> Tree<T> {
        let old = mem::replace(&mut self.left, left);
        self.fix_height();
        old
    }

    /// Replaces the right subtree, returning the old one.
    pub fn set_right(&mut self, right: Tree<T>) -> Tree<T> {
        let old = mem::replace(&mut self.right, right);
        self.fix_height();
        old
    }

    /// Moves the left subtree out, leaving an empty one behind.
    pub fn take_left(&mut self) -> Tree<T> {
        self.set_left(Tree::Empty)
    }

    /// Moves the right subtree out, leaving an empty one behind.
    pub fn take_right(&mut self) -> Tree<T> {
        self.set_right(Tree::Empty)
    }

    /// Rebuilds the left subtree with `f`.
    pub fn update_left(&mut self, f: impl FnOnce(Tree<T>) -> Tree<T>) {
        self.left = f(self.left.take());
        self.fix_height();
    }

    /// Rebuilds the right subtree with `f`.
    pub fn update_right(&mut self, f: impl FnOnce(Tree<T>) -> Tree<T>) {
        self.right = f(self.right.take());
        self.fix_height();
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Left subtree height minus right subtree height.
    pub fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Splits the node into its value and children.
    pub fn into_parts(self) -> (T, Tree<T>, Tree<T>) {
        (self.value, self.left, self.right)
    }

    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }
}
