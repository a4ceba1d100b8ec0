//! An ordered (binary search) tree over any totally ordered value type.
//!
//! Operations that would modify the tree (`add` and `delete`) consume it and
//! return the tree to use from then on. The node that was on top before the
//! call may not be on top afterwards: a [`Balance`] strategy is run on every
//! node rebuilt along the mutated path and is free to rotate it.
//!
//! # Examples
//!
//! ```
//! use avl_bst::Bst;
//!
//! let tree = Bst::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.is_member(&1));
//!
//! let tree = tree.add(10).add(5).add(15).add(20);
//! assert!(tree.is_member(&20));
//! assert_eq!(tree.inorder(), vec![&5, &10, &15, &20]);
//!
//! // Adding a value twice changes nothing.
//! let tree = tree.add(5);
//! assert_eq!(tree.size(), 4);
//!
//! // Deleting a value that isn't there changes nothing either.
//! let tree = tree.delete(&42).delete(&10);
//! assert_eq!(tree.inorder(), vec![&5, &15, &20]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use log::{debug, trace};

use crate::error::Error;
use crate::tree::{Node, Tree};

/// The hook an [`OrderedTree`] runs on every node it rebuilds while unwinding from an `add` or
/// `delete`.
pub trait Balance {
    /// Restores this strategy's shape invariant at the root of `tree`, assuming both children
    /// already satisfy it, and returns the subtree's new root.
    fn balance<T>(tree: Tree<T>) -> Tree<T>;

    /// Verifies this strategy's shape invariant over the whole of `tree`.
    fn check<T>(tree: &Tree<T>) -> Result<(), Error> {
        let _ = tree;
        Ok(())
    }
}

/// Leaves every node where the plain binary search tree algorithms put it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn balance<T>(tree: Tree<T>) -> Tree<T> {
        tree
    }
}

/// A plain binary search tree with no rebalancing.
pub type Bst<T> = OrderedTree<T, Unbalanced>;

/// A binary search tree of distinct values, rebalanced by the strategy `B` after every mutation.
pub struct OrderedTree<T, B = Unbalanced> {
    root: Tree<T>,
    strategy: PhantomData<B>,
}

impl<T, B> Default for OrderedTree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so the strategy marker doesn't need to be `Clone`.
impl<T, B> Clone for OrderedTree<T, B>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            strategy: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for OrderedTree<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root)
            .finish()
    }
}

/// Two trees are equal when they have the same shape and values.
impl<T, B> PartialEq for OrderedTree<T, B>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T, B> Eq for OrderedTree<T, B> where T: Eq {}

impl<T, B> FromIterator<T> for OrderedTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}

impl<T, B> Extend<T> for OrderedTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let tree = mem::take(self);
        *self = iter.into_iter().fold(tree, Self::add);
    }
}

impl<T, B> OrderedTree<T, B> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: Tree::Empty,
            strategy: PhantomData,
        }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The underlying root node.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Gives up the ordering wrapper and returns the underlying root node.
    pub fn into_root(self) -> Tree<T> {
        self.root
    }

    /// Returns whether `value` is stored in the tree. Takes `O(height)` comparisons.
    pub fn is_member(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut tree = &self.root;
        while let Some(node) = tree.as_node() {
            tree = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        size(&self.root)
    }

    /// The number of levels in the tree: 0 when empty, 1 for a single value.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_node()?;
        while let Some(left) = node.left().as_node() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_node()?;
        while let Some(right) = node.right().as_node() {
            node = right;
        }
        Some(node.value())
    }

    /// Every value, each one visited before its left and then its right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        preorder(&self.root, &mut values);
        values
    }

    /// Every value in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        inorder(&self.root, &mut values);
        values
    }

    /// Every value, each one visited after its left and then its right subtree.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        postorder(&self.root, &mut values);
        values
    }

    /// Lays the tree out level by level as if it were a complete binary tree of the same height.
    /// The value at (one based) position `i` has its children at `2i` and `2i + 1`, and positions
    /// with no node hold `None`.
    ///
    /// The layout always has `2^height - 1` entries, which grows exponentially on a degenerate
    /// tree. When it cannot be allocated [`Error::LayoutTooLarge`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Bst;
    ///
    /// //        10
    /// //     5      15
    /// //    * *    *  20
    /// let tree: Bst<_> = vec![10, 5, 15, 20].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.bfs_with_placeholders().unwrap(),
    ///     vec![Some(&10), Some(&5), Some(&15), None, None, None, Some(&20)]
    /// );
    /// ```
    pub fn bfs_with_placeholders(&self) -> Result<Vec<Option<&T>>, Error> {
        let height = self.height();
        let len = u32::try_from(height)
            .ok()
            .and_then(|h| 1usize.checked_shl(h))
            .map(|slots| slots - 1)
            .ok_or_else(|| layout_too_large(height))?;

        let mut layout = Vec::new();
        layout
            .try_reserve_exact(len)
            .map_err(|_| layout_too_large(height))?;
        layout.resize(len, None);
        fill_layout(&self.root, 1, &mut layout);

        Ok(layout)
    }

    /// Returns a tree that also contains `value`. Adding a value that is already present returns
    /// the tree unchanged.
    pub fn add(self, value: T) -> Self
    where
        T: Ord,
        B: Balance,
    {
        Self {
            root: add::<T, B>(self.root, value),
            strategy: PhantomData,
        }
    }

    /// Returns a tree without `value`. Deleting a value that isn't present returns the tree
    /// unchanged.
    ///
    /// When the deleted value has two children it is replaced by its in-order neighbour from the
    /// taller side: the smallest value on the right when the right subtree is strictly taller,
    /// otherwise the largest value on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::Bst;
    ///
    /// let tree: Bst<_> = vec![5, 3, 8, 7, 9].into_iter().collect();
    /// let tree = tree.delete(&5);
    ///
    /// // The right side was taller so 5's successor took its place.
    /// assert_eq!(tree.preorder(), vec![&7, &3, &8, &9]);
    /// ```
    pub fn delete(self, value: &T) -> Self
    where
        T: Ord,
        B: Balance,
    {
        Self {
            root: delete::<T, B>(self.root, value),
            strategy: PhantomData,
        }
    }

    /// Verifies the cached heights, the ordering of the values, and the strategy's own shape
    /// invariant, reporting the first violation found.
    pub fn check_invariants(&self) -> Result<(), Error>
    where
        T: Ord,
        B: Balance,
    {
        check_heights(&self.root)?;

        let values = self.inorder();
        if let Some(position) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(Error::OutOfOrder {
                position: position + 1,
            });
        }

        B::check(&self.root)
    }
}

fn layout_too_large(height: usize) -> Error {
    debug!("refusing breadth-first layout for tree of height {}", height);
    Error::LayoutTooLarge { height }
}

fn size<T>(tree: &Tree<T>) -> usize {
    tree.as_node()
        .map_or(0, |n| 1 + size(n.left()) + size(n.right()))
}

fn preorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(node) = tree.as_node() {
        values.push(node.value());
        preorder(node.left(), values);
        preorder(node.right(), values);
    }
}

fn inorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(node) = tree.as_node() {
        inorder(node.left(), values);
        values.push(node.value());
        inorder(node.right(), values);
    }
}

fn postorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(node) = tree.as_node() {
        postorder(node.left(), values);
        postorder(node.right(), values);
        values.push(node.value());
    }
}

/// Writes `tree` into `layout` with its root at the one based `index`.
fn fill_layout<'a, T>(tree: &'a Tree<T>, index: usize, layout: &mut [Option<&'a T>]) {
    if let Some(node) = tree.as_node() {
        layout[index - 1] = Some(node.value());
        fill_layout(node.left(), 2 * index, layout);
        fill_layout(node.right(), 2 * index + 1, layout);
    }
}

fn add<T, B>(tree: Tree<T>, value: T) -> Tree<T>
where
    T: Ord,
    B: Balance,
{
    let tree = match tree {
        Tree::Empty => Tree::leaf(value),
        Tree::Node(mut node) => {
            match value.cmp(node.value()) {
                Ordering::Less => node.update_left(|left| add::<T, B>(left, value)),
                Ordering::Equal => {}
                Ordering::Greater => node.update_right(|right| add::<T, B>(right, value)),
            }
            Tree::Node(node)
        }
    };
    B::balance(tree)
}

fn delete<T, B>(tree: Tree<T>, value: &T) -> Tree<T>
where
    T: Ord,
    B: Balance,
{
    let tree = match tree {
        Tree::Empty => Tree::Empty,
        Tree::Node(mut node) => match value.cmp(node.value()) {
            Ordering::Less => {
                node.update_left(|left| delete::<T, B>(left, value));
                Tree::Node(node)
            }
            Ordering::Equal => remove_root::<T, B>(node),
            Ordering::Greater => {
                node.update_right(|right| delete::<T, B>(right, value));
                Tree::Node(node)
            }
        },
    };
    B::balance(tree)
}

/// Removes the value stored in `node` itself and returns what should take the node's place.
fn remove_root<T, B>(mut node: Box<Node<T>>) -> Tree<T>
where
    B: Balance,
{
    if node.left().is_empty() {
        return node.take_right();
    }
    if node.right().is_empty() {
        return node.take_left();
    }

    if node.left().height() < node.right().height() {
        if let Some((successor, right)) = take_min::<T, B>(node.take_right()) {
            trace!("replacing deleted value with its successor");
            node.set_value(successor);
            node.set_right(right);
        }
    } else if let Some((predecessor, left)) = take_max::<T, B>(node.take_left()) {
        trace!("replacing deleted value with its predecessor");
        node.set_value(predecessor);
        node.set_left(left);
    }
    Tree::Node(node)
}

/// Returns the smallest value in the tree and the tree without it.
fn take_min<T, B>(tree: Tree<T>) -> Option<(T, Tree<T>)>
where
    B: Balance,
{
    let mut node = match tree {
        Tree::Empty => return None,
        Tree::Node(node) => node,
    };
    match take_min::<T, B>(node.take_left()) {
        Some((min, left)) => {
            node.set_left(left);
            Some((min, B::balance(Tree::Node(node))))
        }
        None => {
            let (min, _, right) = node.into_parts();
            Some((min, right))
        }
    }
}

/// Returns the largest value in the tree and the tree without it.
fn take_max<T, B>(tree: Tree<T>) -> Option<(T, Tree<T>)>
where
    B: Balance,
{
    let mut node = match tree {
        Tree::Empty => return None,
        Tree::Node(node) => node,
    };
    match take_max::<T, B>(node.take_right()) {
        Some((max, right)) => {
            node.set_right(right);
            Some((max, B::balance(Tree::Node(node))))
        }
        None => {
            let (max, left, _) = node.into_parts();
            Some((max, left))
        }
    }
}

/// Checks every cached height against the node's children and returns the tree's height.
fn check_heights<T>(tree: &Tree<T>) -> Result<usize, Error> {
    match tree.as_node() {
        None => Ok(0),
        Some(node) => {
            let actual = check_heights(node.left())?.max(check_heights(node.right())?) + 1;
            if node.height() == actual {
                Ok(actual)
            } else {
                Err(Error::StaleHeight {
                    cached: node.height(),
                    actual,
                })
            }
        }
    }
}
