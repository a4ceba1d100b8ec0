//! Errors reported by the few tree operations that can fail.

/// Errors produced by tree layout and invariant checks. Insertion, deletion, lookup and the
/// rotations never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A breadth-first layout of a tree this tall needs `2^height - 1` slots, which cannot be
    /// allocated.
    #[error("breadth-first layout of a tree of height {height} is too large to allocate")]
    LayoutTooLarge {
        /// Height of the tree whose layout was requested.
        height: usize,
    },
    /// An in-order walk saw a value that is not strictly greater than the one before it.
    #[error("values are out of order at in-order position {position}")]
    OutOfOrder {
        /// Zero based in-order position of the offending value.
        position: usize,
    },
    /// A node's cached height disagrees with the heights of its children.
    #[error("node caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        /// The height stored in the node.
        cached: usize,
        /// The height computed from the node's children.
        actual: usize,
    },
    /// A node's children differ in height by more than one.
    #[error("node has balance factor {balance_factor}")]
    Unbalanced {
        /// Left subtree height minus right subtree height.
        balance_factor: isize,
    },
}
