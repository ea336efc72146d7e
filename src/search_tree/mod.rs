//! Binary search trees over a set of unique, totally ordered keys.
//!
//! A [`SearchTree`] is built balanced: the keys are sorted and deduplicated, and every subtree is rooted at the middle key of its range. Insertions and removals afterwards are plain binary search tree operations and never reshape the tree on their own, so a long run of ascending insertions degrades it into a chain. [`is_balanced`] detects that in a single pass, and [`rebalance`] rebuilds the tree from its in-order key sequence.
//!
//! # Example
//! ```rust
//! use ashtree::search_tree::SearchTree;
//!
//! // Duplicates are dropped and the keys are sorted before the tree is built.
//! let mut tree = SearchTree::<_>::from_keys(vec![5, 3, 3, 8, 1]);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(5));
//! assert!(tree.is_balanced());
//!
//! // Removing a node with two children pulls its in-order successor up.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.root().map(|root| *root.key()), Some(8));
//!
//! // Ascending insertions grow a chain on the right...
//! for key in [100, 110, 120] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...which a rebuild takes care of.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 3, 8, 100, 110, 120]);
//! ```
//!
//! # Node references and handles
//! A [`NodeRef`] borrows the tree, so the borrow checker rules out using one across a mutation. When a node has to be remembered across mutations, take its [`NodeHandle`] instead: handles are stamped with the identity of the tree which issued them and with its *generation*, which advances whenever nodes are removed (by [`remove`], [`rebalance`] or [`clear`]). A handle from an earlier generation is rejected by [`resolve`] and [`depth`] rather than silently matched against whatever node now occupies its place, and so is a handle from another tree, clones included.
//!
//! [`is_balanced`]: struct.SearchTree.html#method.is_balanced " "
//! [`rebalance`]: struct.SearchTree.html#method.rebalance " "
//! [`remove`]: struct.SearchTree.html#method.remove " "
//! [`clear`]: struct.SearchTree.html#method.clear " "
//! [`resolve`]: struct.SearchTree.html#method.resolve " "
//! [`depth`]: struct.SearchTree.html#method.depth " "

use core::fmt::{self, Formatter, Display};
use alloc::format;

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod pretty;

pub use base::SearchTree;
pub use impl_traversable::{Iter, Keys};
pub use node::Node;
pub use node_ref::NodeRef;
pub use pretty::Pretty;

/// A detached reference to a node, which stays `Copy` and borrow-free across mutations of the tree.
///
/// Obtained with [`NodeRef::handle`] and turned back into a `NodeRef` with [`SearchTree::resolve`]. Handles are only meaningful for the tree which issued them; every other tree rejects them.
///
/// [`NodeRef::handle`]: struct.NodeRef.html#method.handle " "
/// [`SearchTree::resolve`]: struct.SearchTree.html#method.resolve " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle<K> {
    key: K,
    tree_id: usize,
    generation: u64,
}
impl<K> NodeHandle<K> {
    /// Returns a reference to the raw storage key of the node.
    #[inline(always)]
    pub const fn raw_key(&self) -> &K {
        &self.key
    }
    /// Returns the generation of the tree at the moment the handle was taken.
    #[inline(always)]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// The error type returned by [`SearchTree::resolve`] when a handle does not point to a node of the tree.
///
/// [`SearchTree::resolve`]: struct.SearchTree.html#method.resolve " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleError {
    /// Nodes were removed from the tree since the handle was taken, so it may no longer point where it used to.
    Stale {
        /// The generation the handle was taken at.
        handle_generation: u64,
        /// The current generation of the tree.
        tree_generation: u64,
    },
    /// The handle was issued by a different tree. Clones count as different trees.
    Detached,
}
impl Display for HandleError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stale {
                handle_generation,
                tree_generation,
            } => f.pad(&format!(
                "\
stale node handle (taken at generation {}, tree is at generation {})",
                handle_generation,
                tree_generation,
            )),
            Self::Detached => f.pad("the node handle does not belong to this tree"),
        }
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for HandleError {}

/// The error type returned by [`SearchTree::from_sorted`] when the provided keys are not sorted or contain duplicates.
///
/// [`SearchTree::from_sorted`]: struct.SearchTree.html#method.from_sorted " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotStrictlyAscending {
    /// The index of the first key which is not greater than the one before it.
    pub index: usize,
}
impl Display for NotStrictlyAscending {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!(
            "keys are not strictly ascending (key at index {} does not exceed its predecessor)",
            self.index,
        ))
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for NotStrictlyAscending {}

/// A search tree which uses a [`DenseSlotMap`] as backing storage, trading slower removal for faster iteration over the arena.
///
/// The default `SearchTree` type uses a regular `SlotMap`.
///
/// [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
pub type DenseSearchTree<T> = SearchTree<
    T,
    crate::storage::DefaultKey,
    slotmap::DenseSlotMap<crate::storage::DefaultKey, Node<T, crate::storage::DefaultKey>>,
>;
