use core::{
    cmp::Ordering,
    fmt::{self, Formatter, Debug},
};
use crate::storage::{Storage, DefaultStorage, DefaultKey};
use super::{SearchTree, Node, NodeHandle};

/// A reference to a node in a search tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to walk the tree. It borrows the tree immutably, so the tree cannot change while the reference exists; see [`NodeHandle`] for a reference which survives mutations.
///
/// [`NodeHandle`]: struct.NodeHandle.html " "
pub struct NodeRef<'a, T, K = DefaultKey, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a SearchTree<T, K, S>,
    raw_key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's not there.
    #[inline]
    pub fn new_raw(tree: &'a SearchTree<T, K, S>, raw_key: K) -> Option<Self> {
        if tree.storage.contains_key(&raw_key) {
            Some(Self::new(tree, raw_key))
        } else {
            None
        }
    }
    #[inline(always)]
    pub(super) fn new(tree: &'a SearchTree<T, K, S>, raw_key: K) -> Self {
        debug_assert!(
            tree.storage.contains_key(&raw_key),
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            &raw_key,
        );
        Self { tree, raw_key }
    }
    /// Returns a reference to the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.raw_key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.raw_key
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a SearchTree<T, K, S> {
        self.tree
    }
    /// Returns a detached handle to the node, which can be kept across mutations of the tree.
    #[inline]
    pub fn handle(&self) -> NodeHandle<K> {
        NodeHandle {
            key: self.raw_key.clone(),
            tree_id: self.tree.id,
            generation: self.tree.generation,
        }
    }
    /// Returns a reference to the key stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &'a T {
        &self.node().key
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node()
            .left
            .clone()
            .map(|left| Self::new(self.tree, left))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node()
            .right
            .clone()
            .map(|right| Self::new(self.tree, right))
    }
    /// Returns references to the left and right children.
    #[inline]
    pub fn children(&self) -> (Option<Self>, Option<Self>) {
        (self.left_child(), self.right_child())
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.tree.root.as_ref() == Some(&self.raw_key)
    }
    /// Returns the height of the subtree rooted at the node, i.e. the number of edges on the longest path from it to a leaf. Leaves have height 0.
    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height_of(&self.raw_key)
    }
    /// Returns the number of edges between the root and the node.
    ///
    /// Unlike [`SearchTree::depth`], this descends from the root along the search path of the node's key, since a live reference is guaranteed to be on it.
    ///
    /// [`SearchTree::depth`]: struct.SearchTree.html#method.depth " "
    pub fn depth(&self) -> usize
    where T: Ord,
    {
        let key = self.key();
        let mut current = self
            .tree
            .root
            .clone()
            .expect("a tree with live node references cannot be empty");
        let mut depth = 0;
        while current != self.raw_key {
            let node = self.tree.node(&current);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.clone(),
                Ordering::Greater => node.right.clone(),
                Ordering::Equal => None,
            }
            .expect("live nodes are reachable along the search path of their key");
            depth += 1;
        }
        depth
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        self.tree.node(&self.raw_key)
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            raw_key: self.raw_key.clone(),
        }
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Two references are equal if they point to the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.raw_key == other.raw_key
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Debug for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("raw_key", &self.raw_key)
            .field("key", self.key())
            .finish()
    }
}
