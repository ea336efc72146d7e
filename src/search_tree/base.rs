use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{self, Formatter, Debug},
    iter::FromIterator,
    marker::PhantomData,
    mem,
    sync::atomic::{AtomicUsize, Ordering as AtomicOrdering},
};
use alloc::vec::Vec;
use tracing::{debug, trace};
use crate::{
    storage::{Storage, DefaultStorage, DefaultKey},
    traversal::{Traversable, TraversalOrder},
};
use super::{Node, NodeRef, NodeHandle, HandleError, NotStrictlyAscending, Iter, Keys};

// Source of tree identities, so that handles can tell which tree issued them
static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// A binary search tree over a set of unique keys, stored in an arena.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct SearchTree<T, K = DefaultKey, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<K>,
    pub(super) id: usize,
    pub(super) generation: u64,
    _phantom: PhantomData<T>,
}
impl<T, K, S> SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates an empty tree with the specified capacity for the storage.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            id: NEXT_TREE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            generation: 0,
            _phantom: PhantomData,
        }
    }
    /// Returns the number of keys in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns the number of keys the tree can hold before its storage has to grow.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Returns `true` if the tree holds no keys, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the current generation of the tree. It advances every time nodes are removed, invalidating all [`NodeHandle`]s taken before.
    ///
    /// [`NodeHandle`]: struct.NodeHandle.html " "
    #[inline(always)]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.root.clone().map(|key| NodeRef::new(self, key))
    }
    /// Removes all keys from the tree.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = None;
        self.generation += 1;
    }

    /// Returns the height of the tree, i.e. the number of edges on the longest path from the root to a leaf. A tree with a single node has height 0; an empty tree has no height at all.
    #[inline]
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|root| self.height_of(root))
    }
    /// Returns `true` if the heights of the two subtrees of every node differ by at most one, `false` otherwise.
    ///
    /// Runs in a single bottom-up pass which stops descending into further subtrees as soon as one unbalanced node is found.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.balanced_height(self.root.as_ref()).is_some()
    }
    /// Returns the number of edges between the root and the node behind the handle, or `None` if the handle is stale or its node is not in the tree.
    ///
    /// The node is located by identity with a search of the whole tree, not by its key.
    pub fn depth(&self, handle: &NodeHandle<K>) -> Option<usize> {
        if handle.tree_id != self.id || handle.generation != self.generation {
            return None;
        }
        self.depth_of(self.root.as_ref(), &handle.key, 0)
    }
    /// Turns a handle back into a reference to its node.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The handle was issued by a different tree, including a clone of this one or the tree this one was cloned from.
    /// - Nodes were removed from the tree since the handle was taken.
    pub fn resolve(&self, handle: &NodeHandle<K>) -> Result<NodeRef<'_, T, K, S>, HandleError> {
        if handle.tree_id != self.id {
            return Err(HandleError::Detached);
        }
        if handle.generation != self.generation {
            return Err(HandleError::Stale {
                handle_generation: handle.generation,
                tree_generation: self.generation,
            });
        }
        NodeRef::new_raw(self, handle.key.clone()).ok_or(HandleError::Detached)
    }

    /// Rebuilds the tree into a balanced shape, keeping its set of keys.
    ///
    /// The keys are collected with an in-order traversal, which already yields them sorted, and fed to the same construction algorithm as the one used by [`from_keys`]. All handles taken before are invalidated.
    ///
    /// [`from_keys`]: #method.from_keys " "
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let order = self.traverse(TraversalOrder::InOrder).collect::<Vec<_>>();
        let keys = order
            .iter()
            .map(|key| self.storage.remove(key).key)
            .collect::<Vec<_>>();
        let len = keys.len();
        self.root = self.build_balanced(&mut keys.into_iter(), len);
        self.generation += 1;
        debug!(
            keys = len,
            ?height_before,
            height_after = ?self.height(),
            "rebalanced search tree"
        );
    }

    /// Returns an iterator over the nodes of the tree in the specified order.
    #[inline(always)]
    pub fn iter(&self, order: TraversalOrder) -> Iter<'_, T, K, S> {
        Iter::new(self, order)
    }
    /// Returns an iterator over the keys of the tree in ascending order.
    #[inline(always)]
    pub fn keys(&self) -> Keys<'_, T, K, S> {
        Keys::new(self)
    }
    /// Invokes the visitor with every node of the tree in the specified order, then returns it so that any state it accumulated can be recovered.
    #[inline]
    pub fn walk<'a, V>(&'a self, order: TraversalOrder, mut visitor: V) -> V
    where V: crate::traversal::Visitor<NodeRef<'a, T, K, S>>,
    {
        for node in self.iter(order) {
            visitor.visit(node);
        }
        visitor
    }
    /// Invokes the closure with every node of the tree, breadth-first: the root, then every depth level from left to right.
    #[inline(always)]
    pub fn level_order<'a>(&'a self, f: impl FnMut(NodeRef<'a, T, K, S>)) {
        self.walk(TraversalOrder::LevelOrder, f);
    }
    /// Invokes the closure with every node of the tree, visiting each node before its left and then its right subtree.
    #[inline(always)]
    pub fn pre_order<'a>(&'a self, f: impl FnMut(NodeRef<'a, T, K, S>)) {
        self.walk(TraversalOrder::PreOrder, f);
    }
    /// Invokes the closure with every node of the tree, visiting each node between its left and its right subtree, i.e. in ascending key order.
    #[inline(always)]
    pub fn in_order<'a>(&'a self, f: impl FnMut(NodeRef<'a, T, K, S>)) {
        self.walk(TraversalOrder::InOrder, f);
    }
    /// Invokes the closure with every node of the tree, visiting each node after its left and then its right subtree.
    #[inline(always)]
    pub fn post_order<'a>(&'a self, f: impl FnMut(NodeRef<'a, T, K, S>)) {
        self.walk(TraversalOrder::PostOrder, f);
    }
    /// Collects the keys of the tree breadth-first.
    pub fn level_order_keys(&self) -> Vec<T>
    where T: Clone,
    {
        self.iter(TraversalOrder::LevelOrder)
            .map(|node| node.key().clone())
            .collect()
    }

    #[inline]
    #[track_caller]
    pub(super) fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .expect("search tree nodes never link to keys missing from the storage")
    }
    #[inline]
    #[track_caller]
    fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .expect("search tree nodes never link to keys missing from the storage")
    }

    pub(super) fn height_of(&self, key: &K) -> usize {
        let node = self.node(key);
        let left = node.left.as_ref().map(|left| self.height_of(left));
        let right = node.right.as_ref().map(|right| self.height_of(right));
        left.max(right).map_or(0, |height| height + 1)
    }
    // Counts nodes rather than edges, so that an empty subtree is 0. `None` means that some
    // node below is unbalanced.
    fn balanced_height(&self, subtree: Option<&K>) -> Option<usize> {
        let node = match subtree {
            Some(key) => self.node(key),
            None => return Some(0),
        };
        let left = self.balanced_height(node.left.as_ref())?;
        let right = self.balanced_height(node.right.as_ref())?;
        if left.abs_diff(right) > 1 {
            None
        } else {
            Some(left.max(right) + 1)
        }
    }
    fn depth_of(&self, subtree: Option<&K>, target: &K, depth: usize) -> Option<usize> {
        let key = subtree?;
        if key == target {
            return Some(depth);
        }
        let node = self.node(key);
        self.depth_of(node.left.as_ref(), target, depth + 1)
            .or_else(|| self.depth_of(node.right.as_ref(), target, depth + 1))
    }
    /// Builds a balanced subtree out of the next `len` keys of the iterator, which must be sorted, and returns its root.
    fn build_balanced<I>(&mut self, keys: &mut I, len: usize) -> Option<K>
    where I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        // The left half is built first so that the middle key is the next one to come out
        let middle = len / 2;
        let left = self.build_balanced(keys, middle);
        let key = keys
            .next()
            .expect("the key iterator ran out before the subtree was complete");
        let right = self.build_balanced(keys, len - middle - 1);
        Some(self.storage.add(Node::branch(key, left, right)))
    }
}
impl<T, K, S> SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    /// Creates a balanced tree out of the specified keys. Duplicate keys are dropped.
    pub fn from_keys<I>(keys: I) -> Self
    where I: IntoIterator<Item = T>,
    {
        let mut keys = keys.into_iter().collect::<Vec<_>>();
        keys.sort_unstable();
        keys.dedup();
        Self::from_sorted_unchecked(keys)
    }
    /// Creates a balanced tree out of keys which are already sorted and free of duplicates, skipping the sort done by [`from_keys`].
    ///
    /// # Errors
    /// Will fail if some key is not strictly greater than the one before it.
    ///
    /// [`from_keys`]: #method.from_keys " "
    pub fn from_sorted(keys: Vec<T>) -> Result<Self, NotStrictlyAscending> {
        if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(NotStrictlyAscending { index: index + 1 });
        }
        Ok(Self::from_sorted_unchecked(keys))
    }
    fn from_sorted_unchecked(keys: Vec<T>) -> Self {
        let len = keys.len();
        let mut tree = Self::with_capacity(len);
        tree.root = tree.build_balanced(&mut keys.into_iter(), len);
        debug!(keys = len, height = ?tree.height(), "built balanced search tree");
        tree
    }

    /// Adds a key to the tree as a new leaf, returning `true` if it was not present before. Inserting a key which is already in the tree does nothing and returns `false`.
    ///
    /// The tree is never reshaped by insertion; see [`rebalance`].
    ///
    /// [`rebalance`]: #method.rebalance " "
    pub fn insert(&mut self, key: T) -> bool {
        let (root, inserted) = self.insert_into(self.root.clone(), key);
        self.root = Some(root);
        trace!(inserted, len = self.len(), "insert");
        inserted
    }
    fn insert_into(&mut self, subtree: Option<K>, key: T) -> (K, bool) {
        let at = match subtree {
            Some(at) => at,
            None => return (self.storage.add(Node::leaf(key)), true),
        };
        let node = self.node(&at);
        match key.cmp(&node.key) {
            Ordering::Less => {
                let left = node.left.clone();
                let (left, inserted) = self.insert_into(left, key);
                self.node_mut(&at).left = Some(left);
                (at, inserted)
            }
            Ordering::Greater => {
                let right = node.right.clone();
                let (right, inserted) = self.insert_into(right, key);
                self.node_mut(&at).right = Some(right);
                (at, inserted)
            }
            Ordering::Equal => (at, false),
        }
    }

    /// Removes a key from the tree, returning it if it was present. Removing a key which is not in the tree does nothing.
    ///
    /// A node with two children is not unlinked itself: it takes over the key of its in-order successor, whose node is removed instead. A successful removal invalidates all handles taken before.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = self.remove_from(self.root.clone(), key);
        self.root = root;
        if removed.is_some() {
            self.generation += 1;
        }
        trace!(removed = removed.is_some(), len = self.len(), "remove");
        removed
    }
    fn remove_from<Q>(&mut self, subtree: Option<K>, key: &Q) -> (Option<K>, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let at = match subtree {
            Some(at) => at,
            None => return (None, None),
        };
        let node = self.node(&at);
        match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let left = node.left.clone();
                let (left, removed) = self.remove_from(left, key);
                self.node_mut(&at).left = left;
                (Some(at), removed)
            }
            Ordering::Greater => {
                let right = node.right.clone();
                let (right, removed) = self.remove_from(right, key);
                self.node_mut(&at).right = right;
                (Some(at), removed)
            }
            Ordering::Equal => match (node.left.clone(), node.right.clone()) {
                (Some(..), Some(right)) => {
                    let (right, successor) = self.take_min(right);
                    let node = self.node_mut(&at);
                    node.right = right;
                    (Some(at), Some(mem::replace(&mut node.key, successor)))
                }
                (left, right) => {
                    let Node { key, .. } = self.storage.remove(&at);
                    (left.or(right), Some(key))
                }
            },
        }
    }
    /// Unlinks the leftmost node of the subtree, returning the new root of the subtree and the key of the unlinked node.
    fn take_min(&mut self, subtree: K) -> (Option<K>, T) {
        let mut parent = None;
        let mut current = subtree.clone();
        while let Some(left) = self.node(&current).left.clone() {
            parent = Some(current);
            current = left;
        }
        // The leftmost node has no left child, so its right subtree takes its place
        let Node { key, right, .. } = self.storage.remove(&current);
        match parent {
            Some(parent) => {
                self.node_mut(&parent).left = right;
                (Some(subtree), key)
            }
            None => (right, key),
        }
    }

    /// Returns a reference to the node holding the specified key, or `None` if the key is not in the tree.
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, T, K, S>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_in(self.root.as_ref(), key)
            .map(|found| NodeRef::new(self, found.clone()))
    }
    fn find_in<'s, Q>(&'s self, subtree: Option<&'s K>, key: &Q) -> Option<&'s K>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let at = subtree?;
        let node = self.node(at);
        match key.cmp(node.key.borrow()) {
            Ordering::Less => self.find_in(node.left.as_ref(), key),
            Ordering::Greater => self.find_in(node.right.as_ref(), key),
            Ordering::Equal => Some(at),
        }
    }
    /// Returns `true` if the key is in the tree, `false` otherwise.
    #[inline(always)]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
    /// Returns a reference to the node with the smallest key, or `None` if the tree is empty.
    pub fn first(&self) -> Option<NodeRef<'_, T, K, S>> {
        let mut current = self.root()?;
        while let Some(left) = current.left_child() {
            current = left;
        }
        Some(current)
    }
    /// Returns a reference to the node with the largest key, or `None` if the tree is empty.
    pub fn last(&self) -> Option<NodeRef<'_, T, K, S>> {
        let mut current = self.root()?;
        while let Some(right) = current.right_child() {
            current = right;
        }
        Some(current)
    }
}
impl<T, K, S> Default for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Clone for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K> + Clone,
    K: Clone + Debug + Eq,
{
    /// Clones the keys and the shape of the tree. The clone is a separate tree: handles taken from one of them are detached in the other.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            root: self.root.clone(),
            id: NEXT_TREE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            generation: self.generation,
            _phantom: PhantomData,
        }
    }
}
impl<T, K, S> FromIterator<T> for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
impl<T, K, S> Extend<T> for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    /// Inserts every key one by one, without rebalancing.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.storage.reserve(iter.size_hint().0);
        for key in iter {
            self.insert(key);
        }
    }
}
impl<'a, T, K, S> IntoIterator for &'a SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;
    type IntoIter = Keys<'a, T, K, S>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}
impl<T, K, S> Debug for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}
