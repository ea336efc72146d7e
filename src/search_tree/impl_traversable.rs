use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::{
    storage::Storage,
    traversal::{Traversable, TraversalOrder, Traverse},
};
use super::{SearchTree, Node, NodeRef};

impl<T, K, S> Traversable for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root.clone()
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node(cursor).key
    }
    #[inline]
    #[track_caller]
    fn children_of(&self, cursor: &Self::Cursor) -> (Option<Self::Cursor>, Option<Self::Cursor>) {
        let node = self.node(cursor);
        (node.left.clone(), node.right.clone())
    }
}

/// An iterator over the nodes of a search tree in some [`TraversalOrder`].
///
/// Created by [`SearchTree::iter`].
///
/// [`TraversalOrder`]: ../traversal/enum.TraversalOrder.html " "
/// [`SearchTree::iter`]: struct.SearchTree.html#method.iter " "
pub struct Iter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a SearchTree<T, K, S>,
    inner: Traverse<'a, SearchTree<T, K, S>>,
}
impl<'a, T, K, S> Iter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn new(tree: &'a SearchTree<T, K, S>, order: TraversalOrder) -> Self {
        Self {
            tree,
            inner: tree.traverse(order),
        }
    }
    /// Returns the order in which the nodes are produced.
    #[inline(always)]
    pub fn order(&self) -> TraversalOrder {
        self.inner.order()
    }
}
impl<'a, T, K, S> Iterator for Iter<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, K, S>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.inner.next().map(|key| NodeRef::new(tree, key))
    }
}
impl<T, K, S> FusedIterator for Iter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Debug for Iter<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("order", &self.order())
            .finish_non_exhaustive()
    }
}

/// An iterator over the keys of a search tree in ascending order.
///
/// Created by [`SearchTree::keys`].
///
/// [`SearchTree::keys`]: struct.SearchTree.html#method.keys " "
pub struct Keys<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    inner: Traverse<'a, SearchTree<T, K, S>>,
    tree: &'a SearchTree<T, K, S>,
}
impl<'a, T, K, S> Keys<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn new(tree: &'a SearchTree<T, K, S>) -> Self {
        Self {
            inner: tree.traverse(TraversalOrder::InOrder),
            tree,
        }
    }
}
impl<'a, T, K, S> Iterator for Keys<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.inner.next().map(|key| tree.value_of(&key))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every key is produced exactly once, but the traversal does not track how many are left
        (0, Some(self.tree.len()))
    }
}
impl<T, K, S> FusedIterator for Keys<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Debug for Keys<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").finish_non_exhaustive()
    }
}
