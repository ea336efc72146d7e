use core::fmt::Debug;

/// A node of a search tree.
///
/// Created by the search tree internally and only publicly exposed so that search tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(super) key: T,
    pub(super) left: Option<K>,
    pub(super) right: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) const fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
    #[inline(always)]
    pub(super) const fn branch(key: T, left: Option<K>, right: Option<K>) -> Self {
        Self { key, left, right }
    }
    #[inline(always)]
    pub(super) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
