use core::fmt::{self, Formatter, Debug, Display};
use alloc::string::String;
use crate::storage::Storage;
use super::{SearchTree, Node, NodeRef};

/// Draws a search tree sideways with box-drawing characters, the right subtree above its parent and the left one below.
///
/// Created by [`SearchTree::pretty`]. Nothing is printed for an empty tree.
///
/// ```rust
/// use ashtree::search_tree::SearchTree;
///
/// let tree = SearchTree::<_>::from_keys(vec![1, 3, 5, 8]);
/// assert_eq!(
///     tree.pretty().to_string(),
///     "\
/// │   ┌── 8
/// └── 5
///     └── 3
///         └── 1
/// ",
/// );
/// ```
///
/// [`SearchTree::pretty`]: struct.SearchTree.html#method.pretty " "
pub struct Pretty<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a SearchTree<T, K, S>,
}
impl<T, K, S> SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns a `Display` adapter which draws the shape of the tree.
    #[inline(always)]
    pub fn pretty(&self) -> Pretty<'_, T, K, S> {
        Pretty { tree: self }
    }
}
impl<T, K, S> Display for Pretty<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.tree.root() {
            Some(root) => draw(f, root, &mut String::new(), true),
            None => Ok(()),
        }
    }
}
impl<T, K, S> Debug for Pretty<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pretty").finish_non_exhaustive()
    }
}

// `prefix` is shared by the whole drawing and restored to its previous length on the way out
fn draw<T, K, S>(
    f: &mut Formatter<'_>,
    node: NodeRef<'_, T, K, S>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Display,
{
    let len = prefix.len();
    if let Some(right) = node.right_child() {
        prefix.push_str(if is_left { "│   " } else { "    " });
        draw(f, right, prefix, false)?;
        prefix.truncate(len);
    }
    writeln!(f, "{}{}{}", prefix, if is_left { "└── " } else { "┌── " }, node.key())?;
    if let Some(left) = node.left_child() {
        prefix.push_str(if is_left { "    " } else { "│   " });
        draw(f, left, prefix, true)?;
        prefix.truncate(len);
    }
    Ok(())
}
