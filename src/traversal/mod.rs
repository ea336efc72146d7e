//! Everything related to traversing binary trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`]: a *trait for types which describe binary tree-like structures* through cursors
//! - [`Visitor`]: a *trait for callbacks which are invoked once per visited node*, implemented for every `FnMut`
//! - [`TraversalOrder`]: the four supported visiting orders
//! - [`Traverse`]: a lazy iterator producing the cursors of a traversable in one of those orders
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`TraversalOrder`]: enum.TraversalOrder.html " "
//! [`Traverse`]: struct.Traverse.html " "

use alloc::collections::VecDeque;
use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::util::Stack;

/// Callbacks which are invoked with every node a traversal visits.
///
/// Any `FnMut(N)` closure is a visitor, so most users never implement this trait by hand; it exists for stateful visitors which need to be named or handed back after the traversal.
pub trait Visitor<N> {
    /// Visits one node.
    fn visit(&mut self, node: N);
}
impl<N, F> Visitor<N> for F
where F: FnMut(N),
{
    #[inline(always)]
    fn visit(&mut self, node: N) {
        self(node)
    }
}

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Breadth-first: the root, then every depth level from left to right.
    LevelOrder,
    /// Depth-first: a node, then its left subtree, then its right subtree.
    PreOrder,
    /// Depth-first: the left subtree, then the node, then the right subtree. For search trees, this yields keys in ascending order.
    InOrder,
    /// Depth-first: the left subtree, then the right subtree, then the node.
    PostOrder,
}
impl TraversalOrder {
    /// All traversal orders, in the order they are usually listed.
    pub const ALL: [Self; 4] = [Self::LevelOrder, Self::PreOrder, Self::InOrder, Self::PostOrder];
}

/// Binary tree-like data structures which can be walked with cursors.
pub trait Traversable {
    /// The payload stored in each node.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Cursors are only valid until the traversable is mutated.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node, or `None` if the structure is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the payload of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns cursors to the left and right children of the node at the specified cursor.
    fn children_of(&self, cursor: &Self::Cursor) -> (Option<Self::Cursor>, Option<Self::Cursor>);

    /// Lazily walks the structure from the root in the specified order.
    #[inline(always)]
    fn traverse(&self, order: TraversalOrder) -> Traverse<'_, Self>
    where Self: Sized,
    {
        Traverse::new(self, order)
    }
    /// Walks the structure from the root in the specified order, feeding every cursor to the visitor. Returns the visitor, so that any state it accumulated can be recovered.
    #[inline]
    fn traverse_with<V>(&self, order: TraversalOrder, mut visitor: V) -> V
    where
        Self: Sized,
        V: Visitor<Self::Cursor>,
    {
        for cursor in self.traverse(order) {
            visitor.visit(cursor);
        }
        visitor
    }
}

/// A lazy iterator over the cursors of a [`Traversable`], produced in a fixed [`TraversalOrder`].
///
/// Depth-first orders keep an explicit stack instead of recursing, so walking a degenerate tree does not consume call stack proportional to its height.
///
/// [`Traversable`]: trait.Traversable.html " "
/// [`TraversalOrder`]: enum.TraversalOrder.html " "
pub struct Traverse<'a, T: Traversable> {
    traversable: &'a T,
    state: State<T::Cursor>,
}
enum State<C> {
    LevelOrder(VecDeque<C>),
    PreOrder(Stack<C>),
    InOrder {
        stack: Stack<C>,
        descend_from: Option<C>,
    },
    // The flag is set once the node's children have been scheduled
    PostOrder(Stack<(C, bool)>),
}
impl<'a, T: Traversable> Traverse<'a, T> {
    /// Creates a traversal of the specified traversable, starting at its root.
    pub fn new(traversable: &'a T, order: TraversalOrder) -> Self {
        Self::from_cursor(traversable, traversable.cursor_to_root(), order)
    }
    /// Creates a traversal of the subtree at the specified cursor. An empty starting cursor produces an empty traversal.
    pub fn from_cursor(traversable: &'a T, start: Option<T::Cursor>, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::LevelOrder => State::LevelOrder(start.into_iter().collect()),
            TraversalOrder::PreOrder => State::PreOrder(start.into_iter().collect()),
            TraversalOrder::InOrder => State::InOrder {
                stack: Stack::new(),
                descend_from: start,
            },
            TraversalOrder::PostOrder => {
                State::PostOrder(start.into_iter().map(|cursor| (cursor, false)).collect())
            }
        };
        Self { traversable, state }
    }
    /// Returns the order in which this traversal produces cursors.
    pub fn order(&self) -> TraversalOrder {
        match &self.state {
            State::LevelOrder(..) => TraversalOrder::LevelOrder,
            State::PreOrder(..) => TraversalOrder::PreOrder,
            State::InOrder { .. } => TraversalOrder::InOrder,
            State::PostOrder(..) => TraversalOrder::PostOrder,
        }
    }
}
impl<T: Traversable> Iterator for Traverse<'_, T> {
    type Item = T::Cursor;
    fn next(&mut self) -> Option<Self::Item> {
        let traversable = self.traversable;
        match &mut self.state {
            State::LevelOrder(queue) => {
                let cursor = queue.pop_front()?;
                let (left, right) = traversable.children_of(&cursor);
                queue.extend(left);
                queue.extend(right);
                Some(cursor)
            }
            State::PreOrder(stack) => {
                let cursor = stack.pop()?;
                let (left, right) = traversable.children_of(&cursor);
                // Right goes in first so that left comes out first
                stack.extend(right);
                stack.extend(left);
                Some(cursor)
            }
            State::InOrder { stack, descend_from } => {
                while let Some(cursor) = descend_from.take() {
                    *descend_from = traversable.children_of(&cursor).0;
                    stack.push(cursor);
                }
                let cursor = stack.pop()?;
                *descend_from = traversable.children_of(&cursor).1;
                Some(cursor)
            }
            State::PostOrder(stack) => loop {
                let (cursor, expanded) = stack.pop()?;
                if expanded {
                    return Some(cursor);
                }
                let (left, right) = traversable.children_of(&cursor);
                stack.push((cursor, true));
                stack.extend(right.map(|right| (right, false)));
                stack.extend(left.map(|left| (left, false)));
            },
        }
    }
}
impl<T: Traversable> FusedIterator for Traverse<'_, T> {}
impl<T: Traversable> Debug for Traverse<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("order", &self.order())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// A complete binary tree stored heap-style in a slice: children of `i` are `2i + 1` and `2i + 2`.
    struct Heap<'a>(&'a [char]);
    impl Traversable for Heap<'_> {
        type Value = char;
        type Cursor = usize;
        fn cursor_to_root(&self) -> Option<usize> {
            if self.0.is_empty() { None } else { Some(0) }
        }
        fn value_of(&self, cursor: &usize) -> &char {
            &self.0[*cursor]
        }
        fn children_of(&self, cursor: &usize) -> (Option<usize>, Option<usize>) {
            let child = |n: usize| Some(n).filter(|n| *n < self.0.len());
            (child(2 * cursor + 1), child(2 * cursor + 2))
        }
    }

    fn walk(heap: &Heap<'_>, order: TraversalOrder) -> Vec<char> {
        heap.traverse(order).map(|c| *heap.value_of(&c)).collect()
    }

    #[test]
    fn orders() {
        //        a
        //      b   c
        //     d e f
        let heap = Heap(&['a', 'b', 'c', 'd', 'e', 'f']);
        assert_eq!(walk(&heap, TraversalOrder::LevelOrder), ['a', 'b', 'c', 'd', 'e', 'f']);
        assert_eq!(walk(&heap, TraversalOrder::PreOrder), ['a', 'b', 'd', 'e', 'c', 'f']);
        assert_eq!(walk(&heap, TraversalOrder::InOrder), ['d', 'b', 'e', 'a', 'f', 'c']);
        assert_eq!(walk(&heap, TraversalOrder::PostOrder), ['d', 'e', 'b', 'f', 'c', 'a']);
    }

    #[test]
    fn empty() {
        let heap = Heap(&[]);
        for order in TraversalOrder::ALL {
            assert_eq!(heap.traverse(order).count(), 0);
        }
    }

    #[test]
    fn visitor_is_handed_back() {
        let heap = Heap(&['x', 'y', 'z']);
        let mut seen = Vec::new();
        heap.traverse_with(TraversalOrder::PostOrder, |c: usize| seen.push(c));
        assert_eq!(seen, [1, 2, 0]);
    }
}
