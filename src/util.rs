const INLINE_STACK_SIZE: usize = 32;

/// The explicit stack used by depth-first traversals. Walking a shallow tree never spills it to the heap.
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
