//! Utilities for treating the node arena of a search tree generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the backing arenas of trees
//! - [`DefaultStorage`], the arena used by trees unless a different one is specified
//!
//! Implementations are provided for [`SlotMap`] and [`DenseSlotMap`]. Both hand out *generational* keys, meaning that a key to a removed element will never address a different element which later took its place.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "

mod slotmap_impl;

use core::fmt::Debug;

/// Trait for containers which can be the backing arena for trees.
///
/// Implementors must uphold the following:
/// - `new` and `with_capacity` return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - calling `remove` on a key for which `contains_key` returns `true` never panics, as that might leave the tree in an invalid state during some operations;
/// - an element added at a key is retrievable in the exact same state until it is removed or modified through `get_mut`.
///
/// Trees rely on those invariants for correctness, not for memory safety.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key` within the storage.
    ///
    /// # Panics
    /// Required to panic if the specified key does not exist.
    fn remove(&mut self, key: &Self::Key) -> Self::Element;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    fn contains_key(&self, key: &Self::Key) -> bool;
    /// Returns a reference to the specified element, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Removes all elements from the storage.
    fn clear(&mut self);

    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }
}

/// The default storage type used by trees when a storage type is not provided.
///
/// This is a [`SlotMap`] with the default key type, so that keys to removed nodes are detected as such instead of aliasing newer nodes.
///
/// [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
pub type DefaultStorage<T> = slotmap::SlotMap<slotmap::DefaultKey, T>;

/// The key type of [`DefaultStorage`].
///
/// [`DefaultStorage`]: type.DefaultStorage.html " "
pub type DefaultKey = slotmap::DefaultKey;
