use core::fmt::Debug;
use slotmap::{SlotMap, DenseSlotMap, Key};
use super::Storage;

// Both slotmap flavors share the same inherent API, so one body serves both.
macro_rules! impl_storage_for_slotmap {
    ($map:ident) => {
        impl<K, V> Storage for $map<K, V>
        where
            K: Key + Debug + Eq,
        {
            type Key = K;
            type Element = V;
            #[inline(always)]
            fn add(&mut self, element: Self::Element) -> Self::Key {
                self.insert(element)
            }
            #[inline(always)]
            #[track_caller]
            fn remove(&mut self, key: &Self::Key) -> Self::Element {
                $map::remove(self, *key)
                    .expect("the value with this key has already been removed")
            }
            #[inline(always)]
            fn len(&self) -> usize {
                $map::len(self)
            }
            #[inline(always)]
            fn with_capacity(capacity: usize) -> Self {
                Self::with_capacity_and_key(capacity)
            }
            #[inline(always)]
            fn contains_key(&self, key: &Self::Key) -> bool {
                $map::contains_key(self, *key)
            }
            #[inline(always)]
            fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
                $map::get(self, *key)
            }
            #[inline(always)]
            fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
                $map::get_mut(self, *key)
            }
            #[inline(always)]
            fn clear(&mut self) {
                $map::clear(self)
            }
            #[inline(always)]
            fn new() -> Self {
                Self::with_key()
            }
            #[inline(always)]
            fn capacity(&self) -> usize {
                $map::capacity(self)
            }
            #[inline(always)]
            fn reserve(&mut self, additional: usize) {
                $map::reserve(self, additional)
            }
        }
    };
}

impl_storage_for_slotmap!(SlotMap);
impl_storage_for_slotmap!(DenseSlotMap);

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::DefaultKey;

    fn add_remove_roundtrip<S: Storage<Element = u32>>() {
        let mut storage = S::new();
        assert!(storage.is_empty());
        let first = storage.add(10);
        let second = storage.add(20);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(&first), Some(&10));
        *storage.get_mut(&second).expect("just added") += 1;
        assert_eq!(storage.remove(&second), 21);
        assert!(!storage.contains_key(&second));
        assert_eq!(storage.get(&second), None);
        storage.clear();
        assert!(!storage.contains_key(&first));
        assert!(storage.is_empty());
    }

    #[test]
    fn slotmap_storage() {
        add_remove_roundtrip::<SlotMap<DefaultKey, u32>>();
    }

    #[test]
    fn dense_slotmap_storage() {
        add_remove_roundtrip::<DenseSlotMap<DefaultKey, u32>>();
    }

    #[test]
    fn removed_keys_are_not_reused() {
        let mut storage = SlotMap::<DefaultKey, u32>::new();
        let old = Storage::add(&mut storage, 1);
        Storage::remove(&mut storage, &old);
        let new = Storage::add(&mut storage, 2);
        assert_ne!(old, new);
        assert!(!Storage::contains_key(&storage, &old));
    }

    #[test]
    #[should_panic(expected = "already been removed")]
    fn removing_twice_panics() {
        let mut storage = SlotMap::<DefaultKey, u32>::new();
        let key = Storage::add(&mut storage, 1);
        Storage::remove(&mut storage, &key);
        Storage::remove(&mut storage, &key);
    }
}
