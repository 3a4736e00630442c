use alloc::vec::Vec;

use crate::{Entry, Felt, FieldSerializable, ZERO};

// NULL SENTINEL
// ================================================================================================

/// The canonical "absent" key and value of a map.
///
/// The null key decodes from [`FieldSerializable::ARITY`] zeros of the key type and the null
/// value from the same number of zeros of the value type, both with default auxiliary payloads.
/// A slot holding the null key is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullSentinel<K, V> {
    key: K,
    value: V,
}

impl<K: FieldSerializable, V: FieldSerializable> NullSentinel<K, V> {
    pub fn new() -> Self {
        let key = K::from_fields(&zeros(K::ARITY), K::Aux::default());
        let value = V::from_fields(&zeros(V::ARITY), V::Aux::default());
        Self { key, value }
    }
}

impl<K, V> NullSentinel<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<K: Clone, V: Clone> NullSentinel<K, V> {
    /// Returns an empty entry.
    pub fn entry(&self) -> Entry<K, V> {
        Entry::new(self.key.clone(), self.value.clone())
    }
}

impl<K: FieldSerializable, V: FieldSerializable> Default for NullSentinel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn zeros(len: usize) -> Vec<Felt> {
    vec![ZERO; len]
}

// TESTS
// ================================================================================================
