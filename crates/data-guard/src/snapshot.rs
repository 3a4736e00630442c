use miden_circuit_map::{FieldHasher, FieldSerializable, FixedMap, PrimeField64};
use serde::{Deserialize, Serialize};

// MAP SNAPSHOT
// ================================================================================================

/// A JSON-friendly view of the slots and fingerprint of a [`FixedMap`].
///
/// Keys and values are stored as their canonical field encodings, one list of elements per slot
/// and in slot order, so empty slots show up as all-zero encodings. The fingerprint is the hex
/// encoding of the map commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub capacity: usize,
    pub keys: Vec<Vec<u64>>,
    pub values: Vec<Vec<u64>>,
    pub fingerprint: String,
}

impl MapSnapshot {
    pub fn new<K, V, H>(map: &FixedMap<K, V, H>) -> Self
    where
        K: FieldSerializable + Clone,
        V: FieldSerializable + Clone,
        H: FieldHasher,
    {
        let keys = map.entries().map(|entry| canonical(&entry.key)).collect();
        let values = map.entries().map(|entry| canonical(&entry.value)).collect();
        Self {
            capacity: map.capacity(),
            keys,
            values,
            fingerprint: map.fingerprint().to_hex(),
        }
    }
}

fn canonical<T: FieldSerializable>(value: &T) -> Vec<u64> {
    value.to_fields().iter().map(PrimeField64::as_canonical_u64).collect()
}
