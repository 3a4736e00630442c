use alloc::{boxed::Box, vec::Vec};
use core::{fmt, marker::PhantomData};

use miden_crypto::hash::rpo::Rpo256;

use crate::{
    Entry, Felt, FieldError, FieldHasher, FieldSerializable, Hashable, MapError, NullSentinel, ONE,
    WORD_SIZE, Word, ZERO,
    select::{felts_eq, select},
};


// FIXED MAP
// ================================================================================================

/// A key-value map with a fixed number of slots and constant-shape operations.
///
/// The map consists of exactly `capacity` [`Entry`] slots. A slot is empty when its key is the
/// null key of the map (see [`NullSentinel`]). Slots are never added or removed after
/// construction; deleting a key overwrites its slot with the null entry.
///
/// [`FixedMap::has`], [`FixedMap::get`], [`FixedMap::put`] and [`FixedMap::delete`] all visit
/// every slot exactly once. For each slot they compute a selector bit which is set only for the
/// first slot (in slot order) whose key has the same fingerprint as the requested key, and they
/// combine the per-slot results through arithmetic selection. The work performed is therefore
/// independent of whether the key is present and of where it is stored.
///
/// Keys are compared by their fingerprint under `H`, and the same hash function is used to
/// compute the commitment returned by [`FixedMap::fingerprint`].
///
/// Keys are not required to be unique. When several slots hold the same key, only the first one
/// is reachable through the map operations.
pub struct FixedMap<K, V, H = Rpo256> {
    slots: Box<[Entry<K, V>]>,
    null: NullSentinel<K, V>,
    _hasher: PhantomData<H>,
}

impl<K, V, H> FixedMap<K, V, H>
where
    K: FieldSerializable + Clone,
    V: FieldSerializable + Clone,
    H: FieldHasher,
{
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a map with `capacity` slots, the first of which are filled from `entries`.
    ///
    /// Slots which are not filled from `entries` are set to the null entry.
    ///
    /// # Errors
    /// Returns an error if:
    /// - more than `capacity` entries are provided.
    /// - the field encoding of any entry does not match the arity of the key and value types.
    pub fn new<I>(capacity: usize, entries: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = Entry<K, V>>,
    {
        let mut slots: Vec<Entry<K, V>> = entries.into_iter().collect();
        if slots.len() > capacity {
            return Err(MapError::CapacityExceeded { capacity, actual: slots.len() });
        }

        for (slot, entry) in slots.iter().enumerate() {
            let fields = entry.to_fields();
            Entry::<K, V>::try_from_fields(&fields, entry.to_aux())
                .map_err(|source| MapError::InvalidEntry { slot, source })?;
        }

        let occupied = slots.len();
        let null = NullSentinel::new();
        slots.resize_with(capacity, || null.entry());
        tracing::debug!(capacity, occupied, "created fixed map");

        Ok(Self {
            slots: slots.into_boxed_slice(),
            null,
            _hasher: PhantomData,
        })
    }

    /// Returns a map with `capacity` empty slots.
    pub fn empty(capacity: usize) -> Self {
        let null = NullSentinel::<K, V>::new();
        let slots = (0..capacity).map(|_| null.entry()).collect();
        Self { slots, null, _hasher: PhantomData }
    }

    /// Returns a map with `capacity` slots decoded from a flat sequence of field elements.
    ///
    /// `fields` must hold the concatenated encodings of all slots in slot order, i.e., exactly
    /// `capacity * (K::ARITY + V::ARITY)` elements. Auxiliary payloads are taken from `aux` in
    /// slot order; missing payloads are replaced with defaults.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the number of elements does not match the capacity and the key and value arities.
    /// - any slot holds an invalid encoding of its key or value.
    pub fn from_fields<I>(capacity: usize, fields: &[Felt], aux: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = (K::Aux, V::Aux)>,
    {
        let arity = Entry::<K, V>::ARITY;
        match capacity.checked_mul(arity) {
            Some(expected) if expected == fields.len() => {},
            expected => {
                // an overflowing product can never match the length of an existing slice
                return Err(MapError::InvalidEncoding {
                    capacity,
                    source: FieldError::ArityMismatch {
                        expected: expected.unwrap_or(usize::MAX),
                        actual: fields.len(),
                    },
                });
            },
        }

        let mut aux = aux.into_iter();
        let slots = (0..capacity)
            .map(|slot| {
                let encoding = &fields[slot * arity..(slot + 1) * arity];
                Entry::try_from_fields(encoding, aux.next().unwrap_or_default())
                    .map_err(|source| MapError::InvalidEntry { slot, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            slots: slots.into_boxed_slice(),
            null: NullSentinel::new(),
            _hasher: PhantomData,
        })
    }

    // OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Returns true if some slot holds `key`.
    ///
    /// Empty slots hold the null key, so querying the null key returns true iff the map has at
    /// least one empty slot.
    pub fn has(&self, key: &K) -> bool {
        let target = key.fingerprint::<H>();
        let found = self.slots.iter().fold(ZERO, |found, entry| {
            found + first_match_bit::<K, H>(&entry.key, &target, found)
        });
        found == ONE
    }

    /// Returns the value of the first slot holding `key`, or the null value if there is none.
    pub fn get(&self, key: &K) -> V {
        let target = key.fingerprint::<H>();
        let mut found = ZERO;
        let mut result = self.null.value().clone();
        for entry in self.slots.iter() {
            let bit = first_match_bit::<K, H>(&entry.key, &target, found);
            result = select(bit, &entry.value, &result);
            found += bit;
        }
        result
    }

    /// Overwrites the first slot holding `key` with `(key, value)`.
    ///
    /// Returns false and leaves the map unchanged if no slot holds `key`. This never claims an
    /// empty slot for a new key: only keys placed in the map at construction can be updated.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let target = key.fingerprint::<H>();
        overwrite_first_match::<K, V, H>(&mut self.slots, &target, &key, &value)
    }

    /// Overwrites the first slot holding `key` with the null entry.
    ///
    /// Returns false and leaves the map unchanged if no slot holds `key`.
    pub fn delete(&mut self, key: &K) -> bool {
        let target = key.fingerprint::<H>();
        overwrite_first_match::<K, V, H>(
            &mut self.slots,
            &target,
            self.null.key(),
            self.null.value(),
        )
    }

    /// Returns a commitment to the contents and the layout of the map.
    ///
    /// Each slot is hashed as the concatenation of its key and value encodings, and the map
    /// fingerprint is the hash of all slot digests in slot order. Moving an entry to a different
    /// slot changes the fingerprint.
    #[tracing::instrument("map_fingerprint", skip_all, fields(capacity = self.slots.len()))]
    pub fn fingerprint(&self) -> Word {
        let mut digests = Vec::with_capacity(self.slots.len() * WORD_SIZE);
        for entry in self.slots.iter() {
            digests.extend_from_slice(entry.fingerprint::<H>().as_elements());
        }
        H::hash_elements(&digests)
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns the concatenated field encodings of all slots in slot order.
    pub fn to_fields(&self) -> Vec<Felt> {
        let mut result = Vec::with_capacity(self.slots.len() * Entry::<K, V>::ARITY);
        for entry in self.slots.iter() {
            entry.write_fields(&mut result);
        }
        result
    }

    /// Returns the auxiliary payloads of all slots in slot order.
    pub fn to_aux(&self) -> Vec<(K::Aux, V::Aux)> {
        self.slots.iter().map(Entry::to_aux).collect()
    }
}

impl<K, V, H> FixedMap<K, V, H> {
    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of slots in the map.
    ///
    /// This is the capacity fixed at construction, not the number of occupied slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Alias of [`FixedMap::size`].
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the null key used to mark empty slots.
    pub fn null_key(&self) -> &K {
        self.null.key()
    }

    /// Returns the null value returned by lookups of absent keys.
    pub fn null_value(&self) -> &V {
        self.null.value()
    }

    /// Returns an iterator over all slots in slot order, including empty ones.
    ///
    /// Iterating the slots exposes which of them are empty; this is meant for inspecting the
    /// map outside of proven computations.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.slots.iter()
    }
}

impl<K: Clone, V: Clone, H> FixedMap<K, V, H> {
    /// Returns the keys of all slots in slot order, including the null keys of empty slots.
    pub fn keys(&self) -> Vec<K> {
        self.slots.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Returns the values of all slots in slot order, including the null values of empty slots.
    pub fn values(&self) -> Vec<V> {
        self.slots.iter().map(|entry| entry.value.clone()).collect()
    }
}

impl<K: Clone, V: Clone, H> Clone for FixedMap<K, V, H> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            null: self.null.clone(),
            _hasher: PhantomData,
        }
    }
}

impl<K: PartialEq, V: PartialEq, H> PartialEq for FixedMap<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<K: Eq, V: Eq, H> Eq for FixedMap<K, V, H> {}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for FixedMap<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedMap").field("slots", &self.slots).finish()
    }
}

// HELPERS
// ================================================================================================

/// Returns [`ONE`] if `slot_key` has fingerprint `target` and no earlier slot matched, i.e.,
/// `found` is [`ZERO`]; returns [`ZERO`] otherwise.
fn first_match_bit<K: FieldSerializable, H: FieldHasher>(
    slot_key: &K,
    target: &Word,
    found: Felt,
) -> Felt {
    let is_match = felts_eq(slot_key.fingerprint::<H>().as_elements(), target.as_elements());
    is_match * (ONE - found)
}

/// Rewrites every slot with the selection between `(key, value)` and its current contents, where
/// only the first slot holding a key with fingerprint `target` selects the new contents.
///
/// Returns true if such a slot exists.
fn overwrite_first_match<K, V, H>(
    slots: &mut [Entry<K, V>],
    target: &Word,
    key: &K,
    value: &V,
) -> bool
where
    K: FieldSerializable,
    V: FieldSerializable,
    H: FieldHasher,
{
    let mut found = ZERO;
    for entry in slots.iter_mut() {
        let bit = first_match_bit::<K, H>(&entry.key, target, found);
        entry.key = select(bit, key, &entry.key);
        entry.value = select(bit, value, &entry.value);
        found += bit;
    }
    found == ONE
}
