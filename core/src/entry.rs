use alloc::vec::Vec;

use crate::{Felt, FieldError, FieldSerializable};

// ENTRY
// ================================================================================================

/// A key-value pair stored in a single slot of a [`FixedMap`](crate::FixedMap).
///
/// The field encoding of an entry is the encoding of its key followed by the encoding of its
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Consumes the entry and returns its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: FieldSerializable, V: FieldSerializable> FieldSerializable for Entry<K, V> {
    const ARITY: usize = K::ARITY + V::ARITY;
    type Aux = (K::Aux, V::Aux);

    fn write_fields(&self, target: &mut Vec<Felt>) {
        self.key.write_fields(target);
        self.value.write_fields(target);
    }

    fn to_aux(&self) -> Self::Aux {
        (self.key.to_aux(), self.value.to_aux())
    }

    fn from_fields(fields: &[Felt], aux: Self::Aux) -> Self {
        let (key, value) = fields.split_at(K::ARITY);
        Self::new(K::from_fields(key, aux.0), V::from_fields(value, aux.1))
    }

    fn check(fields: &[Felt]) -> Result<(), FieldError> {
        let (key, value) = fields.split_at(K::ARITY);
        K::check(key)?;
        V::check(value)
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ONE, Word, ZERO};

    #[test]
    fn entry_encoding_is_key_then_value() {
        let key = Word::new([ONE, Felt::new(2), Felt::new(3), Felt::new(4)]);
        let entry = Entry::new(key, 9u32);

        let mut expected = key.to_fields();
        expected.push(Felt::new(9));
        assert_eq!(entry.to_fields(), expected);
        assert_eq!(<Entry<Word, u32>>::ARITY, 5);
    }

    #[test]
    fn entry_converts_from_and_into_parts() {
        let entry = Entry::from((3u32, true));
        assert_eq!(entry, Entry::new(3, true));
        assert_eq!(entry.into_parts(), (3, true));
    }

    #[test]
    fn entry_checks_both_members() {
        let fields = [ZERO, Felt::new(2)];
        assert_eq!(
            Entry::<u32, bool>::try_from_fields(&fields, ((), ())).unwrap_err(),
            FieldError::InvalidElement { value: 2, type_name: "bool" }
        );

        let entry = Entry::<u32, bool>::try_from_fields(&[Felt::new(5), ONE], ((), ())).unwrap();
        assert_eq!(entry, Entry::new(5, true));
    }
}
