use miden_crypto::hash::{rpo::Rpo256, rpx::Rpx256};

use crate::{Felt, FieldSerializable, Word};

// FIELD HASHER
// ================================================================================================

/// An algebraic hash function which maps a sequence of field elements to a [`Word`].
///
/// Implementors are expected to be collision resistant over field element inputs; equality of
/// [`Hashable`] values is defined as equality of their digests.
pub trait FieldHasher {
    fn hash_elements(elements: &[Felt]) -> Word;
}

impl FieldHasher for Rpo256 {
    fn hash_elements(elements: &[Felt]) -> Word {
        Rpo256::hash_elements(elements)
    }
}

impl FieldHasher for Rpx256 {
    fn hash_elements(elements: &[Felt]) -> Word {
        Rpx256::hash_elements(elements)
    }
}

// HASHABLE
// ================================================================================================

/// Fingerprinting and fixed-cost equality for every [`FieldSerializable`] type.
///
/// Comparing two values costs one hash per side and one digest comparison, regardless of how
/// many field elements the values encode to.
pub trait Hashable: FieldSerializable {
    /// Returns the digest of the field encoding of `self` under the hash function `H`.
    fn fingerprint<H: FieldHasher>(&self) -> Word {
        H::hash_elements(&self.to_fields())
    }

    /// Returns true if `self` and `other` have the same fingerprint under `H`.
    ///
    /// Auxiliary payloads do not take part in the comparison.
    fn fingerprint_eq<H: FieldHasher>(&self, other: &Self) -> bool {
        self.fingerprint::<H>() == other.fingerprint::<H>()
    }
}

impl<T: FieldSerializable> Hashable for T {}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ONE, ZERO};

    #[test]
    fn fingerprint_matches_hash_of_encoding() {
        let word = Word::new([ONE, ZERO, ONE, Felt::new(7)]);
        assert_eq!(word.fingerprint::<Rpo256>(), Rpo256::hash_elements(word.as_elements()));
        assert_eq!(word.fingerprint::<Rpx256>(), Rpx256::hash_elements(word.as_elements()));
    }

    #[test]
    fn fingerprint_depends_on_hasher() {
        let value = 42u32;
        assert_ne!(value.fingerprint::<Rpo256>(), value.fingerprint::<Rpx256>());
    }

    #[test]
    fn fingerprint_eq_ignores_encoding_structure() {
        // a pair and an array with the same field encoding are indistinguishable by fingerprint
        let pair = (Felt::new(3), Felt::new(5));
        let array = [Felt::new(3), Felt::new(5)];
        assert_eq!(pair.fingerprint::<Rpo256>(), array.fingerprint::<Rpo256>());

        assert!(7u32.fingerprint_eq::<Rpo256>(&7u32));
        assert!(!7u32.fingerprint_eq::<Rpo256>(&8u32));
    }
}
