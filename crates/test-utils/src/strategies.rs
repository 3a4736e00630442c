//! `proptest` strategies for field elements and words.

use proptest::prelude::*;

use super::{Felt, Word};

/// Any field element, including non-canonical `u64` inputs which are reduced on construction.
pub fn any_felt() -> impl Strategy<Value = Felt> {
    any::<u64>().prop_map(Felt::new)
}

/// Any word.
pub fn any_word() -> impl Strategy<Value = Word> {
    prop::array::uniform4(any_felt()).prop_map(Word::new)
}

/// A non-zero word, i.e., a word which never collides with the null key of a word-keyed map.
pub fn non_zero_word() -> impl Strategy<Value = Word> {
    any_word().prop_filter("word must not be zero", |word| {
        word.as_elements().iter().any(|element| *element != Felt::new(0))
    })
}

/// A small non-zero key, so that generated maps frequently contain repeated keys.
pub fn small_key(max: u32) -> impl Strategy<Value = u32> {
    1..=max
}

/// A flat field encoding of `len` elements.
pub fn any_fields(len: usize) -> impl Strategy<Value = Vec<Felt>> {
    prop::collection::vec(any_felt(), len..=len)
}
