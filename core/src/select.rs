//! Branch-free comparison and selection primitives.
//!
//! Every function in this module performs the same sequence of operations regardless of the
//! values it is given. Selector bits are field elements constrained to `{0, 1}`; selecting between
//! two encodings is done arithmetically as `bit * (a - b) + b`, element by element.

use alloc::vec::Vec;

use crate::{Felt, FieldSerializable, ONE, PrimeCharacteristicRing, PrimeField64, ZERO};

/// Returns [`ONE`] if `a` and `b` hold the same elements and [`ZERO`] otherwise.
///
/// All element pairs are compared; the comparison does not stop at the first difference.
pub fn felts_eq(a: &[Felt], b: &[Felt]) -> Felt {
    debug_assert_eq!(a.len(), b.len(), "compared encodings must have the same length");
    let equal = a.iter().zip(b).fold(a.len() == b.len(), |acc, (x, y)| acc & (x == y));
    Felt::from_bool(equal)
}

/// Writes `bit * (if_true - if_false) + if_false` into `target`, element by element.
pub fn select_fields(bit: Felt, if_true: &[Felt], if_false: &[Felt], target: &mut Vec<Felt>) {
    debug_assert!(is_bit(bit), "selector must be 0 or 1");
    debug_assert_eq!(if_true.len(), if_false.len(), "selected encodings must have the same length");
    target.extend(if_true.iter().zip(if_false).map(|(&t, &f)| bit * (t - f) + f));
}

/// Returns a copy of `if_true` when `bit` is [`ONE`] and of `if_false` when it is [`ZERO`].
///
/// Auxiliary payloads live outside of the field encoding, so they are selected by indexing with
/// the selector bit instead of arithmetically. Only the selected payload is cloned; aux selection
/// is therefore not covered by the constant-shape guarantee of the arithmetic selection.
pub fn select_aux<A: Clone>(bit: Felt, if_true: &A, if_false: &A) -> A {
    debug_assert!(is_bit(bit), "selector must be 0 or 1");
    let candidates = [if_false, if_true];
    candidates[bit.as_canonical_u64() as usize & 1].clone()
}

/// Returns `if_true` when `bit` is [`ONE`] and `if_false` when it is [`ZERO`].
///
/// The result is decoded from the arithmetic selection of both field encodings.
pub fn select<T: FieldSerializable>(bit: Felt, if_true: &T, if_false: &T) -> T {
    let mut fields = Vec::with_capacity(T::ARITY);
    select_fields(bit, &if_true.to_fields(), &if_false.to_fields(), &mut fields);
    let aux = select_aux(bit, &if_true.to_aux(), &if_false.to_aux());
    T::from_fields(&fields, aux)
}

/// Returns true if `value` is a valid selector bit.
pub fn is_bit(value: Felt) -> bool {
    value == ZERO || value == ONE
}

// TESTS
// ================================================================================================
