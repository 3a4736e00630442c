use alloc::vec::Vec;
use core::{array, fmt::Debug};

use crate::{Felt, FieldError, ONE, PrimeCharacteristicRing, PrimeField64, WORD_SIZE, Word, ZERO};


// FIELD SERIALIZABLE
// ================================================================================================

/// A value with a fixed-size encoding as a sequence of field elements.
///
/// The number of elements in the encoding ([`FieldSerializable::ARITY`]) is a property of the
/// type and never depends on the contents of a value. Data which does not round-trip through
/// field elements (e.g., names or other metadata) is carried separately in an auxiliary payload,
/// which is never hashed or compared.
///
/// Implementations must guarantee that `from_fields(to_fields(x), to_aux(x))` reproduces `x`.
pub trait FieldSerializable: Sized {
    /// Number of field elements in the encoding of every value of this type.
    const ARITY: usize;

    /// Non-field payload carried alongside the field encoding.
    type Aux: Clone + Debug + Default;

    /// Appends exactly [`Self::ARITY`] field elements encoding `self` to `target`.
    fn write_fields(&self, target: &mut Vec<Felt>);

    /// Returns the auxiliary payload of `self`.
    fn to_aux(&self) -> Self::Aux;

    /// Builds a value from its field encoding and auxiliary payload without validating either.
    ///
    /// # Panics
    /// Panics if `fields` holds fewer than [`Self::ARITY`] elements.
    fn from_fields(fields: &[Felt], aux: Self::Aux) -> Self;

    /// Checks that `fields` is a canonical encoding of some value of this type.
    ///
    /// The caller guarantees that `fields` holds exactly [`Self::ARITY`] elements.
    fn check(fields: &[Felt]) -> Result<(), FieldError> {
        let _ = fields;
        Ok(())
    }

    // PROVIDED METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns the field encoding of `self`.
    fn to_fields(&self) -> Vec<Felt> {
        let mut result = Vec::with_capacity(Self::ARITY);
        self.write_fields(&mut result);
        result
    }

    /// Builds a value from its field encoding, validating both the number of elements and the
    /// elements themselves.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the number of elements differs from [`Self::ARITY`].
    /// - any element is out of range for the type it encodes.
    fn try_from_fields(fields: &[Felt], aux: Self::Aux) -> Result<Self, FieldError> {
        if fields.len() != Self::ARITY {
            return Err(FieldError::ArityMismatch {
                expected: Self::ARITY,
                actual: fields.len(),
            });
        }
        Self::check(fields)?;
        Ok(Self::from_fields(fields, aux))
    }
}

// FIELD PRIMITIVES
// ================================================================================================

impl FieldSerializable for Felt {
    const ARITY: usize = 1;
    type Aux = ();

    fn write_fields(&self, target: &mut Vec<Felt>) {
        target.push(*self);
    }

    fn to_aux(&self) -> Self::Aux {}

    fn from_fields(fields: &[Felt], _aux: Self::Aux) -> Self {
        fields[0]
    }
}

impl FieldSerializable for Word {
    const ARITY: usize = WORD_SIZE;
    type Aux = ();

    fn write_fields(&self, target: &mut Vec<Felt>) {
        target.extend_from_slice(self.as_elements());
    }

    fn to_aux(&self) -> Self::Aux {}

    fn from_fields(fields: &[Felt], _aux: Self::Aux) -> Self {
        Word::new([fields[0], fields[1], fields[2], fields[3]])
    }
}

impl FieldSerializable for bool {
    const ARITY: usize = 1;
    type Aux = ();

    fn write_fields(&self, target: &mut Vec<Felt>) {
        target.push(Felt::from_bool(*self));
    }

    fn to_aux(&self) -> Self::Aux {}

    fn from_fields(fields: &[Felt], _aux: Self::Aux) -> Self {
        fields[0] == ONE
    }

    fn check(fields: &[Felt]) -> Result<(), FieldError> {
        let value = fields[0];
        if value != ZERO && value != ONE {
            return Err(FieldError::InvalidElement {
                value: value.as_canonical_u64(),
                type_name: "bool",
            });
        }
        Ok(())
    }
}

macro_rules! impl_field_serializable_for_uint {
    ($($ty:ty),+) => {
        $(
            impl FieldSerializable for $ty {
                const ARITY: usize = 1;
                type Aux = ();

                fn write_fields(&self, target: &mut Vec<Felt>) {
                    target.push(Felt::from_u64(u64::from(*self)));
                }

                fn to_aux(&self) -> Self::Aux {}

                fn from_fields(fields: &[Felt], _aux: Self::Aux) -> Self {
                    fields[0].as_canonical_u64() as $ty
                }

                fn check(fields: &[Felt]) -> Result<(), FieldError> {
                    let value = fields[0].as_canonical_u64();
                    if value > u64::from(<$ty>::MAX) {
                        return Err(FieldError::InvalidElement {
                            value,
                            type_name: stringify!($ty),
                        });
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_field_serializable_for_uint!(u8, u16, u32);

// COMPOSITES
// ================================================================================================

impl<T: FieldSerializable, const N: usize> FieldSerializable for [T; N] {
    const ARITY: usize = N * T::ARITY;
    type Aux = Vec<T::Aux>;

    fn write_fields(&self, target: &mut Vec<Felt>) {
        for item in self {
            item.write_fields(target);
        }
    }

    fn to_aux(&self) -> Self::Aux {
        self.iter().map(T::to_aux).collect()
    }

    fn from_fields(fields: &[Felt], aux: Self::Aux) -> Self {
        let mut aux = aux.into_iter();
        array::from_fn(|i| {
            let start = i * T::ARITY;
            T::from_fields(&fields[start..start + T::ARITY], aux.next().unwrap_or_default())
        })
    }

    fn check(fields: &[Felt]) -> Result<(), FieldError> {
        for i in 0..N {
            let start = i * T::ARITY;
            T::check(&fields[start..start + T::ARITY])?;
        }
        Ok(())
    }
}

impl<A: FieldSerializable, B: FieldSerializable> FieldSerializable for (A, B) {
    const ARITY: usize = A::ARITY + B::ARITY;
    type Aux = (A::Aux, B::Aux);

    fn write_fields(&self, target: &mut Vec<Felt>) {
        self.0.write_fields(target);
        self.1.write_fields(target);
    }

    fn to_aux(&self) -> Self::Aux {
        (self.0.to_aux(), self.1.to_aux())
    }

    fn from_fields(fields: &[Felt], aux: Self::Aux) -> Self {
        let (first, second) = fields.split_at(A::ARITY);
        (A::from_fields(first, aux.0), B::from_fields(second, aux.1))
    }

    fn check(fields: &[Felt]) -> Result<(), FieldError> {
        let (first, second) = fields.split_at(A::ARITY);
        A::check(first)?;
        B::check(second)
    }
}
