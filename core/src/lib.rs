#![no_std]

//! A fixed-capacity key/value map whose operations have a data-independent execution shape.
//!
//! Every lookup, update and deletion performed on a [`FixedMap`] visits all of its slots exactly
//! once and combines the per-slot results through arithmetic selection over field elements, so
//! the sequence of steps never reveals whether a key was present or where it was stored. This
//! makes the map usable inside computations whose trace is later proven.

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use miden_crypto::{
    EMPTY_WORD, Felt, ONE, PrimeCharacteristicRing, PrimeField64, WORD_SIZE, Word, ZERO,
};

pub mod crypto {
    pub mod hash {
        pub use miden_crypto::hash::{rpo::Rpo256, rpx::Rpx256};
    }
}

pub mod errors;
pub use errors::{FieldError, MapError};

mod field;
pub use field::FieldSerializable;

mod hash;
pub use hash::{FieldHasher, Hashable};

pub mod select;

mod entry;
pub use entry::Entry;

mod sentinel;
pub use sentinel::NullSentinel;

mod map;
pub use map::FixedMap;
