// FIELD ERROR
// ================================================================================================

/// Errors raised while decoding a value from its field element encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("expected {expected} field elements, but received {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("field element {value} is not a valid encoding of {type_name}")]
    InvalidElement { value: u64, type_name: &'static str },
}

// MAP ERROR
// ================================================================================================

/// Errors raised while constructing a [`FixedMap`](crate::FixedMap).
///
/// Lookups, updates and deletions never fail: a miss is reported through their return values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map capacity is {capacity}, but {actual} initial entries were provided")]
    CapacityExceeded { capacity: usize, actual: usize },
    #[error("entry at slot {slot} has an invalid field encoding")]
    InvalidEntry {
        slot: usize,
        #[source]
        source: FieldError,
    },
    #[error("map of capacity {capacity} has an invalid field encoding")]
    InvalidEncoding {
        capacity: usize,
        #[source]
        source: FieldError,
    },
}
