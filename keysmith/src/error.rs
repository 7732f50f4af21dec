//! Error types for the keysmith library.
//!
//! Each stage of the codec has its own error enum so callers can match on
//! exactly the failures a call can produce. [`Error`] combines them for
//! callers that only need to report a failure.

/// Errors returned while building an [`Alphabet`](crate::Alphabet) or a
/// [`Codec`](crate::Codec).
///
/// A construction error never yields a partially built codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The alphabet contains no symbols.
    #[error("blank alphabet string")]
    EmptyAlphabet,

    /// A symbol appears more than once in the alphabet. Carries the first
    /// repeated symbol found in iteration order.
    #[error("the {0:?} item is repeated in the alphabet")]
    DuplicateSymbol(char),

    /// The key size, given as a sum of parts, is negative.
    #[error("incorrect key size: must be zero or positive, got {0}")]
    InvalidSize(i64),

    /// The sum of the key size parts does not fit the platform word size.
    #[error("key size overflow: the size parts do not fit in a usize")]
    SizeOverflow,
}

/// Errors returned when converting an id into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The id is not below the codec's total.
    #[error("{id} is large ID for key generation: must be less than {total}")]
    IdOutOfRange {
        /// The rejected id
        id: u64,
        /// The exclusive upper bound of the codec
        total: u64,
    },
}

/// Errors returned when converting a key back into an id.
///
/// All of these are caller-input errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The key does not have the codec's fixed length (counted in symbols).
    #[error("invalid key length: must be {expected} char(s) but got {actual} char(s)")]
    LengthMismatch {
        /// The fixed key size of the codec
        expected: usize,
        /// The number of symbols in the key
        actual: usize,
    },

    /// The key contains a symbol that is not in the alphabet. Carries the
    /// leftmost offending symbol.
    #[error("key contains a char that isn't set in the alphabet: {0:?}")]
    UnknownSymbol(char),

    /// The key is empty. Only reachable for dynamically sized codecs since a
    /// fixed size is always at least one.
    #[error("empty key")]
    EmptyKey,

    /// The value of the key does not fit in a u64.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// The key decodes to an id the codec would refuse to encode.
    #[error("key decodes to {id} which is not less than {total}")]
    IdOutOfRange {
        /// The decoded id
        id: u64,
        /// The exclusive upper bound of the codec
        total: u64,
    },
}

/// Top-level error for the keysmith library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Error building the codec
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Error encoding an id
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Error decoding a key
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
