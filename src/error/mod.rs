//! Error types for the codec crate.

use thiserror::Error;

/// Errors raised when constructing a vector value from caller-supplied data.
///
/// Construction is the single validation gate: a value that constructs
/// successfully always encodes successfully, in both binary and text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Dimension exceeds the maximum the wire format supports.
    #[error("dimension {dimension} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// The requested dimension.
        dimension: usize,
        /// The maximum supported dimension.
        max: usize,
    },

    /// Sparse index at or beyond the declared dimension.
    #[error("index {index} out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// The offending 0-based index.
        index: u32,
        /// The declared dimension.
        dimension: u32,
    },

    /// Sparse indices must be strictly ascending, with no duplicates.
    #[error("indices must be strictly ascending: index {current} follows {previous}")]
    IndexNotAscending {
        /// The index preceding the violation.
        previous: u32,
        /// The index that is not greater than `previous`.
        current: u32,
    },

    /// Sparse entries must be nonzero; zero entries are implicit.
    #[error("explicit zero value at index {index}; zero entries are implicit")]
    ZeroValue {
        /// The 0-based index carrying the zero value.
        index: u32,
    },

    /// Packed buffer length disagrees with the declared bit length.
    #[error("packed data for {len} bits needs {expected} bytes, got {actual}")]
    PackedLengthMismatch {
        /// The declared length in bits.
        len: usize,
        /// The required number of packed bytes.
        expected: usize,
        /// The number of bytes supplied.
        actual: usize,
    },

    /// Unused trailing bits in the final packed byte must be zero.
    #[error("nonzero padding bits in final byte")]
    PaddingNotZero,

    /// Bit length exceeds what the wire header can carry.
    #[error("bit length {len} exceeds maximum of {max}")]
    BitLengthTooLarge {
        /// The requested length in bits.
        len: usize,
        /// The maximum supported length.
        max: usize,
    },

    /// An OID was registered twice.
    #[error("oid {0} already registered")]
    DuplicateOid(u32),

    /// A codec for this type was registered twice.
    #[error("codec for type '{0}' already registered")]
    DuplicateKind(&'static str),
}

/// Errors raised when decoding wire input that violates its format contract.
///
/// All decode failures are deterministic: the same input always produces the
/// same error, so a failure is never transient.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedInputError {
    /// Buffer shorter than its own header requires.
    #[error("truncated input: need at least {needed} bytes, got {actual}")]
    Truncated {
        /// The minimum number of bytes required.
        needed: usize,
        /// The number of bytes supplied.
        actual: usize,
    },

    /// Buffer length disagrees with the element count in the header.
    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// The length implied by the header.
        expected: usize,
        /// The length of the supplied buffer.
        actual: usize,
    },

    /// Reserved header field must be zero.
    #[error("reserved field must be zero, got {0}")]
    ReservedNotZero(u32),

    /// A sparse index on the wire was negative.
    #[error("negative index {0}")]
    NegativeIndex(i32),

    /// A 1-indexed sparse position outside `[1, dimension]`.
    #[error("position {position} out of range [1, {dimension}]")]
    PositionOutOfRange {
        /// The offending 1-based position.
        position: u32,
        /// The declared dimension.
        dimension: u32,
    },

    /// A text element failed numeric parsing.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Unexpected character in a text representation.
    #[error("invalid character '{found}' at position {position}")]
    InvalidCharacter {
        /// The character found.
        found: char,
        /// Its byte-independent character position in the input.
        position: usize,
    },

    /// Structural problem with a text representation.
    #[error("malformed text: {0}")]
    Syntax(String),

    /// Decoded content violates a construction invariant.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
