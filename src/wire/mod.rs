//! The codec trait and tag-dispatched value handling.
//!
//! Every value type implements [`Codec`]: two symmetric transforms between
//! the value and its binary wire layout, and two between the value and its
//! canonical text form. [`VectorKind`] names the closed set of wire types,
//! and [`VectorValue`] carries any decoded value together with its tag, so
//! callers that handle mixed columns dispatch on an explicit tag rather than
//! runtime type inspection.

use std::fmt;

use crate::error::MalformedInputError;
use crate::types::{BitString, HalfVector, SparseVector, Vector};

/// Symmetric binary and text wire transforms for one value type.
///
/// Decoding validates the full format contract and fails with
/// [`MalformedInputError`] on any violation; encoding a constructed value is
/// infallible. All four operations are pure: no state, no I/O, safe to call
/// from any number of threads at once.
pub trait Codec: Sized {
    /// Decode a value from its binary wire layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer violates the format contract.
    fn decode_binary(bytes: &[u8]) -> Result<Self, MalformedInputError>;

    /// Encode the value into its binary wire layout.
    fn encode_binary(&self) -> Vec<u8>;

    /// Decode a value from its canonical text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the text violates the format grammar.
    fn decode_text(text: &str) -> Result<Self, MalformedInputError>;

    /// Encode the value into its canonical text form.
    fn encode_text(&self) -> String;
}

/// The closed set of wire types, tagged by the extension's column type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    /// Dense single-precision vector (`vector`).
    Vector,
    /// Dense half-precision vector (`halfvec`).
    HalfVec,
    /// Sparse vector (`sparsevec`).
    SparseVec,
    /// Fixed-length bit string (`bit`).
    Bit,
}

impl VectorKind {
    /// All four kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Vector, Self::HalfVec, Self::SparseVec, Self::Bit];

    /// The extension's column type name for this kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::HalfVec => "halfvec",
            Self::SparseVec => "sparsevec",
            Self::Bit => "bit",
        }
    }

    /// Look up a kind by the extension's column type name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A decoded value of any of the four wire types, carrying its tag.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorValue {
    /// A dense single-precision vector.
    Vector(Vector),
    /// A dense half-precision vector.
    HalfVec(HalfVector),
    /// A sparse vector.
    SparseVec(SparseVector),
    /// A fixed-length bit string.
    Bit(BitString),
}

impl VectorValue {
    /// The tag for this value.
    #[must_use]
    pub const fn kind(&self) -> VectorKind {
        match self {
            Self::Vector(_) => VectorKind::Vector,
            Self::HalfVec(_) => VectorKind::HalfVec,
            Self::SparseVec(_) => VectorKind::SparseVec,
            Self::Bit(_) => VectorKind::Bit,
        }
    }

    /// Decode a binary buffer as the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer violates that kind's format contract.
    pub fn decode_binary(kind: VectorKind, bytes: &[u8]) -> Result<Self, MalformedInputError> {
        match kind {
            VectorKind::Vector => Vector::decode_binary(bytes).map(Self::Vector),
            VectorKind::HalfVec => HalfVector::decode_binary(bytes).map(Self::HalfVec),
            VectorKind::SparseVec => SparseVector::decode_binary(bytes).map(Self::SparseVec),
            VectorKind::Bit => BitString::decode_binary(bytes).map(Self::Bit),
        }
    }

    /// Decode a text representation as the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the text violates that kind's grammar.
    pub fn decode_text(kind: VectorKind, text: &str) -> Result<Self, MalformedInputError> {
        match kind {
            VectorKind::Vector => Vector::decode_text(text).map(Self::Vector),
            VectorKind::HalfVec => HalfVector::decode_text(text).map(Self::HalfVec),
            VectorKind::SparseVec => SparseVector::decode_text(text).map(Self::SparseVec),
            VectorKind::Bit => BitString::decode_text(text).map(Self::Bit),
        }
    }

    /// Encode the value into its binary wire layout.
    #[must_use]
    pub fn encode_binary(&self) -> Vec<u8> {
        match self {
            Self::Vector(v) => v.encode_binary(),
            Self::HalfVec(v) => v.encode_binary(),
            Self::SparseVec(v) => v.encode_binary(),
            Self::Bit(v) => v.encode_binary(),
        }
    }

    /// Encode the value into its canonical text form.
    #[must_use]
    pub fn encode_text(&self) -> String {
        match self {
            Self::Vector(v) => v.encode_text(),
            Self::HalfVec(v) => v.encode_text(),
            Self::SparseVec(v) => v.encode_text(),
            Self::Bit(v) => v.encode_text(),
        }
    }
}

impl From<Vector> for VectorValue {
    fn from(value: Vector) -> Self {
        Self::Vector(value)
    }
}

impl From<HalfVector> for VectorValue {
    fn from(value: HalfVector) -> Self {
        Self::HalfVec(value)
    }
}

impl From<SparseVector> for VectorValue {
    fn from(value: SparseVector) -> Self {
        Self::SparseVec(value)
    }
}

impl From<BitString> for VectorValue {
    fn from(value: BitString) -> Self {
        Self::Bit(value)
    }
}
