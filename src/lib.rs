//! # vecwire
//!
//! Binary and text wire codecs for the pgvector extension's value types:
//! dense vectors (`vector`), half-precision vectors (`halfvec`), sparse
//! vectors (`sparsevec`), and fixed-length bit strings (`bit`).
//!
//! The crate is the codec layer a database driver or ORM adapter builds on:
//! it owns the exact byte layouts and text grammars the extension parses,
//! and nothing else. No connections, no SQL, no indexing - callers hand in
//! bytes or text and get validated value objects back, and vice versa.
//!
//! Every operation is a pure, deterministic transform. The value types are
//! immutable and validate their invariants once at construction, so encoding
//! never fails and concurrent use needs no synchronization.
//!
//! # Example
//!
//! ```
//! use vecwire::{Codec, SparseVector, Vector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let vector = Vector::new(vec![1.5, 2.0, 3.0])?;
//! assert_eq!(vector.encode_text(), "[1.5,2,3]");
//!
//! let bytes = vector.encode_binary();
//! assert_eq!(Vector::decode_binary(&bytes)?, vector);
//!
//! let sparse = SparseVector::from_dense(&[1.5, 0.0, 2.0, 0.0, 3.0, 0.0])?;
//! assert_eq!(sparse.encode_text(), "{1:1.5,3:2,5:3}/6");
//! assert_eq!(sparse.to_dense(), vec![1.5, 0.0, 2.0, 0.0, 3.0, 0.0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`types`] - the four immutable value types
//! - [`wire`] - the [`Codec`] trait and tag-dispatched decoding
//! - [`registry`] - OID-keyed codec lookup for driver glue
//! - [`f16`] - half-precision bit-level conversion
//! - [`distance`] - numeric distance functions over the value types
//! - [`error`] - error types

pub mod distance;
pub mod error;
pub mod f16;
pub mod registry;
pub mod types;
pub mod wire;

pub use error::{MalformedInputError, ValidationError};
pub use registry::CodecRegistry;
pub use types::{BitString, HalfVector, SparseVector, Vector};
pub use wire::{Codec, VectorKind, VectorValue};
