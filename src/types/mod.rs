//! The four immutable vector value types.
//!
//! Each type validates its invariants once, at construction; encoding an
//! already-constructed value never fails. Decoded wire input funnels through
//! the same constructors, so every live value upholds its invariants.
//!
//! - [`Vector`] - dense `f32` vector (`vector`)
//! - [`HalfVector`] - dense half-precision vector (`halfvec`)
//! - [`SparseVector`] - nonzero `(index, value)` entries plus a declared
//!   dimension (`sparsevec`)
//! - [`BitString`] - fixed-length packed bit string (`bit`)

mod bit;
mod dense;
mod half;
mod sparse;

pub use bit::{BitString, MAX_BIT_LENGTH};
pub use dense::Vector;
pub use half::HalfVector;
pub use sparse::{SparseVector, MAX_SPARSE_DIMENSION};

/// Maximum dimension for dense and half-precision vectors, matching the
/// extension's `VECTOR_MAX_DIM`. Comfortably inside the `u16` dimension
/// field of their binary headers.
pub const MAX_DIMENSION: usize = 16000;
