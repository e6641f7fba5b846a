//! Numeric distance functions over the vector value types.
//!
//! These are the client-side counterparts of the extension's distance
//! operators: L1, L2, inner product, and cosine for dense and sparse
//! vectors, Hamming and Jaccard for bit strings. They are plain pure
//! functions; query building and indexing stay with the extension.

pub mod bit;
pub mod dense;
pub mod sparse;

pub use bit::{hamming_distance, jaccard_distance};
pub use dense::{cosine_distance, dot_product, l1_distance, l2_distance, l2_distance_squared};
pub use sparse::{
    sparse_cosine_distance, sparse_dot_product, sparse_l1_distance, sparse_l2_distance,
    sparse_l2_distance_squared,
};
