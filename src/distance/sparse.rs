//! Distance functions for sparse vectors.
//!
//! Sparse vectors are `&[(u32, f32)]` slices sorted by index ascending, as
//! [`SparseVector::entries`](crate::types::SparseVector::entries) yields
//! them. All functions are single merge walks: O(n + m) in the two nonzero
//! counts, with entries present on only one side contributing against an
//! implicit zero.

use std::cmp::Ordering;

/// Calculate the dot product between two sparse vectors.
///
/// # Example
///
/// ```
/// use vecwire::distance::sparse_dot_product;
///
/// let a = [(0, 1.0), (2, 2.0), (5, 3.0)];
/// let b = [(1, 1.0), (2, 2.0), (5, 1.0)];
/// // Only indices 2 and 5 overlap: 2*2 + 3*1 = 7
/// assert!((sparse_dot_product(&a, &b) - 7.0).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn sparse_dot_product(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let mut result = 0.0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (index_a, value_a) = a[i];
        let (index_b, value_b) = b[j];

        match index_a.cmp(&index_b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result += value_a * value_b;
                i += 1;
                j += 1;
            }
        }
    }

    result
}

/// Calculate the L1 (taxicab) distance between two sparse vectors.
#[inline]
#[must_use]
pub fn sparse_l1_distance(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let mut result = 0.0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (index_a, value_a) = a[i];
        let (index_b, value_b) = b[j];

        match index_a.cmp(&index_b) {
            Ordering::Less => {
                result += value_a.abs();
                i += 1;
            }
            Ordering::Greater => {
                result += value_b.abs();
                j += 1;
            }
            Ordering::Equal => {
                result += (value_a - value_b).abs();
                i += 1;
                j += 1;
            }
        }
    }

    result += a[i..].iter().map(|&(_, value)| value.abs()).sum::<f32>();
    result += b[j..].iter().map(|&(_, value)| value.abs()).sum::<f32>();
    result
}

/// Calculate the squared Euclidean (L2) distance between two sparse vectors.
#[inline]
#[must_use]
pub fn sparse_l2_distance_squared(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let mut result = 0.0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (index_a, value_a) = a[i];
        let (index_b, value_b) = b[j];

        match index_a.cmp(&index_b) {
            Ordering::Less => {
                result += value_a * value_a;
                i += 1;
            }
            Ordering::Greater => {
                result += value_b * value_b;
                j += 1;
            }
            Ordering::Equal => {
                let diff = value_a - value_b;
                result += diff * diff;
                i += 1;
                j += 1;
            }
        }
    }

    result += a[i..].iter().map(|&(_, value)| value * value).sum::<f32>();
    result += b[j..].iter().map(|&(_, value)| value * value).sum::<f32>();
    result
}

/// Calculate the Euclidean (L2) distance between two sparse vectors.
#[inline]
#[must_use]
pub fn sparse_l2_distance(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    sparse_l2_distance_squared(a, b).sqrt()
}

/// Calculate the cosine distance (1 - cosine similarity) between two sparse
/// vectors, in `[0, 2]`.
///
/// Returns 1.0 (similarity 0) if either vector has zero magnitude.
#[inline]
#[must_use]
pub fn sparse_cosine_distance(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let dot = sparse_dot_product(a, b);
    let norm_a = a.iter().map(|&(_, value)| value * value).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|&(_, value)| value * value).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    1.0 - dot / (norm_a * norm_b)
}
