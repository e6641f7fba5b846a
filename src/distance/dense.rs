//! Distance functions for dense `f32` slices.

/// Calculate the L1 (taxicab) distance between two vectors.
///
/// # Panics
///
/// Debug-panics if the vectors have different dimensions.
#[inline]
#[must_use]
pub fn l1_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Calculate the squared Euclidean (L2) distance between two vectors.
///
/// Avoids the sqrt for cases where only relative distances matter.
///
/// # Panics
///
/// Debug-panics if the vectors have different dimensions.
#[inline]
#[must_use]
pub fn l2_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Calculate the Euclidean (L2) distance between two vectors.
///
/// # Panics
///
/// Debug-panics if the vectors have different dimensions.
#[inline]
#[must_use]
pub fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    l2_distance_squared(a, b).sqrt()
}

/// Calculate the dot product between two vectors.
///
/// The extension's max-inner-product operator orders by the negated dot
/// product; callers negate as needed.
///
/// # Panics
///
/// Debug-panics if the vectors have different dimensions.
#[inline]
#[must_use]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Calculate the cosine distance (1 - cosine similarity) between two
/// vectors, in `[0, 2]`.
///
/// Returns 1.0 (similarity 0) if either vector has zero magnitude.
///
/// # Panics
///
/// Debug-panics if the vectors have different dimensions.
#[inline]
#[must_use]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    1.0 - dot / (norm_a * norm_b)
}
