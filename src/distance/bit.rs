//! Distance functions for bit strings.
//!
//! Both distances reduce to popcounts over the packed bytes, which compile
//! to hardware popcount instructions. Padding bits are zero on both sides by
//! construction, so no masking is needed.

use crate::types::BitString;

/// Calculate the Hamming distance: the number of positions where the bits
/// differ.
///
/// # Panics
///
/// Debug-panics if the bit strings have different lengths.
///
/// # Example
///
/// ```
/// use vecwire::{distance::hamming_distance, BitString, Codec};
///
/// let a = BitString::decode_text("11110000").unwrap();
/// let b = BitString::decode_text("10101010").unwrap();
/// assert_eq!(hamming_distance(&a, &b), 4);
/// ```
#[inline]
#[must_use]
pub fn hamming_distance(a: &BitString, b: &BitString) -> u32 {
    debug_assert_eq!(a.len(), b.len(), "bit strings must have same length");

    a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .map(|(&x, &y)| (x ^ y).count_ones())
        .sum()
}

/// Calculate the Jaccard distance: `1 - |A AND B| / |A OR B|`.
///
/// Returns 0.0 if both bit strings are all zeros (empty sets are identical
/// by convention).
///
/// # Panics
///
/// Debug-panics if the bit strings have different lengths.
#[inline]
#[must_use]
pub fn jaccard_distance(a: &BitString, b: &BitString) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "bit strings must have same length");

    let mut intersection = 0u32;
    let mut union = 0u32;
    for (&x, &y) in a.as_bytes().iter().zip(b.as_bytes().iter()) {
        intersection += (x & y).count_ones();
        union += (x | y).count_ones();
    }

    if union == 0 {
        return 0.0;
    }

    1.0 - intersection as f32 / union as f32
}
