//! Sparse vector type with explicit dimension.

use crate::error::{MalformedInputError, ValidationError};
use crate::wire::Codec;

/// Maximum dimension for sparse vectors, matching the extension's
/// `SPARSEVEC_MAX_DIM`. Indices travel as `i32` on the wire, so this also
/// keeps every index well inside the positive range.
pub const MAX_SPARSE_DIMENSION: u32 = 1_000_000_000;

/// Binary header: dimension, nonzero count, reserved word.
const SPARSE_HEADER: usize = 12;

/// A sparse vector of `f32` components, the `sparsevec` wire type.
///
/// Stores only the nonzero entries as `(index, value)` pairs with indices
/// strictly ascending, plus the declared dimension. Zero entries are
/// implicit: construction rejects explicit zeros, and [`from_dense`] never
/// produces one.
///
/// [`from_dense`]: SparseVector::from_dense
///
/// # Example
///
/// ```
/// use vecwire::{Codec, SparseVector};
///
/// let sparse = SparseVector::from_dense(&[1.5, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
/// assert_eq!(sparse.nnz(), 3);
/// assert_eq!(sparse.encode_text(), "{1:1.5,3:2,5:3}/6");
/// assert_eq!(sparse.to_dense(), vec![1.5, 0.0, 2.0, 0.0, 3.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SparseVectorRepr", into = "SparseVectorRepr")
)]
pub struct SparseVector {
    dimension: u32,
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Create a sparse vector from its dimension and nonzero entries.
    ///
    /// Entries must already be sorted by index; the codec never re-sorts.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_SPARSE_DIMENSION`],
    /// an index is at or beyond the dimension, indices are not strictly
    /// ascending, or an entry carries an explicit zero value.
    pub fn new(dimension: u32, entries: Vec<(u32, f32)>) -> Result<Self, ValidationError> {
        if dimension > MAX_SPARSE_DIMENSION {
            return Err(ValidationError::DimensionTooLarge {
                dimension: dimension as usize,
                max: MAX_SPARSE_DIMENSION as usize,
            });
        }

        let mut previous: Option<u32> = None;
        for &(index, value) in &entries {
            if let Some(previous) = previous {
                if index <= previous {
                    return Err(ValidationError::IndexNotAscending { previous, current: index });
                }
            }
            if index >= dimension {
                return Err(ValidationError::IndexOutOfRange { index, dimension });
            }
            if value == 0.0 {
                return Err(ValidationError::ZeroValue { index });
            }
            previous = Some(index);
        }

        Ok(Self { dimension, entries })
    }

    /// Create a sparse vector from a dense slice, keeping every entry that
    /// is not exactly zero.
    ///
    /// `-0.0` compares equal to zero and is dropped; NaN does not and is
    /// kept. No epsilon threshold is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_SPARSE_DIMENSION`].
    pub fn from_dense(values: &[f32]) -> Result<Self, ValidationError> {
        if values.len() > MAX_SPARSE_DIMENSION as usize {
            return Err(ValidationError::DimensionTooLarge {
                dimension: values.len(),
                max: MAX_SPARSE_DIMENSION as usize,
            });
        }

        let entries = values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0.0)
            .map(|(index, &value)| (index as u32, value))
            .collect();

        Ok(Self { dimension: values.len() as u32, entries })
    }

    /// Scatter the stored entries into a zero-filled dense vector of length
    /// `dimension`.
    ///
    /// Exact inverse of [`from_dense`] for any input whose zero entries are
    /// exactly zero.
    ///
    /// [`from_dense`]: SparseVector::from_dense
    #[must_use]
    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0; self.dimension as usize];
        for &(index, value) in &self.entries {
            dense[index as usize] = value;
        }
        dense
    }

    /// The declared dimension.
    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// The stored `(index, value)` entries, sorted by index.
    #[must_use]
    pub fn entries(&self) -> &[(u32, f32)] {
        &self.entries
    }

    /// The number of stored (nonzero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl Codec for SparseVector {
    /// Decode the binary layout `[u32 dim][u32 nnz][u32 reserved=0]
    /// [i32 index x nnz][f32 value x nnz]`, all fields big-endian.
    fn decode_binary(bytes: &[u8]) -> Result<Self, MalformedInputError> {
        if bytes.len() < SPARSE_HEADER {
            return Err(MalformedInputError::Truncated {
                needed: SPARSE_HEADER,
                actual: bytes.len(),
            });
        }

        let dimension = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let nnz = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let reserved = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        if reserved != 0 {
            return Err(MalformedInputError::ReservedNotZero(reserved));
        }

        let expected = SPARSE_HEADER + nnz * 8;
        if bytes.len() != expected {
            return Err(MalformedInputError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let values_offset = SPARSE_HEADER + nnz * 4;
        let mut entries = Vec::with_capacity(nnz);
        for i in 0..nnz {
            let at = SPARSE_HEADER + i * 4;
            let index =
                i32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
            if index < 0 {
                return Err(MalformedInputError::NegativeIndex(index));
            }
            let at = values_offset + i * 4;
            let value =
                f32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
            entries.push((index as u32, value));
        }

        Ok(Self::new(dimension, entries)?)
    }

    fn encode_binary(&self) -> Vec<u8> {
        // nnz <= dimension <= MAX_SPARSE_DIMENSION, so both fit in u32.
        let nnz = self.entries.len() as u32;
        let mut bytes = Vec::with_capacity(SPARSE_HEADER + self.entries.len() * 8);
        bytes.extend_from_slice(&self.dimension.to_be_bytes());
        bytes.extend_from_slice(&nnz.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        for &(index, _) in &self.entries {
            bytes.extend_from_slice(&index.to_be_bytes());
        }
        for &(_, value) in &self.entries {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    /// Decode the text form `{p1:v1,p2:v2,...}/dim` with 1-indexed,
    /// strictly ascending positions.
    fn decode_text(text: &str) -> Result<Self, MalformedInputError> {
        let (body, dimension_str) = text.rsplit_once('/').ok_or_else(|| {
            MalformedInputError::Syntax("expected '/dimension' suffix".to_string())
        })?;
        let inner = body
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .ok_or_else(|| {
                MalformedInputError::Syntax("expected '{' and '}' delimiters".to_string())
            })?;

        let dimension: u32 = dimension_str
            .trim()
            .parse()
            .map_err(|_| MalformedInputError::InvalidNumber(dimension_str.to_string()))?;

        let mut entries = Vec::new();
        if !inner.is_empty() {
            for pair in inner.split(',') {
                let (position_str, value_str) = pair.split_once(':').ok_or_else(|| {
                    MalformedInputError::Syntax(format!("expected 'index:value' pair, got '{pair}'"))
                })?;

                let position: u32 = position_str
                    .trim()
                    .parse()
                    .map_err(|_| MalformedInputError::InvalidNumber(position_str.to_string()))?;
                if position == 0 || position > dimension {
                    return Err(MalformedInputError::PositionOutOfRange { position, dimension });
                }

                let value: f32 = value_str
                    .trim()
                    .parse()
                    .map_err(|_| MalformedInputError::InvalidNumber(value_str.to_string()))?;

                entries.push((position - 1, value));
            }
        }

        Ok(Self::new(dimension, entries)?)
    }

    fn encode_text(&self) -> String {
        let mut out = String::with_capacity(4 + self.entries.len() * 12);
        out.push('{');
        for (i, &(index, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // Positions are 1-indexed in the text grammar.
            out.push_str(&(index + 1).to_string());
            out.push(':');
            out.push_str(&value.to_string());
        }
        out.push_str("}/");
        out.push_str(&self.dimension.to_string());
        out
    }
}

/// Plain-data mirror of [`SparseVector`] so serde deserialization funnels
/// through the validating constructor.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SparseVectorRepr {
    dimension: u32,
    entries: Vec<(u32, f32)>,
}

#[cfg(feature = "serde")]
impl TryFrom<SparseVectorRepr> for SparseVector {
    type Error = ValidationError;

    fn try_from(repr: SparseVectorRepr) -> Result<Self, Self::Error> {
        Self::new(repr.dimension, repr.entries)
    }
}

#[cfg(feature = "serde")]
impl From<SparseVector> for SparseVectorRepr {
    fn from(vector: SparseVector) -> Self {
        Self { dimension: vector.dimension, entries: vector.entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let sparse = SparseVector::new(6, vec![(0, 1.5), (2, 2.0), (4, 3.0)]).unwrap();
        assert_eq!(sparse.dimension(), 6);
        assert_eq!(sparse.nnz(), 3);
        assert_eq!(sparse.entries(), &[(0, 1.5), (2, 2.0), (4, 3.0)]);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            SparseVector::new(3, vec![(3, 1.0)]).unwrap_err(),
            ValidationError::IndexOutOfRange { index: 3, dimension: 3 }
        );
    }

    #[test]
    fn test_new_rejects_non_ascending() {
        assert_eq!(
            SparseVector::new(10, vec![(2, 1.0), (1, 2.0)]).unwrap_err(),
            ValidationError::IndexNotAscending { previous: 2, current: 1 }
        );
        // Duplicates are a special case of non-ascending.
        assert_eq!(
            SparseVector::new(10, vec![(2, 1.0), (2, 2.0)]).unwrap_err(),
            ValidationError::IndexNotAscending { previous: 2, current: 2 }
        );
    }

    #[test]
    fn test_new_rejects_explicit_zero() {
        assert_eq!(
            SparseVector::new(10, vec![(1, 0.0)]).unwrap_err(),
            ValidationError::ZeroValue { index: 1 }
        );
    }

    #[test]
    fn test_from_dense_keeps_only_nonzeros() {
        let sparse = SparseVector::from_dense(&[1.5, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
        assert_eq!(sparse.entries(), &[(0, 1.5), (2, 2.0), (4, 3.0)]);
        assert_eq!(sparse.to_dense(), vec![1.5, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_from_dense_drops_negative_zero() {
        let sparse = SparseVector::from_dense(&[-0.0, 1.0]).unwrap();
        assert_eq!(sparse.entries(), &[(1, 1.0)]);
    }

    #[test]
    fn test_from_dense_keeps_nan() {
        let sparse = SparseVector::from_dense(&[0.0, f32::NAN]).unwrap();
        assert_eq!(sparse.nnz(), 1);
        assert!(sparse.entries()[0].1.is_nan());
    }

    #[test]
    fn test_empty_round_trips_to_all_zero() {
        let sparse = SparseVector::new(4, vec![]).unwrap();
        assert_eq!(sparse.to_dense(), vec![0.0; 4]);

        let decoded = SparseVector::decode_binary(&sparse.encode_binary()).unwrap();
        assert_eq!(decoded, sparse);
    }

    #[test]
    fn test_dimension_zero() {
        let sparse = SparseVector::new(0, vec![]).unwrap();
        assert_eq!(sparse.to_dense(), Vec::<f32>::new());
        assert_eq!(sparse.encode_text(), "{}/0");
        assert_eq!(SparseVector::decode_text("{}/0").unwrap(), sparse);
    }

    #[test]
    fn test_binary_layout() {
        let sparse = SparseVector::new(6, vec![(0, 1.5)]).unwrap();
        assert_eq!(
            sparse.encode_binary(),
            vec![
                0x00, 0x00, 0x00, 0x06, // dimension
                0x00, 0x00, 0x00, 0x01, // nnz
                0x00, 0x00, 0x00, 0x00, // reserved
                0x00, 0x00, 0x00, 0x00, // index 0
                0x3F, 0xC0, 0x00, 0x00, // 1.5
            ]
        );
    }

    #[test]
    fn test_binary_roundtrip() {
        let sparse = SparseVector::new(100, vec![(3, -1.5), (40, 0.25), (99, 7.0)]).unwrap();
        let decoded = SparseVector::decode_binary(&sparse.encode_binary()).unwrap();
        assert_eq!(decoded, sparse);
    }

    #[test]
    fn test_decode_binary_truncated() {
        assert_eq!(
            SparseVector::decode_binary(&[0u8; 8]).unwrap_err(),
            MalformedInputError::Truncated { needed: 12, actual: 8 }
        );
    }

    #[test]
    fn test_decode_binary_count_exceeds_buffer() {
        // Header claims 2 entries but carries none.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&2u32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        assert_eq!(
            SparseVector::decode_binary(&bytes).unwrap_err(),
            MalformedInputError::LengthMismatch { expected: 28, actual: 12 }
        );
    }

    #[test]
    fn test_decode_binary_index_out_of_range() {
        let sparse = SparseVector::new(10, vec![(5, 1.0)]).unwrap();
        let mut bytes = sparse.encode_binary();
        // Rewrite the dimension header to 5 so the stored index 5 is out of
        // range.
        bytes[0..4].copy_from_slice(&5u32.to_be_bytes());
        assert_eq!(
            SparseVector::decode_binary(&bytes).unwrap_err(),
            MalformedInputError::Invalid(ValidationError::IndexOutOfRange {
                index: 5,
                dimension: 5
            })
        );
    }

    #[test]
    fn test_decode_binary_non_ascending() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&10u32.to_be_bytes());
        bytes.extend_from_slice(&2u32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(&4i32.to_be_bytes());
        bytes.extend_from_slice(&2i32.to_be_bytes());
        bytes.extend_from_slice(&1.0f32.to_be_bytes());
        bytes.extend_from_slice(&2.0f32.to_be_bytes());
        assert_eq!(
            SparseVector::decode_binary(&bytes).unwrap_err(),
            MalformedInputError::Invalid(ValidationError::IndexNotAscending {
                previous: 4,
                current: 2
            })
        );
    }

    #[test]
    fn test_decode_binary_negative_index() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&10u32.to_be_bytes());
        bytes.extend_from_slice(&1u32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(&(-1i32).to_be_bytes());
        bytes.extend_from_slice(&1.0f32.to_be_bytes());
        assert_eq!(
            SparseVector::decode_binary(&bytes).unwrap_err(),
            MalformedInputError::NegativeIndex(-1)
        );
    }

    #[test]
    fn test_text_format() {
        let sparse = SparseVector::from_dense(&[1.5, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
        assert_eq!(sparse.encode_text(), "{1:1.5,3:2,5:3}/6");
        assert_eq!(SparseVector::decode_text("{1:1.5,3:2,5:3}/6").unwrap(), sparse);
    }

    #[test]
    fn test_decode_text_position_out_of_range() {
        assert_eq!(
            SparseVector::decode_text("{0:1.5}/6").unwrap_err(),
            MalformedInputError::PositionOutOfRange { position: 0, dimension: 6 }
        );
        assert_eq!(
            SparseVector::decode_text("{7:1.5}/6").unwrap_err(),
            MalformedInputError::PositionOutOfRange { position: 7, dimension: 6 }
        );
    }

    #[test]
    fn test_decode_text_non_ascending_positions() {
        assert_eq!(
            SparseVector::decode_text("{3:1.5,2:2}/6").unwrap_err(),
            MalformedInputError::Invalid(ValidationError::IndexNotAscending {
                previous: 2,
                current: 1
            })
        );
        assert!(SparseVector::decode_text("{2:1.5,2:2}/6").is_err());
    }

    #[test]
    fn test_decode_text_malformed_structure() {
        assert!(matches!(
            SparseVector::decode_text("{1:1.5}").unwrap_err(),
            MalformedInputError::Syntax(_)
        ));
        assert!(matches!(
            SparseVector::decode_text("1:1.5/6").unwrap_err(),
            MalformedInputError::Syntax(_)
        ));
        assert!(matches!(
            SparseVector::decode_text("{1}/6").unwrap_err(),
            MalformedInputError::Syntax(_)
        ));
        assert!(matches!(
            SparseVector::decode_text("{1:x}/6").unwrap_err(),
            MalformedInputError::InvalidNumber(_)
        ));
    }
}
