//! Dense single-precision vector type.

use crate::error::{MalformedInputError, ValidationError};
use crate::wire::Codec;

use super::MAX_DIMENSION;

/// A dense vector of `f32` components, the `vector` wire type.
///
/// Immutable after construction. Construction is the validation gate: a
/// `Vector` that constructs successfully always encodes successfully.
///
/// # Example
///
/// ```
/// use vecwire::{Codec, Vector};
///
/// let vector = Vector::new(vec![1.5, 2.0, 3.0]).unwrap();
/// assert_eq!(vector.dimension(), 3);
/// assert_eq!(vector.encode_text(), "[1.5,2,3]");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f32>", into = "Vec<f32>")
)]
pub struct Vector {
    values: Vec<f32>,
}

impl Vector {
    /// Create a vector from its components.
    ///
    /// Dimension 0 is permitted; the extension rejects empty vectors
    /// server-side, but the wire format represents them fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_DIMENSION`].
    pub fn new(values: Vec<f32>) -> Result<Self, ValidationError> {
        if values.len() > MAX_DIMENSION {
            return Err(ValidationError::DimensionTooLarge {
                dimension: values.len(),
                max: MAX_DIMENSION,
            });
        }
        Ok(Self { values })
    }

    /// Create a vector by narrowing `f64` components to `f32`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_DIMENSION`].
    pub fn from_f64(values: &[f64]) -> Result<Self, ValidationError> {
        Self::new(values.iter().map(|&v| v as f32).collect())
    }

    /// The number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// The components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Consume the vector and return its components.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

impl TryFrom<Vec<f32>> for Vector {
    type Error = ValidationError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Vector> for Vec<f32> {
    fn from(vector: Vector) -> Self {
        vector.values
    }
}

/// Header size shared by the `vector` and `halfvec` binary layouts.
pub(crate) const DENSE_HEADER: usize = 4;

impl Codec for Vector {
    /// Decode the binary layout `[u16 dim][u16 reserved=0][f32 x dim]`,
    /// all fields big-endian.
    fn decode_binary(bytes: &[u8]) -> Result<Self, MalformedInputError> {
        if bytes.len() < DENSE_HEADER {
            return Err(MalformedInputError::Truncated {
                needed: DENSE_HEADER,
                actual: bytes.len(),
            });
        }

        let dimension = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
        let reserved = u16::from_be_bytes([bytes[2], bytes[3]]);
        if reserved != 0 {
            return Err(MalformedInputError::ReservedNotZero(u32::from(reserved)));
        }

        let expected = DENSE_HEADER + dimension * 4;
        if bytes.len() != expected {
            return Err(MalformedInputError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut values = Vec::with_capacity(dimension);
        for chunk in bytes[DENSE_HEADER..].chunks_exact(4) {
            values.push(f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        Ok(Self::new(values)?)
    }

    fn encode_binary(&self) -> Vec<u8> {
        // Construction caps the dimension at MAX_DIMENSION, which fits in u16.
        let dimension = self.values.len() as u16;
        let mut bytes = Vec::with_capacity(DENSE_HEADER + self.values.len() * 4);
        bytes.extend_from_slice(&dimension.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        for value in &self.values {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    /// Decode the text form `[v1,v2,...,vn]`.
    fn decode_text(text: &str) -> Result<Self, MalformedInputError> {
        let inner = text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| {
                MalformedInputError::Syntax("expected '[' and ']' delimiters".to_string())
            })?;

        let mut values = Vec::new();
        if !inner.is_empty() {
            for part in inner.split(',') {
                let value: f32 = part
                    .trim()
                    .parse()
                    .map_err(|_| MalformedInputError::InvalidNumber(part.to_string()))?;
                values.push(value);
            }
        }

        Ok(Self::new(values)?)
    }

    fn encode_text(&self) -> String {
        let mut out = String::with_capacity(2 + self.values.len() * 8);
        out.push('[');
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // f32 Display emits the shortest string that parses back to the
            // same value, matching the extension's output ("2", not "2.0").
            out.push_str(&value.to_string());
        }
        out.push(']');
        out
    }
}
