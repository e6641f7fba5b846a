//! Half-precision vector type.

use crate::error::{MalformedInputError, ValidationError};
use crate::f16::{double_to_half, float_to_half, half_to_double, half_to_float};
use crate::wire::Codec;

use super::dense::DENSE_HEADER;
use super::MAX_DIMENSION;

/// A dense vector of half-precision components, the `halfvec` wire type.
///
/// Components are stored as raw 16-bit IEEE-754 bit patterns; construction
/// from `f32`/`f64` rounds each value to the nearest half (ties to even),
/// with overflow to infinity and gradual underflow to zero. Callers read the
/// components back as `f32` or `f64`, both exact widenings.
///
/// Equality is bit-pattern equality on the stored halves.
///
/// # Example
///
/// ```
/// use vecwire::{Codec, HalfVector};
///
/// let vector = HalfVector::from_f32(&[1.5, 2.0, 3.0]).unwrap();
/// assert_eq!(vector.encode_text(), "[1.5,2,3]");
/// assert_eq!(vector.to_f32_vec(), vec![1.5, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u16>", into = "Vec<u16>")
)]
pub struct HalfVector {
    bits: Vec<u16>,
}

impl HalfVector {
    /// Create a half vector from raw half-precision bit patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_DIMENSION`].
    pub fn from_bits(bits: Vec<u16>) -> Result<Self, ValidationError> {
        if bits.len() > MAX_DIMENSION {
            return Err(ValidationError::DimensionTooLarge {
                dimension: bits.len(),
                max: MAX_DIMENSION,
            });
        }
        Ok(Self { bits })
    }

    /// Create a half vector by rounding `f32` components.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_DIMENSION`].
    pub fn from_f32(values: &[f32]) -> Result<Self, ValidationError> {
        Self::from_bits(values.iter().map(|&v| float_to_half(v)).collect())
    }

    /// Create a half vector by rounding `f64` components.
    ///
    /// Rounds each component directly from double to half precision, so no
    /// double rounding through `f32` occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimension exceeds [`MAX_DIMENSION`].
    pub fn from_f64(values: &[f64]) -> Result<Self, ValidationError> {
        Self::from_bits(values.iter().map(|&v| double_to_half(v)).collect())
    }

    /// The number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.bits.len()
    }

    /// The raw half-precision bit patterns.
    #[must_use]
    pub fn bits(&self) -> &[u16] {
        &self.bits
    }

    /// The components widened to `f32` (exact).
    #[must_use]
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.bits.iter().map(|&b| half_to_float(b)).collect()
    }

    /// The components widened to `f64` (exact).
    #[must_use]
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.bits.iter().map(|&b| half_to_double(b)).collect()
    }
}

impl TryFrom<Vec<u16>> for HalfVector {
    type Error = ValidationError;

    fn try_from(bits: Vec<u16>) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<HalfVector> for Vec<u16> {
    fn from(vector: HalfVector) -> Self {
        vector.bits
    }
}

impl Codec for HalfVector {
    /// Decode the binary layout `[u16 dim][u16 reserved=0][f16 x dim]`,
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

        let expected = DENSE_HEADER + dimension * 2;
        if bytes.len() != expected {
            return Err(MalformedInputError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut bits = Vec::with_capacity(dimension);
        for chunk in bytes[DENSE_HEADER..].chunks_exact(2) {
            bits.push(u16::from_be_bytes([chunk[0], chunk[1]]));
        }

        Ok(Self::from_bits(bits)?)
    }

    fn encode_binary(&self) -> Vec<u8> {
        // Construction caps the dimension at MAX_DIMENSION, which fits in u16.
        let dimension = self.bits.len() as u16;
        let mut bytes = Vec::with_capacity(DENSE_HEADER + self.bits.len() * 2);
        bytes.extend_from_slice(&dimension.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        for bits in &self.bits {
            bytes.extend_from_slice(&bits.to_be_bytes());
        }
        bytes
    }

    /// Decode the text form `[v1,v2,...,vn]`, rounding each element to half
    /// precision.
    fn decode_text(text: &str) -> Result<Self, MalformedInputError> {
        let inner = text
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| {
                MalformedInputError::Syntax("expected '[' and ']' delimiters".to_string())
            })?;

        let mut bits = Vec::new();
        if !inner.is_empty() {
            for part in inner.split(',') {
                let value: f64 = part
                    .trim()
                    .parse()
                    .map_err(|_| MalformedInputError::InvalidNumber(part.to_string()))?;
                bits.push(double_to_half(value));
            }
        }

        Ok(Self::from_bits(bits)?)
    }

    fn encode_text(&self) -> String {
        let mut out = String::with_capacity(2 + self.bits.len() * 8);
        out.push('[');
        for (i, &bits) in self.bits.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // Every half is exact in f32, whose Display form is the shortest
            // string parsing back to the same value.
            out.push_str(&half_to_float(bits).to_string());
        }
        out.push(']');
        out
    }
}
