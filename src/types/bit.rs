//! Fixed-length bit string type.

use crate::error::{MalformedInputError, ValidationError};
use crate::wire::Codec;

/// Maximum bit length, bounded by the `u32` length field in the wire header.
pub const MAX_BIT_LENGTH: usize = u32::MAX as usize;

/// Binary header: length in bits.
const BIT_HEADER: usize = 4;

/// A fixed-length bit string, the `bit` wire type.
///
/// Bits are packed 8 per byte, most significant bit first, matching the
/// binary wire layout exactly. Unused trailing bits in the final byte are
/// always zero, so derived equality compares only meaningful bits.
///
/// # Example
///
/// ```
/// use vecwire::{BitString, Codec};
///
/// let bits = BitString::from_bits(&[true, false, true]).unwrap();
/// assert_eq!(bits.encode_text(), "101");
/// assert_eq!(bits.encode_binary(), vec![0x00, 0x00, 0x00, 0x03, 0xA0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BitStringRepr", into = "BitStringRepr")
)]
pub struct BitString {
    len: usize,
    data: Vec<u8>,
}

impl BitString {
    /// Create a bit string from packed bytes and a length in bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the length exceeds [`MAX_BIT_LENGTH`], the byte
    /// count is not `len.div_ceil(8)`, or any unused trailing bit is set.
    pub fn new(data: Vec<u8>, len: usize) -> Result<Self, ValidationError> {
        if len > MAX_BIT_LENGTH {
            return Err(ValidationError::BitLengthTooLarge { len, max: MAX_BIT_LENGTH });
        }

        let expected = len.div_ceil(8);
        if data.len() != expected {
            return Err(ValidationError::PackedLengthMismatch {
                len,
                expected,
                actual: data.len(),
            });
        }

        let unused = expected * 8 - len;
        if unused > 0 {
            let mask = (1u8 << unused) - 1;
            if data[expected - 1] & mask != 0 {
                return Err(ValidationError::PaddingNotZero);
            }
        }

        Ok(Self { len, data })
    }

    /// Create a bit string by packing booleans, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns an error if the length exceeds [`MAX_BIT_LENGTH`].
    pub fn from_bits(bits: &[bool]) -> Result<Self, ValidationError> {
        if bits.len() > MAX_BIT_LENGTH {
            return Err(ValidationError::BitLengthTooLarge {
                len: bits.len(),
                max: MAX_BIT_LENGTH,
            });
        }

        let mut data = vec![0u8; bits.len().div_ceil(8)];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                data[i / 8] |= 1 << (7 - (i % 8));
            }
        }

        Ok(Self { len: bits.len(), data })
    }

    /// Create an all-zero bit string.
    ///
    /// # Errors
    ///
    /// Returns an error if the length exceeds [`MAX_BIT_LENGTH`].
    pub fn zeros(len: usize) -> Result<Self, ValidationError> {
        if len > MAX_BIT_LENGTH {
            return Err(ValidationError::BitLengthTooLarge { len, max: MAX_BIT_LENGTH });
        }
        Ok(Self { len, data: vec![0u8; len.div_ceil(8)] })
    }

    /// The length in bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bit string has no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a bit by index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index out of bounds");
        (self.data[index / 8] >> (7 - (index % 8))) & 1 == 1
    }

    /// The packed bytes, most significant bit first within each byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Count the number of 1-bits.
    #[must_use]
    pub fn count_ones(&self) -> u32 {
        self.data.iter().map(|&byte| byte.count_ones()).sum()
    }
}

impl Codec for BitString {
    /// Decode the binary layout `[u32 len][packed bytes, len.div_ceil(8)]`.
    fn decode_binary(bytes: &[u8]) -> Result<Self, MalformedInputError> {
        if bytes.len() < BIT_HEADER {
            return Err(MalformedInputError::Truncated {
                needed: BIT_HEADER,
                actual: bytes.len(),
            });
        }

        let len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let expected = BIT_HEADER + len.div_ceil(8);
        if bytes.len() != expected {
            return Err(MalformedInputError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self::new(bytes[BIT_HEADER..].to_vec(), len)?)
    }

    fn encode_binary(&self) -> Vec<u8> {
        // Construction caps the length at MAX_BIT_LENGTH == u32::MAX.
        let len = self.len as u32;
        let mut bytes = Vec::with_capacity(BIT_HEADER + self.data.len());
        bytes.extend_from_slice(&len.to_be_bytes());
        bytes.extend_from_slice(&self.data);
        bytes
    }

    /// Decode a text form of `'0'`/`'1'` characters, one per bit.
    fn decode_text(text: &str) -> Result<Self, MalformedInputError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, found) in text.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(MalformedInputError::InvalidCharacter { found, position }),
            }
        }
        Ok(Self::from_bits(&bits)?)
    }

    fn encode_text(&self) -> String {
        (0..self.len).map(|i| if self.get(i) { '1' } else { '0' }).collect()
    }
}

/// Plain-data mirror of [`BitString`] so serde deserialization funnels
/// through the validating constructor.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BitStringRepr {
    len: usize,
    data: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<BitStringRepr> for BitString {
    type Error = ValidationError;

    fn try_from(repr: BitStringRepr) -> Result<Self, Self::Error> {
        Self::new(repr.data, repr.len)
    }
}

#[cfg(feature = "serde")]
impl From<BitString> for BitStringRepr {
    fn from(bits: BitString) -> Self {
        Self { len: bits.len, data: bits.data }
    }
}
