//! Bit-level conversion between IEEE-754 half precision and f32/f64.
//!
//! The `halfvec` wire format carries 16-bit floats (1 sign bit, 5 exponent
//! bits with bias 15, 10 mantissa bits). Rust has no native `f16`, so this
//! module implements the conversions on raw bit patterns:
//!
//! - Widening ([`half_to_float`], [`half_to_double`]) is exact: every half
//!   value, including subnormals, is representable in the wider format. NaN
//!   payloads are preserved by shifting the mantissa to the top of the wider
//!   mantissa field.
//! - Narrowing ([`float_to_half`], [`double_to_half`]) rounds to nearest,
//!   ties to even, with overflow to infinity and gradual underflow through
//!   the half subnormal range down to zero.
//!
//! The conversions are pure integer arithmetic with no dependence on the
//! floating-point environment, and round-trip exactly:
//! `double_to_half(half_to_double(x)) == x` for every `u16` bit pattern.

/// Convert a half-precision bit pattern to `f32`.
///
/// # Example
///
/// ```
/// use vecwire::f16::half_to_float;
///
/// assert_eq!(half_to_float(0x3C00), 1.0);
/// assert_eq!(half_to_float(0x3E00), 1.5);
/// assert_eq!(half_to_float(0x7C00), f32::INFINITY);
/// ```
#[must_use]
pub fn half_to_float(bits: u16) -> f32 {
    let sign = u32::from(bits >> 15) << 31;
    let exponent = (bits >> 10) & 0x1F;
    let mantissa = u32::from(bits & 0x3FF);

    let result = if exponent == 0x1F {
        // Infinity or NaN: payload moves to the top of the f32 mantissa.
        sign | 0x7F80_0000 | (mantissa << 13)
    } else if exponent == 0 {
        if mantissa == 0 {
            sign
        } else {
            // Subnormal: normalize into an f32 normal.
            let mut exponent = -14i32;
            let mut mantissa = mantissa;
            while mantissa & 0x400 == 0 {
                mantissa <<= 1;
                exponent -= 1;
            }
            sign | (((exponent + 127) as u32) << 23) | ((mantissa & 0x3FF) << 13)
        }
    } else {
        sign | ((u32::from(exponent) + 127 - 15) << 23) | (mantissa << 13)
    };

    f32::from_bits(result)
}

/// Convert a half-precision bit pattern to `f64`.
#[must_use]
pub fn half_to_double(bits: u16) -> f64 {
    let sign = u64::from(bits >> 15) << 63;
    let exponent = (bits >> 10) & 0x1F;
    let mantissa = u64::from(bits & 0x3FF);

    let result = if exponent == 0x1F {
        sign | 0x7FF0_0000_0000_0000 | (mantissa << 42)
    } else if exponent == 0 {
        if mantissa == 0 {
            sign
        } else {
            let mut exponent = -14i64;
            let mut mantissa = mantissa;
            while mantissa & 0x400 == 0 {
                mantissa <<= 1;
                exponent -= 1;
            }
            sign | (((exponent + 1023) as u64) << 52) | ((mantissa & 0x3FF) << 42)
        }
    } else {
        sign | ((u64::from(exponent) + 1023 - 15) << 52) | (mantissa << 42)
    };

    f64::from_bits(result)
}

/// Round an `f32` to the nearest half-precision bit pattern, ties to even.
///
/// Values above the largest finite half (65504) overflow to infinity; values
/// below the smallest subnormal round to signed zero. NaN payloads are
/// truncated, forcing the quiet bit when truncation would otherwise yield an
/// infinity pattern.
///
/// # Example
///
/// ```
/// use vecwire::f16::float_to_half;
///
/// assert_eq!(float_to_half(1.0), 0x3C00);
/// assert_eq!(float_to_half(65504.0), 0x7BFF);
/// assert_eq!(float_to_half(1.0e10), 0x7C00);
/// ```
#[must_use]
pub fn float_to_half(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exponent = ((bits >> 23) & 0xFF) as i32;
    let mantissa = bits & 0x007F_FFFF;

    if exponent == 0xFF {
        if mantissa == 0 {
            return sign | 0x7C00;
        }
        let payload = (mantissa >> 13) as u16 & 0x3FF;
        return sign | 0x7C00 | if payload == 0 { 0x0200 } else { payload };
    }

    let half_exponent = exponent - 127 + 15;

    if half_exponent >= 0x1F {
        return sign | 0x7C00;
    }

    if half_exponent <= 0 {
        // Below half the smallest subnormal: rounds to zero.
        if half_exponent < -10 {
            return sign;
        }
        // Gradual underflow: shift the full significand (implicit bit
        // included) into the subnormal mantissa range, rounding on the
        // discarded bits.
        let mantissa = mantissa | 0x0080_0000;
        let shift = (14 - half_exponent) as u32;
        let mut half = (mantissa >> shift) as u16;
        let remainder = mantissa & ((1 << shift) - 1);
        let halfway = 1u32 << (shift - 1);
        if remainder > halfway || (remainder == halfway && half & 1 == 1) {
            half += 1;
        }
        return sign | half;
    }

    let mut half = ((half_exponent as u16) << 10) | ((mantissa >> 13) as u16);
    let remainder = mantissa & 0x1FFF;
    if remainder > 0x1000 || (remainder == 0x1000 && half & 1 == 1) {
        // A mantissa carry may roll into the exponent, and from the largest
        // finite half into infinity; both are the correctly rounded results.
        half += 1;
    }
    sign | half
}

/// Round an `f64` to the nearest half-precision bit pattern, ties to even.
///
/// Rounds directly from the 52-bit mantissa rather than narrowing through
/// `f32` first, so no double rounding occurs.
#[must_use]
pub fn double_to_half(value: f64) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 48) & 0x8000) as u16;
    let exponent = ((bits >> 52) & 0x7FF) as i64;
    let mantissa = bits & 0x000F_FFFF_FFFF_FFFF;

    if exponent == 0x7FF {
        if mantissa == 0 {
            return sign | 0x7C00;
        }
        let payload = (mantissa >> 42) as u16 & 0x3FF;
        return sign | 0x7C00 | if payload == 0 { 0x0200 } else { payload };
    }

    let half_exponent = exponent - 1023 + 15;

    if half_exponent >= 0x1F {
        return sign | 0x7C00;
    }

    if half_exponent <= 0 {
        if half_exponent < -10 {
            return sign;
        }
        let mantissa = mantissa | 0x0010_0000_0000_0000;
        let shift = (43 - half_exponent) as u32;
        let mut half = (mantissa >> shift) as u16;
        let remainder = mantissa & ((1u64 << shift) - 1);
        let halfway = 1u64 << (shift - 1);
        if remainder > halfway || (remainder == halfway && half & 1 == 1) {
            half += 1;
        }
        return sign | half;
    }

    let mut half = ((half_exponent as u16) << 10) | ((mantissa >> 42) as u16);
    let remainder = mantissa & 0x3FF_FFFF_FFFF;
    let halfway = 1u64 << 41;
    if remainder > halfway || (remainder == halfway && half & 1 == 1) {
        half += 1;
    }
    sign | half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_known_values() {
        assert_eq!(half_to_float(0x0000), 0.0);
        assert_eq!(half_to_float(0x8000).to_bits(), (-0.0f32).to_bits());
        assert_eq!(half_to_float(0x3C00), 1.0);
        assert_eq!(half_to_float(0xBC00), -1.0);
        assert_eq!(half_to_float(0x3E00), 1.5);
        assert_eq!(half_to_float(0x7BFF), 65504.0);
        assert_eq!(half_to_float(0x7C00), f32::INFINITY);
        assert_eq!(half_to_float(0xFC00), f32::NEG_INFINITY);
        assert!(half_to_float(0x7E00).is_nan());

        assert_eq!(half_to_double(0x3C00), 1.0);
        assert_eq!(half_to_double(0x3E00), 1.5);
        assert_eq!(half_to_double(0x7C00), f64::INFINITY);
    }

    #[test]
    fn test_widen_subnormals() {
        // Smallest positive subnormal: 2^-24
        assert_eq!(half_to_float(0x0001), 2.0f32.powi(-24));
        assert_eq!(half_to_double(0x0001), 2.0f64.powi(-24));
        // Largest subnormal: (1023/1024) * 2^-14
        assert_eq!(half_to_double(0x03FF), 1023.0 * 2.0f64.powi(-24));
        // Smallest normal: 2^-14
        assert_eq!(half_to_double(0x0400), 2.0f64.powi(-14));
    }

    #[test]
    fn test_narrow_known_values() {
        assert_eq!(double_to_half(0.0), 0x0000);
        assert_eq!(double_to_half(-0.0), 0x8000);
        assert_eq!(double_to_half(1.0), 0x3C00);
        assert_eq!(double_to_half(-1.0), 0xBC00);
        assert_eq!(double_to_half(1.5), 0x3E00);
        assert_eq!(double_to_half(65504.0), 0x7BFF);
        assert_eq!(double_to_half(f64::INFINITY), 0x7C00);
        assert_eq!(double_to_half(f64::NEG_INFINITY), 0xFC00);
        assert_eq!(double_to_half(f64::NAN) & 0x7E00, 0x7E00);
    }

    #[test]
    fn test_narrow_ties_to_even() {
        // 1 + 2^-11 is exactly halfway between 0x3C00 and 0x3C01.
        assert_eq!(double_to_half(1.0 + 2.0f64.powi(-11)), 0x3C00);
        // 1 + 3 * 2^-11 is halfway between 0x3C01 and 0x3C02.
        assert_eq!(double_to_half(1.0 + 3.0 * 2.0f64.powi(-11)), 0x3C02);
        // Just above the halfway point rounds up.
        assert_eq!(double_to_half(1.0 + 2.0f64.powi(-11) + 2.0f64.powi(-20)), 0x3C01);
    }

    #[test]
    fn test_narrow_overflow() {
        // 65520 is halfway between 65504 and the next (unrepresentable)
        // step; ties-to-even rounds it up to infinity.
        assert_eq!(double_to_half(65520.0), 0x7C00);
        assert_eq!(double_to_half(65519.999), 0x7BFF);
        assert_eq!(double_to_half(-65520.0), 0xFC00);
        assert_eq!(double_to_half(1.0e300), 0x7C00);
        assert_eq!(float_to_half(f32::MAX), 0x7C00);
    }

    #[test]
    fn test_narrow_underflow() {
        // Half the smallest subnormal ties to even: zero.
        assert_eq!(double_to_half(2.0f64.powi(-25)), 0x0000);
        // Just above it rounds to the smallest subnormal.
        assert_eq!(double_to_half(2.0f64.powi(-25) * 1.0001), 0x0001);
        assert_eq!(double_to_half(2.0f64.powi(-24)), 0x0001);
        assert_eq!(double_to_half(-2.0f64.powi(-24)), 0x8001);
        // f64 values far below the subnormal range collapse to signed zero.
        assert_eq!(double_to_half(1.0e-300), 0x0000);
        assert_eq!(double_to_half(-1.0e-300), 0x8000);
    }

    #[test]
    fn test_nan_payload_preserved() {
        // Quiet NaN with payload survives the round-trip through f64.
        let nan = 0x7E2Au16;
        let widened = half_to_double(nan);
        assert!(widened.is_nan());
        assert_eq!(double_to_half(widened), nan);

        // Signaling payload (quiet bit clear) also survives.
        let snan = 0x7D01u16;
        assert_eq!(double_to_half(half_to_double(snan)), snan);
    }

    #[test]
    fn test_float_and_double_paths_agree() {
        for value in [0.0f32, 1.0, 1.5, -2.75, 0.1, 65504.0, 1.0e-8, 3.141_592_7] {
            assert_eq!(float_to_half(value), double_to_half(f64::from(value)), "{value}");
        }
    }
}
