//! Exhaustive and differential tests for the half-precision conversion.
//!
//! The 16-bit space is small enough to enumerate completely, and the `half`
//! crate serves as an independent oracle for the rounding behavior.

use proptest::prelude::*;

use vecwire::f16::{double_to_half, float_to_half, half_to_double, half_to_float};

#[test]
fn narrowing_inverts_widening_for_every_bit_pattern() {
    for bits in 0..=u16::MAX {
        assert_eq!(
            double_to_half(half_to_double(bits)),
            bits,
            "f64 round-trip diverged for {bits:#06x}"
        );
        assert_eq!(
            float_to_half(half_to_float(bits)),
            bits,
            "f32 round-trip diverged for {bits:#06x}"
        );
    }
}

#[test]
fn widening_matches_half_crate_for_every_bit_pattern() {
    for bits in 0..=u16::MAX {
        let ours = half_to_float(bits);
        let oracle = half::f16::from_bits(bits).to_f32();
        if oracle.is_nan() {
            assert!(ours.is_nan(), "expected NaN for {bits:#06x}");
        } else {
            assert_eq!(ours.to_bits(), oracle.to_bits(), "diverged for {bits:#06x}");
        }

        let ours = half_to_double(bits);
        let oracle = half::f16::from_bits(bits).to_f64();
        if oracle.is_nan() {
            assert!(ours.is_nan(), "expected NaN for {bits:#06x}");
        } else {
            assert_eq!(ours.to_bits(), oracle.to_bits(), "diverged for {bits:#06x}");
        }
    }
}

proptest! {
    #[test]
    fn float_narrowing_matches_half_crate(value in any::<f32>()) {
        let oracle = half::f16::from_f32(value);
        if oracle.is_nan() {
            prop_assert_eq!(float_to_half(value) & 0x7C00, 0x7C00);
            prop_assert_ne!(float_to_half(value) & 0x03FF, 0);
        } else {
            prop_assert_eq!(float_to_half(value), oracle.to_bits());
        }
    }

    #[test]
    fn double_narrowing_matches_half_crate(value in any::<f64>()) {
        let oracle = half::f16::from_f64(value);
        if oracle.is_nan() {
            prop_assert_eq!(double_to_half(value) & 0x7C00, 0x7C00);
            prop_assert_ne!(double_to_half(value) & 0x03FF, 0);
        } else {
            prop_assert_eq!(double_to_half(value), oracle.to_bits());
        }
    }

    #[test]
    fn narrowing_never_moves_more_than_half_an_ulp(value in -65504.0f64..65504.0) {
        let narrowed = half_to_double(double_to_half(value));
        // The widened result is the nearest half; any other half pattern
        // must be at least as far from the input.
        let error = (narrowed - value).abs();
        for candidate in [double_to_half(value).wrapping_sub(1), double_to_half(value).wrapping_add(1)] {
            let other = half_to_double(candidate);
            if other.is_finite() {
                prop_assert!((other - value).abs() >= error);
            }
        }
    }
}
