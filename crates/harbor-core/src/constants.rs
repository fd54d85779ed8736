//! # Engine Constants
//!
//! Bit-layout constants for the packed rate word. The word packs three fields
//! with no overlap: numerator in bits 0..112, denominator in bits 112..224,
//! timestamp in bits 224..256.

/// Number of bits a rate component (numerator or denominator) occupies.
pub const RATE_COMPONENT_BITS: u32 = 112;

/// Largest value a rate numerator or denominator may take (2^112 - 1).
pub const MAX_RATE_COMPONENT: u128 = (1u128 << RATE_COMPONENT_BITS) - 1;

/// Bit offset of the denominator inside the packed rate word.
pub const RATE_DENOMINATOR_SHIFT: u32 = RATE_COMPONENT_BITS;

/// Bit offset of the timestamp inside the packed rate word.
pub const RATE_TIMESTAMP_SHIFT: u32 = 2 * RATE_COMPONENT_BITS;

/// Number of bits the packed timestamp occupies.
pub const RATE_TIMESTAMP_BITS: u32 = 32;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::const_assert_eq;

    // The three fields must tile the 256-bit word exactly.
    const_assert_eq!(RATE_TIMESTAMP_SHIFT + RATE_TIMESTAMP_BITS, 256);
    const_assert_eq!(MAX_RATE_COMPONENT, u128::MAX >> 16);

    #[test]
    fn component_mask_is_112_bits() {
        assert_eq!(MAX_RATE_COMPONENT.count_ones(), 112);
        assert_eq!(MAX_RATE_COMPONENT.leading_zeros(), 16);
    }
}
