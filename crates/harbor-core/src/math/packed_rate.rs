//! # Packed Rate Codec
//!
//! Packs a (numerator, denominator, timestamp) rate snapshot into a single
//! 256-bit word: numerator in bits 0..112, denominator in bits 112..224,
//! timestamp in bits 224..256. The packing is a storage-density layout
//! inherited from the predecessor deployment; positions carry the packed word
//! and decode it on read, so snapshots stay bit-compatible across migrations.
//!
//! Round-trip is exact: `decode(encode(n, d, t)) == (n, d, t)` for every
//! in-range triple.

use ethnum::U256;

use crate::constants::{MAX_RATE_COMPONENT, RATE_DENOMINATOR_SHIFT, RATE_TIMESTAMP_SHIFT};

/// Pack a rate snapshot into one word.
///
/// Both components must fit 112 bits. An out-of-range component is a
/// programming error on the caller's side, not a recoverable condition;
/// callers are expected to pre-validate.
pub fn encode_rate(numerator: u128, denominator: u128, timestamp: u32) -> U256 {
    assert!(
        numerator <= MAX_RATE_COMPONENT,
        "rate numerator exceeds 112 bits"
    );
    assert!(
        denominator <= MAX_RATE_COMPONENT,
        "rate denominator exceeds 112 bits"
    );
    U256::from(numerator)
        | (U256::from(denominator) << RATE_DENOMINATOR_SHIFT)
        | (U256::from(timestamp) << RATE_TIMESTAMP_SHIFT)
}

/// Extract the numerator (bits 0..112).
pub fn rate_numerator(word: U256) -> u128 {
    word.as_u128() & MAX_RATE_COMPONENT
}

/// Extract the denominator (bits 112..224).
pub fn rate_denominator(word: U256) -> u128 {
    (word >> RATE_DENOMINATOR_SHIFT).as_u128() & MAX_RATE_COMPONENT
}

/// Extract the timestamp (bits 224..256).
pub fn rate_timestamp(word: U256) -> u32 {
    (word >> RATE_TIMESTAMP_SHIFT).as_u128() as u32
}
