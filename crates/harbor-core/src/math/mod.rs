//! # Math Utilities
//!
//! Pure, stateless helpers used by the ledger.

pub mod packed_rate;

pub use packed_rate::{encode_rate, rate_denominator, rate_numerator, rate_timestamp};
