//! # Store Error Types
//!
//! Every rejection the engine can produce. Rejections are synchronous and
//! precede any state mutation — a failed operation leaves the store exactly
//! as it was.

use thiserror::Error;

/// Engine errors, propagated immediately to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreError {
    // ========================================================================
    // Identity Errors
    // ========================================================================
    /// A required identifier is null or refers to the store itself.
    #[error("Invalid address")]
    InvalidAddress,

    /// The referenced position does not exist.
    #[error("Invalid position id")]
    InvalidId,

    // ========================================================================
    // Magnitude Errors
    // ========================================================================
    /// A quantity required to be strictly positive was zero.
    #[error("Zero value")]
    ZeroValue,

    /// A magnitude exceeds its storage ceiling (112-bit rate component, or a
    /// 128-bit aggregate cell).
    #[error("Amount too high")]
    AmountTooHigh,

    /// A decrease would drive a balance negative; caller misuse.
    #[error("Balance underflow")]
    Underflow,

    // ========================================================================
    // Index Errors
    // ========================================================================
    /// A locked-balance index is out of bounds for its provider.
    #[error("Invalid index")]
    InvalidIndex,

    /// A locked-balance range's clamped end is not after its start.
    #[error("Invalid indices")]
    InvalidIndices,

    // ========================================================================
    // Seeding Errors
    // ========================================================================
    /// Parallel arrays supplied to a bulk-load call disagree in length.
    #[error("Array length mismatch")]
    LengthMismatch,

    /// A provider's id list was already seeded.
    #[error("Provider id list already seeded")]
    AlreadySeeded,
}

/// Result type used throughout the engine.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", StoreError::InvalidAddress), "Invalid address");
        assert_eq!(format!("{}", StoreError::Underflow), "Balance underflow");
    }
}
