//! # Core Types
//!
//! Value types shared by every component of the engine.

pub mod address;
pub mod lock;
pub mod position;

pub use address::Address;
pub use lock::LockedBalance;
pub use position::{PositionInfo, ProtectedPosition};

/// Identifier of a protected position. Allocated from a strictly increasing
/// counter and never reused.
pub type PositionId = u64;
