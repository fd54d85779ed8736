//! # Harbor Core - Liquidity-Protection Accounting Engine
//!
//! This crate contains the accounting core of the Harbor liquidity-protection
//! ledger: per-provider protected positions, locked-balance schedules, and the
//! aggregate system/pool/reserve balances kept consistent with them. It
//! provides:
//!
//! - The [`ProtectionStore`] engine, an owned value threaded through every call
//! - A packed fixed-point rate codec (numerator, denominator, timestamp in one
//!   256-bit word)
//! - Typed errors for every rejection the engine can produce
//! - An observable event log for off-host indexers
//! - A bulk seeding surface for migrating state from a prior deployment
//!
//! The engine performs no authorization, token custody, or rate computation;
//! callers supply already-authorized identities, magnitudes, and rate
//! snapshots. Every operation either completes fully or rejects before any
//! state is touched.
//!
//! ## Feature Flags
//!
//! - `client`: Enables standard serialization for off-host use

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use errors::{StoreError, StoreResult};
pub use events::StoreEvent;
pub use store::ProtectionStore;
pub use types::{Address, LockedBalance, PositionId, PositionInfo, ProtectedPosition};
