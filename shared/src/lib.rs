//! Shared types for the Concierge hotel management client
//!
//! Common types used across crates: domain entities, the booking
//! lifecycle state machine, fee/refund calculators, error types and
//! the API response envelope.

pub mod booking;
pub mod client;
pub mod error;
pub mod fees;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Lifecycle re-exports
pub use booking::{BookingStatus, LifecycleAction, TransitionOutcome};
