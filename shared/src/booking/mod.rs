//! Booking lifecycle
//!
//! This module provides the booking state machine:
//! - [`BookingStatus`]: persisted statuses and their ordering
//! - [`transition`]: pure transition function with role checks and side
//!   effect descriptions
//! - [`display_status`]: cosmetic due-date overlay for dashboards
//! - [`policy`]: tier boundaries, window lengths and stay-date arithmetic

pub mod display;
pub mod lifecycle;
pub mod policy;
pub mod status;

// Re-exports
pub use display::{DisplayStatus, display_status};
pub use lifecycle::{LifecycleAction, RoomStatusChange, TransitionOutcome, transition};
pub use status::BookingStatus;
