//! Typed API surface
//!
//! One command function per REST contract, grouped by entity. Commands
//! return decoded results and never trigger hidden re-fetches: after a
//! mutation the caller decides what to reload.

pub mod address;
pub mod amenities;
pub mod auth;
pub mod bookings;
pub mod cancellations;
pub mod floors;
pub mod room_types;
pub mod rooms;
pub mod users;
