//! Data models
//!
//! Shared between the API client and the dashboard frontends.
//! Entities mirror the backend wire format: ids are strings, stay dates are
//! calendar dates, event timestamps are UTC milliseconds, money is decimal.

pub mod address;
pub mod amenity;
pub mod booking;
pub mod cancellation;
pub mod floor;
pub mod room;
pub mod room_type;
pub mod user;

// Re-exports
pub use address::*;
pub use amenity::*;
pub use booking::*;
pub use cancellation::*;
pub use floor::*;
pub use room::*;
pub use room_type::*;
pub use user::*;
