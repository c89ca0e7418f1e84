//! Room Model

use serde::{Deserialize, Serialize};

/// Room status
///
/// Derived from booking activity: rooms flip status in lockstep with
/// lifecycle transitions (reserve, check-in, check-out, cancel). The only
/// free edit is the maintenance toggle, and only while no stay is attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    #[default]
    Vacant,
    Reserved,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    /// Whether a new booking may take this room
    pub fn is_bookable(&self) -> bool {
        matches!(self, RoomStatus::Vacant)
    }
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub room_type_id: String,
    pub floor_id: String,
    pub status: RoomStatus,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: String,
    pub room_type_id: String,
    pub floor_id: String,
}

/// Update room payload
///
/// Status is intentionally absent: it is managed by the booking lifecycle.
/// Maintenance flips go through the dedicated endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub room_number: Option<String>,
    pub room_type_id: Option<String>,
    pub floor_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_vacant_is_bookable() {
        assert!(RoomStatus::Vacant.is_bookable());
        assert!(!RoomStatus::Reserved.is_bookable());
        assert!(!RoomStatus::Occupied.is_bookable());
        assert!(!RoomStatus::Maintenance.is_bookable());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&RoomStatus::Maintenance).unwrap();
        assert_eq!(json, "\"MAINTENANCE\"");

        let status: RoomStatus = serde_json::from_str("\"VACANT\"").unwrap();
        assert_eq!(status, RoomStatus::Vacant);
    }
}
