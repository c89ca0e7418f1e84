//! Room API

use crate::{ClientResult, HttpClient};
use serde::Serialize;
use shared::models::{Room, RoomCreate, RoomUpdate};
use shared::request::{ListQuery, StayRangeQuery};
use shared::response::PaginatedResponse;

#[derive(Debug, Clone, Serialize)]
struct MaintenanceRequest {
    enabled: bool,
}

impl HttpClient {
    /// List rooms
    pub async fn rooms(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Room>> {
        self.get_query("api/rooms", query).await
    }

    /// Fetch a room by id
    pub async fn room(&self, id: &str) -> ClientResult<Room> {
        self.get(&format!("api/rooms/{}", id)).await
    }

    /// Rooms bookable for the whole date range
    pub async fn available_rooms(&self, range: &StayRangeQuery) -> ClientResult<Vec<Room>> {
        self.get_query("api/rooms/available", range).await
    }

    /// Create a room
    pub async fn create_room(&self, create: &RoomCreate) -> ClientResult<Room> {
        self.post("api/rooms", create).await
    }

    /// Update a room's number, type or floor
    ///
    /// Status is not editable here: it follows the booking lifecycle.
    pub async fn update_room(&self, id: &str, update: &RoomUpdate) -> ClientResult<Room> {
        self.put(&format!("api/rooms/{}", id), update).await
    }

    /// Toggle maintenance on a room with no active stay
    pub async fn set_room_maintenance(&self, id: &str, enabled: bool) -> ClientResult<Room> {
        self.post(
            &format!("api/rooms/{}/maintenance", id),
            &MaintenanceRequest { enabled },
        )
        .await
    }

    /// Delete a room
    pub async fn delete_room(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("api/rooms/{}", id)).await
    }
}
