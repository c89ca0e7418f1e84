//! Room Type API

use crate::{ClientResult, HttpClient};
use shared::models::{RoomType, RoomTypeCreate, RoomTypeUpdate};
use shared::request::ListQuery;
use shared::response::PaginatedResponse;

impl HttpClient {
    /// List room types
    pub async fn room_types(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<RoomType>> {
        self.get_query("api/room-types", query).await
    }

    /// Fetch a room type by id
    pub async fn room_type(&self, id: &str) -> ClientResult<RoomType> {
        self.get(&format!("api/room-types/{}", id)).await
    }

    /// Create a room type
    pub async fn create_room_type(&self, create: &RoomTypeCreate) -> ClientResult<RoomType> {
        self.post("api/room-types", create).await
    }

    /// Update a room type
    pub async fn update_room_type(
        &self,
        id: &str,
        update: &RoomTypeUpdate,
    ) -> ClientResult<RoomType> {
        self.put(&format!("api/room-types/{}", id), update).await
    }

    /// Delete a room type with no rooms attached
    pub async fn delete_room_type(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("api/room-types/{}", id)).await
    }
}
