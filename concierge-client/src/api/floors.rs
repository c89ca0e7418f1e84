//! Floor API

use crate::{ClientResult, HttpClient};
use shared::models::{Floor, FloorCreate, FloorUpdate};

impl HttpClient {
    /// List floors
    pub async fn floors(&self) -> ClientResult<Vec<Floor>> {
        self.get("api/floors").await
    }

    /// Create a floor
    pub async fn create_floor(&self, create: &FloorCreate) -> ClientResult<Floor> {
        self.post("api/floors", create).await
    }

    /// Update a floor
    pub async fn update_floor(&self, id: &str, update: &FloorUpdate) -> ClientResult<Floor> {
        self.put(&format!("api/floors/{}", id), update).await
    }

    /// Delete a floor with no rooms attached
    pub async fn delete_floor(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("api/floors/{}", id)).await
    }
}
