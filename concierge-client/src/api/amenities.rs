//! Amenity API

use crate::{ClientResult, HttpClient};
use shared::models::{Amenity, AmenityCreate, AmenityUpdate};

impl HttpClient {
    /// List amenities
    pub async fn amenities(&self) -> ClientResult<Vec<Amenity>> {
        self.get("api/amenities").await
    }

    /// Create an amenity
    pub async fn create_amenity(&self, create: &AmenityCreate) -> ClientResult<Amenity> {
        self.post("api/amenities", create).await
    }

    /// Update an amenity
    pub async fn update_amenity(&self, id: &str, update: &AmenityUpdate) -> ClientResult<Amenity> {
        self.put(&format!("api/amenities/{}", id), update).await
    }

    /// Delete an amenity
    pub async fn delete_amenity(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("api/amenities/{}", id)).await
    }
}
