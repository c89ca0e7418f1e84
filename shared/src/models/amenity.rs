//! Amenity Model

use serde::{Deserialize, Serialize};

/// Amenity entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Icon identifier used by the frontend
    pub icon: Option<String>,
}

/// Create amenity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityCreate {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Update amenity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}
