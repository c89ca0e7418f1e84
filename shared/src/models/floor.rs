//! Floor Model

use serde::{Deserialize, Serialize};

/// Floor entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    /// Ordering position in floor pickers (ground floor first)
    pub ordinal: i32,
}

/// Create floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCreate {
    pub name: String,
    pub ordinal: Option<i32>,
}

/// Update floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorUpdate {
    pub name: Option<String>,
    pub ordinal: Option<i32>,
}
