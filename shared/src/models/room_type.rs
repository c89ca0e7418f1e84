//! Room Type Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub nightly_price: Decimal,
    pub capacity: i32,
    pub bed_count: i32,
    /// Floor area in square meters
    pub floor_area: f64,
    pub description: Option<String>,
}

/// Create room type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeCreate {
    pub name: String,
    pub nightly_price: Decimal,
    pub capacity: i32,
    pub bed_count: i32,
    pub floor_area: f64,
    pub description: Option<String>,
}

/// Update room type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeUpdate {
    pub name: Option<String>,
    pub nightly_price: Option<Decimal>,
    pub capacity: Option<i32>,
    pub bed_count: Option<i32>,
    pub floor_area: Option<f64>,
    pub description: Option<String>,
}
