//! Address hierarchy lookup models (province / district / ward)

use serde::{Deserialize, Serialize};

/// Province reference entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// District reference entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub province_id: String,
    pub name: String,
}

/// Ward reference entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ward {
    pub id: String,
    pub district_id: String,
    pub name: String,
}

/// Address fields embedded in user profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}
