//! Address hierarchy lookups

use crate::{ClientResult, HttpClient};
use shared::models::{District, Province, Ward};

impl HttpClient {
    /// List provinces
    pub async fn provinces(&self) -> ClientResult<Vec<Province>> {
        self.get("api/address/provinces").await
    }

    /// List districts of a province
    pub async fn districts(&self, province_id: &str) -> ClientResult<Vec<District>> {
        self.get(&format!("api/address/provinces/{}/districts", province_id))
            .await
    }

    /// List wards of a district
    pub async fn wards(&self, district_id: &str) -> ClientResult<Vec<Ward>> {
        self.get(&format!("api/address/districts/{}/wards", district_id))
            .await
    }
}
