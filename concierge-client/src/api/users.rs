//! User API

use crate::{ClientResult, HttpClient};
use shared::models::{User, UserCreate, UserUpdate};
use shared::request::ListQuery;
use shared::response::PaginatedResponse;

impl HttpClient {
    /// List users (admin)
    pub async fn users(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<User>> {
        self.get_query("api/users", query).await
    }

    /// Fetch a user by id
    pub async fn user(&self, id: &str) -> ClientResult<User> {
        self.get(&format!("api/users/{}", id)).await
    }

    /// Create a user (admin)
    pub async fn create_user(&self, create: &UserCreate) -> ClientResult<User> {
        self.post("api/users", create).await
    }

    /// Update a user's profile, status or payout details
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        self.put(&format!("api/users/{}", id), update).await
    }
}
