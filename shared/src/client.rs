//! Client-related types shared between the API and its consumers
//!
//! Common request/response types used in API communication.

use crate::models::UserRole;
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access/refresh token pair issued at login and on refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: UserInfo,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_flattens_tokens() {
        let json = r#"{
            "access_token": "at",
            "refresh_token": "rt",
            "user": {"id": "u-1", "name": "Ana", "email": "ana@example.com", "role": "ADMIN"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tokens.access_token, "at");
        assert_eq!(response.tokens.refresh_token, "rt");
        assert_eq!(response.user.role, UserRole::Admin);
    }
}
