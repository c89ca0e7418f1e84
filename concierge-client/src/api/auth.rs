//! Auth API

use crate::{ClientResult, HttpClient};
use shared::client::{LoginRequest, LoginResponse, UserInfo};

impl HttpClient {
    /// Login with email and password
    ///
    /// On success the session stores the token pair and user, so subsequent
    /// calls are authenticated.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("api/auth/login", &request).await?;
        self.session().set_tokens(response.tokens.clone());
        self.session().set_user(response.user.clone());
        tracing::info!(user = %response.user.email, "logged in");
        Ok(response)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("api/auth/me").await
    }

    /// Logout locally by dropping the session
    ///
    /// Tokens are bearer-only; there is no server-side session to destroy.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("logged out");
    }
}
