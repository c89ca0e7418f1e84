//! Session state: token pair and current user
//!
//! The session is an explicit object handed to the HTTP client rather than
//! ambient global state. Cloning shares the same underlying state, so the
//! application root can own one session and pass handles to every screen.

use shared::client::{TokenPair, UserInfo};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct SessionState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<UserInfo>,
}

/// Shared session handle
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    /// Create an empty (logged-out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token pair after login or refresh
    pub fn set_tokens(&self, tokens: TokenPair) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.access_token = Some(tokens.access_token);
        state.refresh_token = Some(tokens.refresh_token);
    }

    /// Store the authenticated user
    pub fn set_user(&self, user: UserInfo) {
        self.inner.write().expect("session lock poisoned").user = Some(user);
    }

    /// Current access token, if logged in
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .access_token
            .clone()
    }

    /// Current refresh token, if logged in
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .refresh_token
            .clone()
    }

    /// Current user, if logged in
    pub fn user(&self) -> Option<UserInfo> {
        self.inner.read().expect("session lock poisoned").user.clone()
    }

    /// Whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .access_token
            .is_some()
    }

    /// Drop all session state (logout or failed refresh)
    pub fn clear(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        *state = SessionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        }
    }

    #[test]
    fn test_session_starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.access_token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let session = Session::new();
        session.set_tokens(tokens("at", "rt"));
        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("at"));
        assert_eq!(session.refresh_token().as_deref(), Some("rt"));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.refresh_token().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::new();
        let handle = session.clone();
        session.set_tokens(tokens("at", "rt"));
        assert_eq!(handle.access_token().as_deref(), Some("at"));

        handle.clear();
        assert!(!session.is_authenticated());
    }
}
