//! Concierge Client - HTTP client for the hotel management API
//!
//! Provides typed, network-based HTTP calls to the hotel REST API, session
//! handling with refresh-then-retry, and the booking cart store.

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use cart::{CartLine, CartStore, InMemoryCartStore};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, TokenPair, UserInfo};
