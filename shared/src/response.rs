//! API response envelope
//!
//! Every backend endpoint wraps its payload in the same envelope:
//!
//! ```json
//! {
//!     "code": 0,
//!     "message": "OK",
//!     "data": { ... }
//! }
//! ```
//!
//! Decoding is explicit: [`ApiResponse::into_data`] fails fast on a non-zero
//! code or a missing `data` field instead of silently defaulting.

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Unified API response structure
///
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        matches!(self.code, Some(0) | None)
    }

    /// The error this envelope carries, if any
    ///
    /// Unknown numeric codes are preserved as [`ErrorCode::Unknown`] with the
    /// server message intact, so the user still sees it verbatim.
    pub fn as_error(&self) -> Option<AppError> {
        let code = self.code?;
        if code == 0 {
            return None;
        }
        let code = ErrorCode::try_from(code).unwrap_or(ErrorCode::Unknown);
        Some(AppError {
            code,
            message: self.message.clone(),
            details: self.details.clone(),
        })
    }

    /// Unwrap the payload, failing fast on an error envelope or missing data
    pub fn into_data(self) -> AppResult<T> {
        if let Some(err) = self.as_error() {
            return Err(err);
        }
        self.data.ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidFormat, "response envelope has no data")
        })
    }

    /// Check the envelope for success, discarding any payload
    ///
    /// For command endpoints that acknowledge without returning data.
    pub fn into_unit(self) -> AppResult<()> {
        match self.as_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// List of items
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(page, per_page, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, Some(0));
        assert_eq!(response.message, "OK");
        assert_eq!(response.data, Some(42));
        assert!(response.is_success());
    }

    #[test]
    fn test_api_response_ok() {
        let response = ApiResponse::<()>::ok();
        assert_eq!(response.code, Some(0));
        assert!(response.data.is_none());
        assert!(response.is_success());
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::BookingNotFound, "Booking not found")
            .with_detail("id", "123");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(3001));
        assert_eq!(response.message, "Booking not found");
        assert!(!response.is_success());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_into_data_success() {
        let response = ApiResponse::success("hello");
        assert_eq!(response.into_data().unwrap(), "hello");
    }

    #[test]
    fn test_into_data_error_envelope() {
        let json = r#"{"code":3001,"message":"Booking not found"}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
        assert_eq!(err.message, "Booking not found");
    }

    #[test]
    fn test_into_data_unknown_code_keeps_message() {
        let json = r#"{"code":1234,"message":"some upstream failure"}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.code, ErrorCode::Unknown);
        assert_eq!(err.message, "some upstream failure");
    }

    #[test]
    fn test_into_unit_ignores_missing_data() {
        let json = r#"{"code":0,"message":"OK"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(response.into_unit().is_ok());

        let json = r#"{"code":3001,"message":"Booking not found"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        let err = response.into_unit().unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[test]
    fn test_into_data_missing_data_fails_fast() {
        let json = r#"{"code":0,"message":"OK"}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"message\":\"OK\""));
        assert!(json.contains("\"data\":\"hello\""));
    }

    #[test]
    fn test_api_response_deserialize() {
        let json = r#"{"code":0,"message":"OK","data":42}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, Some(0));
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_pagination() {
        let p = Pagination::new(2, 20, 45);
        assert_eq!(p.total_pages, 3);

        let p = Pagination::new(1, 0, 45);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn test_paginated_response() {
        let response = PaginatedResponse::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.pagination.total_pages, 3);
    }
}
