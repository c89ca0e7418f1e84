//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::BookingNotFound
            | Self::StayNotFound
            | Self::CancellationNotFound
            | Self::RoomNotFound
            | Self::RoomTypeNotFound
            | Self::FloorNotFound
            | Self::AmenityNotFound
            | Self::UserNotFound
            | Self::CustomerNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::BookingAlreadyDecided
            | Self::BookingAlreadyCheckedIn
            | Self::BookingAlreadyCompleted
            | Self::BookingAlreadyCancelled
            | Self::CancellationAlreadyDecided
            | Self::CancellationPendingExists
            | Self::RefundAlreadyCompleted
            | Self::RoomOccupied
            | Self::RoomNumberExists
            | Self::RoomTypeHasRooms
            | Self::FloorHasRooms
            | Self::EmailExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::SessionExpired
            | Self::AccountLocked => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::ReceptionistRequired
            | Self::UserLocked => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (policy violations)
            Self::InvalidTransition
            | Self::CancellationWindowClosed
            | Self::CheckInDatePassed
            | Self::RefundNotOwed
            | Self::RoomStatusLocked => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
