//! Unified error codes for the Concierge client
//!
//! This module defines all error codes used across the client crates and the
//! dashboard frontends. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Booking errors
//! - 4xxx: Cancellation/refund errors
//! - 5xxx: Room errors
//! - 6xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired (refresh failed, re-login required)
    SessionExpired = 1005,
    /// Account is locked
    AccountLocked = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Receptionist role required
    ReceptionistRequired = 2004,

    // ==================== 3xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 3001,
    /// Transition not permitted from the current status
    InvalidTransition = 3002,
    /// Booking has already been approved or rejected
    BookingAlreadyDecided = 3003,
    /// Booking has already been checked in
    BookingAlreadyCheckedIn = 3004,
    /// Booking has already been completed
    BookingAlreadyCompleted = 3005,
    /// Booking has already been cancelled
    BookingAlreadyCancelled = 3006,
    /// A rejection reason is required
    RejectReasonRequired = 3007,
    /// Booking has no room stays
    BookingEmpty = 3008,
    /// Room stay not found on this booking
    StayNotFound = 3009,
    /// Paid amount exceeds booking total
    AmountExceedsTotal = 3010,
    /// Booking total does not match the sum of its stays
    TotalMismatch = 3011,

    // ==================== 4xxx: Cancellation / Refund ====================
    /// Cancellation request not found
    CancellationNotFound = 4001,
    /// Cancellation request has already been decided
    CancellationAlreadyDecided = 4002,
    /// Booking already has a pending cancellation request
    CancellationPendingExists = 4003,
    /// Post-check-in cancellation window has closed
    CancellationWindowClosed = 4004,
    /// Bank payout details are required when a refund is owed
    BankDetailsRequired = 4005,
    /// Refund has already been paid out
    RefundAlreadyCompleted = 4006,
    /// No refund is owed for this cancellation
    RefundNotOwed = 4007,
    /// Check-in date has passed, pre-check-in policy no longer applies
    CheckInDatePassed = 4008,

    // ==================== 5xxx: Room ====================
    /// Room not found
    RoomNotFound = 5001,
    /// Room is occupied
    RoomOccupied = 5002,
    /// Room is not available for the requested dates
    RoomUnavailable = 5003,
    /// Room is under maintenance
    RoomInMaintenance = 5004,
    /// Room number already exists
    RoomNumberExists = 5005,
    /// Room status cannot be edited while attached to an active stay
    RoomStatusLocked = 5006,
    /// Room type not found
    RoomTypeNotFound = 5101,
    /// Room type has rooms attached
    RoomTypeHasRooms = 5102,
    /// Floor not found
    FloorNotFound = 5201,
    /// Floor has rooms attached
    FloorHasRooms = 5202,
    /// Amenity not found
    AmenityNotFound = 5301,

    // ==================== 6xxx: User ====================
    /// User not found
    UserNotFound = 6001,
    /// Email already registered
    EmailExists = 6002,
    /// User account is locked
    UserLocked = 6003,
    /// Customer not found
    CustomerNotFound = 6004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired, please log in again",
            ErrorCode::AccountLocked => "Account is locked",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::ReceptionistRequired => "Receptionist role is required",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidTransition => "Transition not permitted from the current status",
            ErrorCode::BookingAlreadyDecided => "Booking has already been approved or rejected",
            ErrorCode::BookingAlreadyCheckedIn => "Booking has already been checked in",
            ErrorCode::BookingAlreadyCompleted => "Booking has already been completed",
            ErrorCode::BookingAlreadyCancelled => "Booking has already been cancelled",
            ErrorCode::RejectReasonRequired => "A rejection reason is required",
            ErrorCode::BookingEmpty => "Booking has no room stays",
            ErrorCode::StayNotFound => "Room stay not found on this booking",
            ErrorCode::AmountExceedsTotal => "Paid amount exceeds booking total",
            ErrorCode::TotalMismatch => "Booking total does not match the sum of its stays",

            // Cancellation / Refund
            ErrorCode::CancellationNotFound => "Cancellation request not found",
            ErrorCode::CancellationAlreadyDecided => {
                "Cancellation request has already been decided"
            }
            ErrorCode::CancellationPendingExists => {
                "Booking already has a pending cancellation request"
            }
            ErrorCode::CancellationWindowClosed => {
                "Post-check-in cancellation window has closed"
            }
            ErrorCode::BankDetailsRequired => "Bank payout details are required for a refund",
            ErrorCode::RefundAlreadyCompleted => "Refund has already been paid out",
            ErrorCode::RefundNotOwed => "No refund is owed for this cancellation",
            ErrorCode::CheckInDatePassed => "Check-in date has passed",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomOccupied => "Room is occupied",
            ErrorCode::RoomUnavailable => "Room is not available for the requested dates",
            ErrorCode::RoomInMaintenance => "Room is under maintenance",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::RoomStatusLocked => "Room status is managed by its active stay",
            ErrorCode::RoomTypeNotFound => "Room type not found",
            ErrorCode::RoomTypeHasRooms => "Room type has rooms attached",
            ErrorCode::FloorNotFound => "Floor not found",
            ErrorCode::FloorHasRooms => "Floor has rooms attached",
            ErrorCode::AmenityNotFound => "Amenity not found",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::EmailExists => "Email is already registered",
            ErrorCode::UserLocked => "User account is locked",
            ErrorCode::CustomerNotFound => "Customer not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::AccountLocked),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::ReceptionistRequired),

            // Booking
            3001 => Ok(ErrorCode::BookingNotFound),
            3002 => Ok(ErrorCode::InvalidTransition),
            3003 => Ok(ErrorCode::BookingAlreadyDecided),
            3004 => Ok(ErrorCode::BookingAlreadyCheckedIn),
            3005 => Ok(ErrorCode::BookingAlreadyCompleted),
            3006 => Ok(ErrorCode::BookingAlreadyCancelled),
            3007 => Ok(ErrorCode::RejectReasonRequired),
            3008 => Ok(ErrorCode::BookingEmpty),
            3009 => Ok(ErrorCode::StayNotFound),
            3010 => Ok(ErrorCode::AmountExceedsTotal),
            3011 => Ok(ErrorCode::TotalMismatch),

            // Cancellation / Refund
            4001 => Ok(ErrorCode::CancellationNotFound),
            4002 => Ok(ErrorCode::CancellationAlreadyDecided),
            4003 => Ok(ErrorCode::CancellationPendingExists),
            4004 => Ok(ErrorCode::CancellationWindowClosed),
            4005 => Ok(ErrorCode::BankDetailsRequired),
            4006 => Ok(ErrorCode::RefundAlreadyCompleted),
            4007 => Ok(ErrorCode::RefundNotOwed),
            4008 => Ok(ErrorCode::CheckInDatePassed),

            // Room
            5001 => Ok(ErrorCode::RoomNotFound),
            5002 => Ok(ErrorCode::RoomOccupied),
            5003 => Ok(ErrorCode::RoomUnavailable),
            5004 => Ok(ErrorCode::RoomInMaintenance),
            5005 => Ok(ErrorCode::RoomNumberExists),
            5006 => Ok(ErrorCode::RoomStatusLocked),
            5101 => Ok(ErrorCode::RoomTypeNotFound),
            5102 => Ok(ErrorCode::RoomTypeHasRooms),
            5201 => Ok(ErrorCode::FloorNotFound),
            5202 => Ok(ErrorCode::FloorHasRooms),
            5301 => Ok(ErrorCode::AmenityNotFound),

            // User
            6001 => Ok(ErrorCode::UserNotFound),
            6002 => Ok(ErrorCode::EmailExists),
            6003 => Ok(ErrorCode::UserLocked),
            6004 => Ok(ErrorCode::CustomerNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
