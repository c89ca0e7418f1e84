//! Booking status

use serde::{Deserialize, Serialize};

/// Booking status
///
/// Forward path is `PendingApproval -> Approved -> CheckedIn -> Completed`;
/// `Rejected` and `Cancelled` are absorbing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    PendingApproval,
    Approved,
    CheckedIn,
    Completed,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    /// Terminal statuses permit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed | BookingStatus::Rejected | BookingStatus::Cancelled
        )
    }

    /// Whether the guest has not yet checked in
    pub fn is_pre_check_in(&self) -> bool {
        matches!(self, BookingStatus::PendingApproval | BookingStatus::Approved)
    }

    /// Wire name, used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::PendingApproval => "PENDING_APPROVAL",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::CheckedIn => "CHECKED_IN",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!BookingStatus::PendingApproval.is_terminal());
        assert!(!BookingStatus::Approved.is_terminal());
        assert!(!BookingStatus::CheckedIn.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_pre_check_in() {
        assert!(BookingStatus::PendingApproval.is_pre_check_in());
        assert!(BookingStatus::Approved.is_pre_check_in());
        assert!(!BookingStatus::CheckedIn.is_pre_check_in());
        assert!(!BookingStatus::Cancelled.is_pre_check_in());
    }

    #[test]
    fn test_wire_format_matches_as_str() {
        for status in [
            BookingStatus::PendingApproval,
            BookingStatus::Approved,
            BookingStatus::CheckedIn,
            BookingStatus::Completed,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
