//! Display-only status overlay
//!
//! Dashboards color bookings that are close to, or past, their next due
//! date. The overlay is derived from dates alone; it never feeds back into
//! transition legality.

use super::policy;
use super::status::BookingStatus;
use crate::models::Booking;
use serde::{Deserialize, Serialize};

/// Cosmetic urgency overlay on top of the persisted status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    #[default]
    Normal,
    /// The next due date (check-in or check-out) is within one day
    ApproachingDue,
    /// The next due date has passed
    Overdue,
}

/// Compute the overlay for a booking
///
/// Approved bookings are due at their check-in instant, checked-in bookings
/// at their check-out instant. Every other status renders normally.
pub fn display_status(booking: &Booking, now_ms: i64) -> DisplayStatus {
    let days_left = match booking.status {
        BookingStatus::Approved => policy::days_until_check_in(booking.check_in, now_ms),
        BookingStatus::CheckedIn => {
            policy::days_until(policy::check_out_instant(booking.check_out), now_ms)
        }
        _ => return DisplayStatus::Normal,
    };

    if days_left <= 0 {
        DisplayStatus::Overdue
    } else if days_left <= 1 {
        DisplayStatus::ApproachingDue
    } else {
        DisplayStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingChannel, RoomStay};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: "bk-1".to_string(),
            customer_id: "cus-1".to_string(),
            stays: vec![RoomStay {
                room_id: "r-101".to_string(),
                room_number: "101".to_string(),
                nightly_price: Decimal::from(800_000),
                occupants: 2,
            }],
            check_in: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 23).unwrap(),
            created_at: 0,
            actual_check_in: None,
            actual_check_out: None,
            total_amount: Decimal::from(2_400_000),
            amount_paid: Decimal::ZERO,
            status,
            channel: BookingChannel::Online,
            created_by: None,
        }
    }

    fn ms_at_offset(instant: chrono::DateTime<chrono::Utc>, days: i64) -> i64 {
        (instant.timestamp() + days * 86_400) * 1_000
    }

    #[test]
    fn test_approved_due_at_check_in() {
        let b = booking(BookingStatus::Approved);
        let check_in = policy::check_in_instant(b.check_in);

        assert_eq!(
            display_status(&b, ms_at_offset(check_in, -5)),
            DisplayStatus::Normal
        );
        assert_eq!(
            display_status(&b, ms_at_offset(check_in, -1)),
            DisplayStatus::ApproachingDue
        );
        assert_eq!(
            display_status(&b, ms_at_offset(check_in, 1)),
            DisplayStatus::Overdue
        );
    }

    #[test]
    fn test_checked_in_due_at_check_out() {
        let b = booking(BookingStatus::CheckedIn);
        let check_out = policy::check_out_instant(b.check_out);

        assert_eq!(
            display_status(&b, ms_at_offset(check_out, -2)),
            DisplayStatus::Normal
        );
        assert_eq!(
            display_status(&b, ms_at_offset(check_out, 2)),
            DisplayStatus::Overdue
        );
    }

    #[test]
    fn test_terminal_statuses_render_normal() {
        for status in [
            BookingStatus::PendingApproval,
            BookingStatus::Completed,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            let b = booking(status);
            assert_eq!(display_status(&b, 0), DisplayStatus::Normal);
        }
    }
}
