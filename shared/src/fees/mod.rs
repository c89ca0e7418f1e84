//! Cancellation and room-change fee calculators
//!
//! All calculators are pure and synchronous: screens call them speculatively
//! on every input change to preview fees, then submit the mutation and let
//! the backend recompute authoritatively.

pub mod post_checkin;
pub mod refund;
pub mod room_change;

// Re-exports
pub use post_checkin::post_check_in_quote;
pub use refund::{RefundQuote, pre_check_in_quote};
pub use room_change::{ChangeQuote, change_fee, change_quote};

use crate::booking::policy;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::Booking;

/// Quote a cancellation for a booking in any status
///
/// Routes to the pre-check-in tiers or the post-check-in per-room
/// calculator. Post-check-in quotes require a room selection and are only
/// available inside the cancellation window.
pub fn cancellation_quote(
    booking: &Booking,
    room_ids: Option<&[String]>,
    now_ms: i64,
) -> AppResult<RefundQuote> {
    use crate::booking::BookingStatus;

    match booking.status {
        s if s.is_pre_check_in() => {
            let days = policy::days_until_check_in(booking.check_in, now_ms);
            refund::pre_check_in_quote(booking.amount_paid, days)
        }
        BookingStatus::CheckedIn => {
            let checked_in_at = booking.actual_check_in.ok_or_else(|| {
                AppError::internal("checked-in booking has no check-in timestamp")
            })?;
            if !policy::within_post_check_in_window(checked_in_at, now_ms) {
                return Err(AppError::new(ErrorCode::CancellationWindowClosed));
            }
            let room_ids = room_ids.ok_or_else(|| {
                AppError::validation("post-check-in cancellation requires a room selection")
            })?;
            post_checkin::post_check_in_quote(booking, room_ids)
        }
        terminal => Err(AppError::invalid_transition(terminal.as_str(), "cancel")),
    }
}
