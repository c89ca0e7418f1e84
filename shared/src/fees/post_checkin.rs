//! Post-check-in per-room cancellation fees
//!
//! Each released room forfeits one night; the rest of its booked nights are
//! returned. The computation is pure over the selection set so the UI can
//! requote live as rooms are ticked on and off.

use super::refund::RefundQuote;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::Booking;
use rust_decimal::Decimal;

/// Quote releasing `room_ids` from a checked-in booking
///
/// Holdback is one night's price per selected room; refund is
/// `max(0, nightly x booked nights - holdback)` summed over the selection.
/// An empty selection quotes to zero. Window enforcement lives with the
/// transition, not here.
pub fn post_check_in_quote(booking: &Booking, room_ids: &[String]) -> AppResult<RefundQuote> {
    let nights = Decimal::from(booking.nights().max(0));
    let mut quote = RefundQuote::zero();

    for room_id in room_ids {
        let stay = booking.stay(room_id).ok_or_else(|| {
            AppError::new(ErrorCode::StayNotFound).with_detail("room_id", room_id.clone())
        })?;
        let holdback = stay.nightly_price;
        let refund = (stay.nightly_price * nights - holdback).max(Decimal::ZERO);
        quote.holdback += holdback;
        quote.refund += refund;
    }

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use crate::models::{BookingChannel, RoomStay};
    use chrono::NaiveDate;

    fn booking(nights: u32) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let check_out = check_in + chrono::Days::new(nights as u64);
        let stays = vec![
            RoomStay {
                room_id: "r-101".to_string(),
                room_number: "101".to_string(),
                nightly_price: Decimal::from(800_000),
                occupants: 2,
            },
            RoomStay {
                room_id: "r-102".to_string(),
                room_number: "102".to_string(),
                nightly_price: Decimal::from(500_000),
                occupants: 1,
            },
        ];
        let total: Decimal = stays
            .iter()
            .map(|s| s.nightly_price * Decimal::from(nights))
            .sum();
        Booking {
            id: "bk-1".to_string(),
            customer_id: "cus-1".to_string(),
            stays,
            check_in,
            check_out,
            created_at: 0,
            actual_check_in: Some(0),
            actual_check_out: None,
            total_amount: total,
            amount_paid: total,
            status: BookingStatus::CheckedIn,
            channel: BookingChannel::Online,
            created_by: None,
        }
    }

    #[test]
    fn test_single_room_forfeits_one_night() {
        let b = booking(3);
        let quote = post_check_in_quote(&b, &["r-101".to_string()]).unwrap();
        // one night held, two of three returned
        assert_eq!(quote.holdback, Decimal::from(800_000));
        assert_eq!(quote.refund, Decimal::from(1_600_000));
    }

    #[test]
    fn test_selection_sums_per_room() {
        let b = booking(3);
        let quote =
            post_check_in_quote(&b, &["r-101".to_string(), "r-102".to_string()]).unwrap();
        assert_eq!(quote.holdback, Decimal::from(1_300_000));
        assert_eq!(quote.refund, Decimal::from(2_600_000));
    }

    #[test]
    fn test_one_night_booking_refunds_nothing() {
        let b = booking(1);
        let quote = post_check_in_quote(&b, &["r-101".to_string()]).unwrap();
        assert_eq!(quote.holdback, Decimal::from(800_000));
        assert_eq!(quote.refund, Decimal::ZERO);
    }

    #[test]
    fn test_refund_never_negative() {
        // nights = 0 would make nightly x nights - holdback negative without
        // the clamp
        let b = booking(0);
        let quote = post_check_in_quote(&b, &["r-101".to_string()]).unwrap();
        assert_eq!(quote.refund, Decimal::ZERO);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let b = booking(3);
        let quote = post_check_in_quote(&b, &[]).unwrap();
        assert_eq!(quote, RefundQuote::zero());
    }

    #[test]
    fn test_unknown_room_rejected() {
        let b = booking(3);
        let err = post_check_in_quote(&b, &["r-999".to_string()]).unwrap_err();
        assert_eq!(err.code, ErrorCode::StayNotFound);
    }

    #[test]
    fn test_idempotent_over_selection() {
        let b = booking(3);
        let selection = vec!["r-101".to_string(), "r-102".to_string()];
        let a = post_check_in_quote(&b, &selection).unwrap();
        let again = post_check_in_quote(&b, &selection).unwrap();
        assert_eq!(a, again);
    }
}
