//! Booking Model

use crate::booking::BookingStatus;
use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingChannel {
    /// Created by the customer through the online wizard
    #[default]
    Online,
    /// Created at the front desk by a receptionist
    WalkIn,
}

/// One room held by a booking for the whole stay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomStay {
    pub room_id: String,
    pub room_number: String,
    /// Nightly price snapshotted at booking time
    pub nightly_price: Decimal,
    pub occupants: i32,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub stays: Vec<RoomStay>,
    /// Check-in date (inclusive)
    pub check_in: NaiveDate,
    /// Check-out date (exclusive)
    pub check_out: NaiveDate,
    pub created_at: i64,
    /// Stamped by the check-in transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_check_in: Option<i64>,
    /// Stamped by the check-out transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_check_out: Option<i64>,
    pub total_amount: Decimal,
    pub amount_paid: Decimal,
    pub status: BookingStatus,
    pub channel: BookingChannel,
    /// Staff member who created a walk-in booking, absent for online
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Booking {
    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// The total this booking should carry: sum of nightly price x nights
    /// across all stays
    pub fn expected_total(&self) -> Decimal {
        let nights = Decimal::from(self.nights().max(0));
        self.stays
            .iter()
            .map(|s| s.nightly_price * nights)
            .sum()
    }

    /// Amount still owed
    pub fn remaining_balance(&self) -> Decimal {
        (self.total_amount - self.amount_paid).max(Decimal::ZERO)
    }

    /// Look up a stay by room id
    pub fn stay(&self, room_id: &str) -> Option<&RoomStay> {
        self.stays.iter().find(|s| s.room_id == room_id)
    }

    /// Check the booking invariants
    ///
    /// - at least one stay and at least one night
    /// - `total_amount` equals the sum of nightly price x nights
    /// - `amount_paid` never exceeds `total_amount`
    pub fn validate(&self) -> AppResult<()> {
        if self.stays.is_empty() {
            return Err(AppError::new(ErrorCode::BookingEmpty));
        }
        if self.nights() < 1 {
            return Err(
                AppError::validation("check-out must be after check-in")
                    .with_detail("check_in", self.check_in.to_string())
                    .with_detail("check_out", self.check_out.to_string()),
            );
        }
        if self.total_amount != self.expected_total() {
            return Err(AppError::new(ErrorCode::TotalMismatch)
                .with_detail("total_amount", self.total_amount.to_string())
                .with_detail("expected", self.expected_total().to_string()));
        }
        if self.amount_paid > self.total_amount {
            return Err(AppError::new(ErrorCode::AmountExceedsTotal)
                .with_detail("amount_paid", self.amount_paid.to_string())
                .with_detail("total_amount", self.total_amount.to_string()));
        }
        Ok(())
    }
}

/// Room selection inside a booking creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSelection {
    pub room_id: String,
    pub occupants: i32,
}

/// Create booking payload (online wizard)
///
/// Prices are snapshotted server-side; the client only names rooms and dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub rooms: Vec<RoomSelection>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Create walk-in booking payload (front desk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkInBookingCreate {
    /// Existing customer, or none for an anonymous walk-in
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub rooms: Vec<RoomSelection>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Reject booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingReject {
    pub reason: String,
}

/// Change room request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoomRequest {
    pub old_room_id: String,
    pub new_room_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::now_millis;

    fn stay(room_id: &str, price: i64) -> RoomStay {
        RoomStay {
            room_id: room_id.to_string(),
            room_number: format!("P{}", room_id),
            nightly_price: Decimal::from(price),
            occupants: 2,
        }
    }

    fn booking() -> Booking {
        Booking {
            id: "bk-1".to_string(),
            customer_id: "cus-1".to_string(),
            stays: vec![stay("101", 800_000), stay("102", 500_000)],
            check_in: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
            created_at: now_millis(),
            actual_check_in: None,
            actual_check_out: None,
            total_amount: Decimal::from(3_900_000),
            amount_paid: Decimal::from(3_900_000),
            status: BookingStatus::PendingApproval,
            channel: BookingChannel::Online,
            created_by: None,
        }
    }

    #[test]
    fn test_nights() {
        assert_eq!(booking().nights(), 3);
    }

    #[test]
    fn test_expected_total() {
        // (800,000 + 500,000) x 3 nights
        assert_eq!(booking().expected_total(), Decimal::from(3_900_000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(booking().validate().is_ok());
    }

    #[test]
    fn test_validate_total_mismatch() {
        let mut b = booking();
        b.total_amount = Decimal::from(1_000_000);
        b.amount_paid = Decimal::ZERO;
        let err = b.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::TotalMismatch);
    }

    #[test]
    fn test_validate_overpaid() {
        let mut b = booking();
        b.amount_paid = Decimal::from(4_000_000);
        let err = b.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::AmountExceedsTotal);
    }

    #[test]
    fn test_validate_empty() {
        let mut b = booking();
        b.stays.clear();
        let err = b.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingEmpty);
    }

    #[test]
    fn test_validate_inverted_dates() {
        let mut b = booking();
        b.check_out = b.check_in;
        let err = b.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_remaining_balance() {
        let mut b = booking();
        b.amount_paid = Decimal::from(1_900_000);
        assert_eq!(b.remaining_balance(), Decimal::from(2_000_000));
    }
}
