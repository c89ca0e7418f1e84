//! Pre-check-in cancellation refund tiers
//!
//! Holdback is a fixed share of the amount paid, set by how many whole days
//! remain before check-in:
//!
//! | days until check-in | holdback | refund |
//! |---|---|---|
//! | >= 15 | 0% | 100% |
//! | 8..=14 | 50% | 50% |
//! | <= 7 | 100% | 0% |

use crate::booking::policy::{FULL_REFUND_MIN_DAYS, HALF_REFUND_MIN_DAYS};
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a cancellation fee computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundQuote {
    /// Amount the hotel keeps
    pub holdback: Decimal,
    /// Amount returned to the customer
    pub refund: Decimal,
}

impl RefundQuote {
    /// A quote that keeps and returns nothing
    pub fn zero() -> Self {
        Self {
            holdback: Decimal::ZERO,
            refund: Decimal::ZERO,
        }
    }

    /// Whether any payout is owed to the customer
    pub fn refund_owed(&self) -> bool {
        self.refund > Decimal::ZERO
    }
}

/// Quote a cancellation made before check-in
///
/// `days_until_check_in` is the ceiling of (check-in instant - now) in whole
/// days ([`crate::booking::policy::days_until_check_in`]). Negative values
/// mean the stay has begun and must be quoted by the post-check-in
/// calculator instead.
pub fn pre_check_in_quote(total_paid: Decimal, days_until_check_in: i64) -> AppResult<RefundQuote> {
    if days_until_check_in < 0 {
        return Err(AppError::new(ErrorCode::CheckInDatePassed)
            .with_detail("days_until_check_in", days_until_check_in));
    }

    let holdback = if days_until_check_in >= FULL_REFUND_MIN_DAYS {
        Decimal::ZERO
    } else if days_until_check_in >= HALF_REFUND_MIN_DAYS {
        total_paid / Decimal::from(2)
    } else {
        total_paid
    };

    Ok(RefundQuote {
        holdback,
        refund: total_paid - holdback,
    })
}
