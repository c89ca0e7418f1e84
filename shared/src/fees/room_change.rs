//! Room reassignment fees
//!
//! Moving a guest to a different room charges (or credits) the nightly price
//! difference over the nights still ahead. The delta is always charged, also
//! when both rooms share a room type; a free move is reported through
//! [`ChangeQuote::no_charge`] so the UI can label it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a room change fee computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeQuote {
    /// Positive: customer owes the difference. Negative: credit due.
    pub fee: Decimal,
    /// Set when the move costs nothing, for the "same price, no charge" label
    pub no_charge: bool,
}

/// Fee for swapping a room: nightly price delta x remaining nights
///
/// `remaining_nights` comes from
/// [`crate::booking::policy::remaining_nights`] (ceiling, minimum 1).
pub fn change_fee(old_nightly: Decimal, new_nightly: Decimal, remaining_nights: i64) -> Decimal {
    (new_nightly - old_nightly) * Decimal::from(remaining_nights)
}

/// Quote a room change, flagging free moves
pub fn change_quote(
    old_nightly: Decimal,
    new_nightly: Decimal,
    remaining_nights: i64,
) -> ChangeQuote {
    let fee = change_fee(old_nightly, new_nightly, remaining_nights);
    ChangeQuote {
        fee,
        no_charge: fee.is_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vnd(amount: i64) -> Decimal {
        Decimal::from(amount)
    }

    #[test]
    fn test_equal_price_is_free() {
        for nights in [1, 3, 30] {
            assert_eq!(change_fee(vnd(800_000), vnd(800_000), nights), Decimal::ZERO);
        }
    }

    #[test]
    fn test_upgrade_charges_delta() {
        // 50,000/night more over three nights
        assert_eq!(change_fee(vnd(100_000), vnd(150_000), 3), vnd(150_000));
    }

    #[test]
    fn test_downgrade_credits_delta() {
        let fee = change_fee(vnd(150_000), vnd(100_000), 3);
        assert_eq!(fee, vnd(-150_000));
    }

    #[test]
    fn test_same_type_different_price_still_charges() {
        // two rooms of one type priced differently: the delta is charged
        assert_eq!(change_fee(vnd(800_000), vnd(900_000), 5), vnd(500_000));
    }

    #[test]
    fn test_quote_flags_free_moves() {
        let quote = change_quote(vnd(800_000), vnd(800_000), 5);
        assert!(quote.no_charge);
        assert_eq!(quote.fee, Decimal::ZERO);

        let quote = change_quote(vnd(800_000), vnd(900_000), 5);
        assert!(!quote.no_charge);
        assert_eq!(quote.fee, vnd(500_000));
    }
}
