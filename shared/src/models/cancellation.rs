//! Cancellation Request Model

use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cancellation request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CancellationStatus {
    /// Non-rejected requests block further cancellation requests
    pub fn is_active(&self) -> bool {
        !matches!(self, CancellationStatus::Rejected)
    }
}

/// Refund payout progress, tracked once a refund is owed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundProgress {
    #[default]
    Pending,
    Completed,
}

/// Bank payout details for refund transfers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

/// Cancellation request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    pub id: String,
    pub booking_id: String,
    pub requested_at: i64,
    pub reason: String,
    /// Required only when a refund is owed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    pub status: CancellationStatus,
    /// Staff member who decided the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<i64>,
    /// Holdback fee computed at request time
    pub holdback_fee: Decimal,
    /// Refund owed to the customer
    pub refund_amount: Decimal,
    /// Payout progress; meaningless while `refund_amount` is zero
    #[serde(default)]
    pub refund_progress: RefundProgress,
    /// Admin who executed the payout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_at: Option<i64>,
}

impl CancellationRequest {
    /// Whether a refund payout is still outstanding
    pub fn refund_outstanding(&self) -> bool {
        self.status == CancellationStatus::Approved
            && self.refund_amount > Decimal::ZERO
            && self.refund_progress == RefundProgress::Pending
    }

    /// A booking may carry at most one active (non-rejected) request.
    /// The backend enforces this; the client checks before submitting to
    /// surface the conflict without a round trip.
    pub fn ensure_no_active_request(existing: &[CancellationRequest]) -> AppResult<()> {
        if existing.iter().any(|r| r.status.is_active()) {
            return Err(AppError::new(ErrorCode::CancellationPendingExists));
        }
        Ok(())
    }
}

/// Submit cancellation request payload
///
/// Bank details may be omitted when the quoted refund is zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationCreate {
    pub booking_id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
}

impl CancellationCreate {
    /// Validate the payload against the quoted refund
    pub fn validate(&self, quoted_refund: Decimal) -> AppResult<()> {
        if self.reason.trim().is_empty() {
            return Err(AppError::validation("a cancellation reason is required"));
        }
        if quoted_refund > Decimal::ZERO && self.bank_account.is_none() {
            return Err(AppError::new(ErrorCode::BankDetailsRequired));
        }
        Ok(())
    }
}

/// Reject cancellation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationReject {
    pub reason: String,
}

/// Post-check-in cancellation payload: the subset of rooms to release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayCancellation {
    pub booking_id: String,
    pub room_ids: Vec<String>,
    pub reason: String,
}
