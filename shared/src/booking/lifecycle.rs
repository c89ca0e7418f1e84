//! Booking lifecycle transitions
//!
//! [`transition`] is a pure function: it never mutates its input. On success
//! it returns the updated booking plus the side effects the caller must
//! apply (room status flips, refund follow-up); on failure nothing has
//! changed and the error names the offending status/action pair. The backend
//! re-validates every transition; these checks give screens immediate
//! feedback before a mutation is submitted.

use super::policy;
use super::status::BookingStatus;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::fees::post_check_in_quote;
use crate::models::{Booking, RoomStatus, UserRole};
use serde::{Deserialize, Serialize};

/// An action attempted against a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "action")]
pub enum LifecycleAction {
    /// Front desk accepts a pending booking
    Approve,
    /// Front desk declines a pending booking
    Reject { reason: String },
    /// Guest arrives
    CheckIn,
    /// Guest leaves
    CheckOut,
    /// An approved cancellation request takes effect
    Cancel { refund_owed: bool },
    /// Post-check-in release of a subset of rooms
    CancelStays { room_ids: Vec<String> },
}

impl LifecycleAction {
    /// Verb used in invalid-transition messages
    pub fn verb(&self) -> &'static str {
        match self {
            LifecycleAction::Approve => "approve",
            LifecycleAction::Reject { .. } => "reject",
            LifecycleAction::CheckIn => "check-in",
            LifecycleAction::CheckOut => "check-out",
            LifecycleAction::Cancel { .. } => "cancel",
            LifecycleAction::CancelStays { .. } => "cancel rooms on",
        }
    }
}

/// Room status flip the caller must apply after a successful transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatusChange {
    pub room_id: String,
    pub status: RoomStatus,
}

/// Result of a successful transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionOutcome {
    /// The booking after the transition
    pub booking: Booking,
    /// Room status flips implied by the transition
    pub room_changes: Vec<RoomStatusChange>,
    /// Whether a refund-pending record must be spawned for admin follow-up
    pub refund_followup: bool,
}

fn require_staff(actor: UserRole) -> AppResult<()> {
    if !actor.is_staff() {
        return Err(AppError::permission_denied(
            "only front desk staff may decide bookings",
        ));
    }
    Ok(())
}

fn require_receptionist(actor: UserRole) -> AppResult<()> {
    if actor != UserRole::Receptionist {
        return Err(AppError::new(ErrorCode::ReceptionistRequired));
    }
    Ok(())
}

fn all_rooms(booking: &Booking, status: RoomStatus) -> Vec<RoomStatusChange> {
    booking
        .stays
        .iter()
        .map(|s| RoomStatusChange {
            room_id: s.room_id.clone(),
            status,
        })
        .collect()
}

/// Apply a lifecycle action to a booking
///
/// Transition table:
///
/// | from | action | actor |
/// |---|---|---|
/// | PendingApproval | Approve / Reject | staff |
/// | Approved | CheckIn | receptionist |
/// | CheckedIn | CheckOut | receptionist |
/// | PendingApproval, Approved | Cancel | staff |
/// | CheckedIn | CancelStays (within window) | receptionist |
///
/// Anything else is an invalid transition and leaves the input untouched.
pub fn transition(
    booking: &Booking,
    action: &LifecycleAction,
    actor: UserRole,
    now_ms: i64,
) -> AppResult<TransitionOutcome> {
    match action {
        LifecycleAction::Approve => {
            require_staff(actor)?;
            if booking.status != BookingStatus::PendingApproval {
                return Err(invalid(booking, action));
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::Approved;
            Ok(TransitionOutcome {
                room_changes: all_rooms(booking, RoomStatus::Reserved),
                refund_followup: false,
                booking: updated,
            })
        }

        LifecycleAction::Reject { reason } => {
            require_staff(actor)?;
            if booking.status != BookingStatus::PendingApproval {
                return Err(invalid(booking, action));
            }
            if reason.trim().is_empty() {
                return Err(AppError::new(ErrorCode::RejectReasonRequired));
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::Rejected;
            Ok(TransitionOutcome {
                room_changes: all_rooms(booking, RoomStatus::Vacant),
                refund_followup: false,
                booking: updated,
            })
        }

        LifecycleAction::CheckIn => {
            require_receptionist(actor)?;
            if booking.status != BookingStatus::Approved {
                return Err(invalid(booking, action));
            }
            // Early arrival is allowed; the UI warns but does not block.
            if policy::days_until_check_in(booking.check_in, now_ms) > 0 {
                tracing::debug!(booking_id = %booking.id, "check-in before the booked date");
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::CheckedIn;
            updated.actual_check_in = Some(now_ms);
            Ok(TransitionOutcome {
                room_changes: all_rooms(booking, RoomStatus::Occupied),
                refund_followup: false,
                booking: updated,
            })
        }

        LifecycleAction::CheckOut => {
            require_receptionist(actor)?;
            if booking.status != BookingStatus::CheckedIn {
                return Err(invalid(booking, action));
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::Completed;
            updated.actual_check_out = Some(now_ms);
            Ok(TransitionOutcome {
                room_changes: all_rooms(booking, RoomStatus::Vacant),
                refund_followup: false,
                booking: updated,
            })
        }

        LifecycleAction::Cancel { refund_owed } => {
            require_staff(actor)?;
            if !booking.status.is_pre_check_in() {
                return Err(invalid(booking, action));
            }
            let mut updated = booking.clone();
            updated.status = BookingStatus::Cancelled;
            Ok(TransitionOutcome {
                room_changes: all_rooms(booking, RoomStatus::Vacant),
                refund_followup: *refund_owed,
                booking: updated,
            })
        }

        LifecycleAction::CancelStays { room_ids } => {
            require_receptionist(actor)?;
            if booking.status != BookingStatus::CheckedIn {
                return Err(invalid(booking, action));
            }
            if room_ids.is_empty() {
                return Err(AppError::validation("no rooms selected for cancellation"));
            }
            let checked_in_at = booking.actual_check_in.ok_or_else(|| {
                AppError::internal("checked-in booking has no check-in timestamp")
            })?;
            if !policy::within_post_check_in_window(checked_in_at, now_ms) {
                return Err(AppError::new(ErrorCode::CancellationWindowClosed));
            }

            // Also verifies every selected room belongs to the booking.
            let quote = post_check_in_quote(booking, room_ids)?;

            let mut updated = booking.clone();
            updated.stays.retain(|s| !room_ids.contains(&s.room_id));
            if updated.stays.is_empty() {
                updated.status = BookingStatus::Cancelled;
            }
            updated.total_amount = updated.expected_total();
            updated.amount_paid = updated.amount_paid.min(updated.total_amount);

            let room_changes = room_ids
                .iter()
                .map(|room_id| RoomStatusChange {
                    room_id: room_id.clone(),
                    status: RoomStatus::Vacant,
                })
                .collect();

            Ok(TransitionOutcome {
                room_changes,
                refund_followup: quote.refund_owed(),
                booking: updated,
            })
        }
    }
}

fn invalid(booking: &Booking, action: &LifecycleAction) -> AppError {
    AppError::invalid_transition(booking.status.as_str(), action.verb())
}
