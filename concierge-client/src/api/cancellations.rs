//! Cancellation API

use crate::{ClientResult, HttpClient};
use serde::Serialize;
use shared::fees::RefundQuote;
use shared::models::{
    CancellationCreate, CancellationReject, CancellationRequest, StayCancellation,
};
use shared::request::ListQuery;
use shared::response::PaginatedResponse;

#[derive(Debug, Clone, Serialize)]
struct QuoteRequest<'a> {
    booking_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_ids: Option<&'a [String]>,
}

impl HttpClient {
    /// Check eligibility and preview the holdback/refund for a cancellation
    ///
    /// Mirrors `shared::fees::cancellation_quote`; the server's numbers are
    /// authoritative and include its clock.
    pub async fn cancellation_quote(
        &self,
        booking_id: &str,
        room_ids: Option<&[String]>,
    ) -> ClientResult<RefundQuote> {
        let request = QuoteRequest {
            booking_id,
            room_ids,
        };
        self.post("api/cancellations/quote", &request).await
    }

    /// Submit a cancellation request (customer, pre-check-in)
    pub async fn submit_cancellation(
        &self,
        create: &CancellationCreate,
    ) -> ClientResult<CancellationRequest> {
        self.post("api/cancellations", create).await
    }

    /// List cancellation requests (staff dashboards)
    pub async fn cancellations(
        &self,
        query: &ListQuery,
    ) -> ClientResult<PaginatedResponse<CancellationRequest>> {
        self.get_query("api/cancellations", query).await
    }

    /// Approve a cancellation request, cancelling the booking
    pub async fn approve_cancellation(&self, id: &str) -> ClientResult<CancellationRequest> {
        self.post_empty(&format!("api/cancellations/{}/approve", id)).await
    }

    /// Reject a cancellation request
    pub async fn reject_cancellation(
        &self,
        id: &str,
        reason: &str,
    ) -> ClientResult<CancellationRequest> {
        let body = CancellationReject {
            reason: reason.to_string(),
        };
        self.post(&format!("api/cancellations/{}/reject", id), &body).await
    }

    /// Release rooms from a checked-in booking (front desk, first day only)
    pub async fn cancel_stays(&self, request: &StayCancellation) -> ClientResult<CancellationRequest> {
        self.post(
            &format!("api/bookings/{}/cancel-rooms", request.booking_id),
            request,
        )
        .await
    }

    /// Mark an approved refund as paid out (admin)
    pub async fn mark_refunded(&self, id: &str) -> ClientResult<()> {
        self.post_unit(&format!("api/cancellations/{}/mark-refunded", id), &())
            .await
    }
}
