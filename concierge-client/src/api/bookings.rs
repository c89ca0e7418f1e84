//! Booking API
//!
//! Every mutation is validated again server-side; the lifecycle checks in
//! `shared::booking` only give screens immediate feedback.

use crate::{ClientResult, HttpClient};
use shared::fees::ChangeQuote;
use shared::models::{
    Booking, BookingCreate, BookingReject, ChangeRoomRequest, WalkInBookingCreate,
};
use shared::request::ListQuery;
use shared::response::PaginatedResponse;

impl HttpClient {
    /// Create an online booking (customer wizard)
    pub async fn create_booking(&self, create: &BookingCreate) -> ClientResult<Booking> {
        self.post("api/bookings", create).await
    }

    /// Create a walk-in booking (front desk)
    pub async fn create_walk_in_booking(
        &self,
        create: &WalkInBookingCreate,
    ) -> ClientResult<Booking> {
        self.post("api/bookings/walk-in", create).await
    }

    /// Fetch a booking by id
    pub async fn booking(&self, id: &str) -> ClientResult<Booking> {
        self.get(&format!("api/bookings/{}", id)).await
    }

    /// List bookings (staff dashboards)
    pub async fn bookings(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Booking>> {
        self.get_query("api/bookings", query).await
    }

    /// List the authenticated customer's bookings
    pub async fn my_bookings(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Booking>> {
        self.get_query("api/bookings/mine", query).await
    }

    /// Approve a pending booking
    pub async fn approve_booking(&self, id: &str) -> ClientResult<Booking> {
        self.post_empty(&format!("api/bookings/{}/approve", id)).await
    }

    /// Reject a pending booking with a reason
    pub async fn reject_booking(&self, id: &str, reason: &str) -> ClientResult<Booking> {
        let body = BookingReject {
            reason: reason.to_string(),
        };
        self.post(&format!("api/bookings/{}/reject", id), &body).await
    }

    /// Check a booking in, stamping the arrival time
    pub async fn check_in(&self, id: &str) -> ClientResult<Booking> {
        self.post_empty(&format!("api/bookings/{}/check-in", id)).await
    }

    /// Check a booking out, completing it
    pub async fn check_out(&self, id: &str) -> ClientResult<Booking> {
        self.post_empty(&format!("api/bookings/{}/check-out", id)).await
    }

    /// Quote a room change without committing it
    pub async fn quote_room_change(
        &self,
        id: &str,
        request: &ChangeRoomRequest,
    ) -> ClientResult<ChangeQuote> {
        self.post(&format!("api/bookings/{}/change-room/quote", id), request)
            .await
    }

    /// Move a stay to a different room, charging the pro-rated difference
    pub async fn change_room(
        &self,
        id: &str,
        request: &ChangeRoomRequest,
    ) -> ClientResult<Booking> {
        self.post(&format!("api/bookings/{}/change-room", id), request)
            .await
    }
}
