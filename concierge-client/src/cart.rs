//! Booking cart
//!
//! The wizard collects a date range and a set of rooms before submitting a
//! booking. The cart lives behind a repository interface owned by the
//! application root, not in ambient global state, so screens share one cart
//! through handles and tests can substitute their own store.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingCreate, Room, RoomSelection, RoomType};
use shared::request::StayRangeQuery;
use std::sync::RwLock;
use uuid::Uuid;

/// One selected room in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Client-generated id, stable across re-renders
    pub line_id: String,
    pub room_id: String,
    pub room_number: String,
    pub room_type_id: String,
    pub nightly_price: Decimal,
    pub occupants: i32,
}

impl CartLine {
    /// Build a line from a room and its type's current price
    pub fn new(room: &Room, room_type: &RoomType, occupants: i32) -> Self {
        Self {
            line_id: Uuid::new_v4().to_string(),
            room_id: room.id.clone(),
            room_number: room.room_number.clone(),
            room_type_id: room.room_type_id.clone(),
            nightly_price: room_type.nightly_price,
            occupants,
        }
    }
}

/// Repository interface for the booking cart
pub trait CartStore: Send + Sync {
    /// Selected stay dates, if any
    fn dates(&self) -> Option<StayRangeQuery>;

    /// Select the stay dates; rejects ranges under one night
    fn set_dates(&self, range: StayRangeQuery) -> AppResult<()>;

    /// Add a room; a room can be in the cart only once
    fn add(&self, line: CartLine) -> AppResult<()>;

    /// Remove a room from the cart
    fn remove(&self, room_id: &str) -> AppResult<()>;

    /// Current lines, in insertion order
    fn lines(&self) -> Vec<CartLine>;

    /// Empty the cart, keeping nothing
    fn clear(&self);

    /// Price preview: nightly sum across lines times nights
    fn subtotal(&self) -> Decimal {
        let nights = self.dates().map(|d| d.nights()).unwrap_or(0).max(0);
        self.lines()
            .iter()
            .map(|l| l.nightly_price * Decimal::from(nights))
            .sum()
    }

    /// Turn the cart into a booking creation payload
    fn to_booking_create(&self) -> AppResult<BookingCreate> {
        let range = self
            .dates()
            .ok_or_else(|| AppError::validation("select check-in and check-out dates first"))?;
        let lines = self.lines();
        if lines.is_empty() {
            return Err(AppError::new(ErrorCode::BookingEmpty));
        }
        Ok(BookingCreate {
            rooms: lines
                .into_iter()
                .map(|l| RoomSelection {
                    room_id: l.room_id,
                    occupants: l.occupants,
                })
                .collect(),
            check_in: range.check_in,
            check_out: range.check_out,
        })
    }
}

#[derive(Debug, Default)]
struct CartState {
    range: Option<StayRangeQuery>,
    lines: Vec<CartLine>,
}

/// In-memory cart store for the application root
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<CartState>,
}

impl InMemoryCartStore {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn dates(&self) -> Option<StayRangeQuery> {
        self.inner.read().expect("cart lock poisoned").range
    }

    fn set_dates(&self, range: StayRangeQuery) -> AppResult<()> {
        if !range.is_valid() {
            return Err(AppError::validation("stay must span at least one night")
                .with_detail("check_in", range.check_in.to_string())
                .with_detail("check_out", range.check_out.to_string()));
        }
        self.inner.write().expect("cart lock poisoned").range = Some(range);
        Ok(())
    }

    fn add(&self, line: CartLine) -> AppResult<()> {
        let mut state = self.inner.write().expect("cart lock poisoned");
        if state.lines.iter().any(|l| l.room_id == line.room_id) {
            return Err(
                AppError::with_message(ErrorCode::AlreadyExists, "room is already in the cart")
                    .with_detail("room_id", line.room_id),
            );
        }
        state.lines.push(line);
        Ok(())
    }

    fn remove(&self, room_id: &str) -> AppResult<()> {
        let mut state = self.inner.write().expect("cart lock poisoned");
        let before = state.lines.len();
        state.lines.retain(|l| l.room_id != room_id);
        if state.lines.len() == before {
            return Err(AppError::not_found("Cart line"));
        }
        Ok(())
    }

    fn lines(&self) -> Vec<CartLine> {
        self.inner.read().expect("cart lock poisoned").lines.clone()
    }

    fn clear(&self) {
        let mut state = self.inner.write().expect("cart lock poisoned");
        *state = CartState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::RoomStatus;

    fn range(nights: u64) -> StayRangeQuery {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        StayRangeQuery {
            check_in,
            check_out: check_in + chrono::Days::new(nights),
        }
    }

    fn room(id: &str, number: &str) -> Room {
        Room {
            id: id.to_string(),
            room_number: number.to_string(),
            room_type_id: "rt-std".to_string(),
            floor_id: "f-1".to_string(),
            status: RoomStatus::Vacant,
        }
    }

    fn room_type(price: i64) -> RoomType {
        RoomType {
            id: "rt-std".to_string(),
            name: "Standard".to_string(),
            nightly_price: Decimal::from(price),
            capacity: 2,
            bed_count: 1,
            floor_area: 22.0,
            description: None,
        }
    }

    #[test]
    fn test_add_and_subtotal() {
        let cart = InMemoryCartStore::new();
        cart.set_dates(range(3)).unwrap();
        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();
        cart.add(CartLine::new(&room("r-102", "102"), &room_type(500_000), 1))
            .unwrap();

        // (800,000 + 500,000) x 3 nights
        assert_eq!(cart.subtotal(), Decimal::from(3_900_000));
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let cart = InMemoryCartStore::new();
        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();
        let err = cart
            .add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove() {
        let cart = InMemoryCartStore::new();
        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();
        cart.remove("r-101").unwrap();
        assert!(cart.lines().is_empty());

        let err = cart.remove("r-101").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let cart = InMemoryCartStore::new();
        let err = cart.set_dates(range(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(cart.dates().is_none());
    }

    #[test]
    fn test_subtotal_without_dates_is_zero() {
        let cart = InMemoryCartStore::new();
        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_to_booking_create() {
        let cart = InMemoryCartStore::new();

        let err = cart.to_booking_create().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        cart.set_dates(range(3)).unwrap();
        let err = cart.to_booking_create().unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingEmpty);

        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();
        let create = cart.to_booking_create().unwrap();
        assert_eq!(create.rooms.len(), 1);
        assert_eq!(create.rooms[0].room_id, "r-101");
        assert_eq!(create.check_out - create.check_in, chrono::Duration::days(3));
    }

    #[test]
    fn test_clear_drops_everything() {
        let cart = InMemoryCartStore::new();
        cart.set_dates(range(2)).unwrap();
        cart.add(CartLine::new(&room("r-101", "101"), &room_type(800_000), 2))
            .unwrap();

        cart.clear();
        assert!(cart.dates().is_none());
        assert!(cart.lines().is_empty());
    }
}
