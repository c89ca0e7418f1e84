//! Request types for the shared crate
//!
//! Common query types used across API calls

use chrono::NaiveDate;

/// Pagination query parameters
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl PaginationQuery {
    /// Get the limit (clamped to max 100)
    pub fn limit(&self) -> u32 {
        std::cmp::min(self.per_page, 100)
    }
}

/// Ordering query parameters
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct OrderingQuery {
    /// Sort field (default: created_at)
    #[serde(default = "default_sort_field")]
    pub sort_by: String,

    /// Sort order (asc or desc, default: desc)
    #[serde(default = "default_sort_order")]
    pub order: String,
}

fn default_sort_field() -> String {
    "created_at".to_string()
}

fn default_sort_order() -> String {
    "desc".to_string()
}

impl OrderingQuery {
    /// Get sort direction (true for desc, false for asc)
    pub fn is_descending(&self) -> bool {
        self.order.to_lowercase() == "desc"
    }
}

/// Combined pagination and ordering query
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,

    #[serde(flatten)]
    pub ordering: OrderingQuery,

    /// Search keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Stay date range, used for availability lookups and booking creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StayRangeQuery {
    /// Check-in date (inclusive)
    pub check_in: NaiveDate,
    /// Check-out date (exclusive)
    pub check_out: NaiveDate,
}

impl StayRangeQuery {
    /// Number of nights in the range
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// A range is bookable when it spans at least one night
    pub fn is_valid(&self) -> bool {
        self.nights() >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let q: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, 20);
    }

    #[test]
    fn test_pagination_limit_clamped() {
        let q = PaginationQuery {
            page: 1,
            per_page: 500,
        };
        assert_eq!(q.limit(), 100);
    }

    #[test]
    fn test_ordering_direction() {
        let q = OrderingQuery {
            sort_by: "created_at".into(),
            order: "DESC".into(),
        };
        assert!(q.is_descending());

        let q = OrderingQuery {
            sort_by: "created_at".into(),
            order: "asc".into(),
        };
        assert!(!q.is_descending());
    }

    #[test]
    fn test_stay_range_nights() {
        let range = StayRangeQuery {
            check_in: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 3, 13).unwrap(),
        };
        assert_eq!(range.nights(), 3);
        assert!(range.is_valid());
    }

    #[test]
    fn test_stay_range_invalid() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let range = StayRangeQuery {
            check_in: day,
            check_out: day,
        };
        assert_eq!(range.nights(), 0);
        assert!(!range.is_valid());

        let range = StayRangeQuery {
            check_in: day,
            check_out: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
        };
        assert!(!range.is_valid());
    }
}
