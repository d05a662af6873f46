//! Venue domain types shared by the market dashboard.
//!
//! [`models`] holds the venue record and its value types; [`queries`] holds
//! the read-only filtering, sorting, and statistics used by the map and list views.

pub mod models;
pub mod queries;

pub use models::{GeoPoint, RatingBand, TrafficMix, Venue, VenueCategory, format_price_tier};
pub use queries::{
    CategoryBreakdown, MarketSnapshot, MarketStatistics, SortOrder, VenueFilter, VenueSortBy,
};
