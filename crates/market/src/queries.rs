//! Read-only queries over a generated venue snapshot.
//!
//! The dashboard filters, sorts, and summarises venues through these types.
//! Nothing here mutates the snapshot; query results borrow from it.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Venue, VenueCategory};

/// Venue sort field options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSortBy {
    /// Keep generation order.
    #[default]
    Generated,
    Name,
    Rating,
    PriceTier,
    Popularity,
    Distance,
    DailyVisitors,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Map/list filter parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueFilter {
    /// Search by name or tag (case-insensitive partial match)
    pub search: Option<String>,
    /// Filter by category
    pub category: Option<VenueCategory>,
    /// Exact price tier (1-4)
    pub price_tier: Option<u8>,
    /// Minimum rating
    pub min_rating: Option<f64>,
    /// Sort field
    #[serde(default)]
    pub sort_by: VenueSortBy,
    /// Sort direction
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl VenueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn category(mut self, category: VenueCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price_tier(mut self, tier: u8) -> Self {
        self.price_tier = Some(tier);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn sort(mut self, sort_by: VenueSortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Returns true if the venue passes every configured criterion.
    pub fn matches(&self, venue: &Venue) -> bool {
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
            && !venue.matches_search(search)
        {
            return false;
        }
        if self.category.is_some_and(|c| c != venue.category) {
            return false;
        }
        if self.price_tier.is_some_and(|t| t != venue.price_tier) {
            return false;
        }
        if self.min_rating.is_some_and(|r| venue.rating < r) {
            return false;
        }
        true
    }

    fn compare(&self, a: &Venue, b: &Venue) -> Ordering {
        let ordering = match self.sort_by {
            VenueSortBy::Generated => Ordering::Equal,
            VenueSortBy::Name => a.name.cmp(&b.name),
            VenueSortBy::Rating => a.rating.total_cmp(&b.rating),
            VenueSortBy::PriceTier => a.price_tier.cmp(&b.price_tier),
            VenueSortBy::Popularity => a.popularity.cmp(&b.popularity),
            VenueSortBy::Distance => a.distance_km.total_cmp(&b.distance_km),
            VenueSortBy::DailyVisitors => a.daily_visitors.cmp(&b.daily_visitors),
        };
        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Per-category venue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub cafe: usize,
    pub restaurant: usize,
    pub bakery: usize,
    pub coffee_shop: usize,
}

impl CategoryBreakdown {
    pub fn count(&self, category: VenueCategory) -> usize {
        match category {
            VenueCategory::Cafe => self.cafe,
            VenueCategory::Restaurant => self.restaurant,
            VenueCategory::Bakery => self.bakery,
            VenueCategory::CoffeeShop => self.coffee_shop,
        }
    }

    fn record(&mut self, category: VenueCategory) {
        match category {
            VenueCategory::Cafe => self.cafe += 1,
            VenueCategory::Restaurant => self.restaurant += 1,
            VenueCategory::Bakery => self.bakery += 1,
            VenueCategory::CoffeeShop => self.coffee_shop += 1,
        }
    }
}

/// Summary figures for the analytics sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatistics {
    pub total_venues: usize,
    /// Rounded to one decimal.
    pub avg_rating: f64,
    /// Rounded to one decimal.
    pub avg_price_tier: f64,
    pub categories: CategoryBreakdown,
    pub avg_daily_visitors: u32,
    /// Rounded to one decimal.
    pub avg_growth_rate_pct: f64,
}

impl MarketStatistics {
    /// Summarises a set of venues. An empty set yields zero averages.
    pub fn from_venues<'a>(venues: impl IntoIterator<Item = &'a Venue>) -> Self {
        let mut stats = Self::default();
        let mut rating_sum = 0.0;
        let mut price_sum = 0u64;
        let mut visitors_sum = 0u64;
        let mut growth_sum = 0i64;

        for venue in venues {
            stats.total_venues += 1;
            stats.categories.record(venue.category);
            rating_sum += venue.rating;
            price_sum += u64::from(venue.price_tier);
            visitors_sum += u64::from(venue.daily_visitors);
            growth_sum += i64::from(venue.growth_rate_pct);
        }

        if stats.total_venues == 0 {
            return stats;
        }

        let n = stats.total_venues as f64;
        stats.avg_rating = round1(rating_sum / n);
        stats.avg_price_tier = round1(price_sum as f64 / n);
        stats.avg_daily_visitors = (visitors_sum as f64 / n).round() as u32;
        stats.avg_growth_rate_pct = round1(growth_sum as f64 / n);
        stats
    }

    /// Share of the given category in percent, 0 when there are no venues.
    pub fn category_share_pct(&self, category: VenueCategory) -> f64 {
        if self.total_venues == 0 {
            return 0.0;
        }
        self.categories.count(category) as f64 / self.total_venues as f64 * 100.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Immutable, shareable view of one generation run.
///
/// Cloning is cheap and the snapshot can be handed to other threads.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    venues: Arc<[Venue]>,
}

impl MarketSnapshot {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self {
            venues: venues.into(),
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// Returns the venues passing the filter, in the filter's sort order.
    pub fn query(&self, filter: &VenueFilter) -> Vec<&Venue> {
        let mut matched: Vec<&Venue> =
            self.venues.iter().filter(|v| filter.matches(v)).collect();
        // Stable sort keeps generation order among equal keys.
        matched.sort_by(|a, b| filter.compare(a, b));
        debug!(
            total = self.venues.len(),
            matched = matched.len(),
            "Filtered venue snapshot"
        );
        matched
    }

    pub fn statistics(&self, filter: &VenueFilter) -> MarketStatistics {
        MarketStatistics::from_venues(self.venues.iter().filter(|v| filter.matches(v)))
    }
}

impl From<Vec<Venue>> for MarketSnapshot {
    fn from(venues: Vec<Venue>) -> Self {
        Self::new(venues)
    }
}
