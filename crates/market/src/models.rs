use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns this point shifted by the given offsets in degrees.
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            lat: self.lat + d_lat,
            lng: self.lng + d_lng,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Kind of venue shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueCategory {
    Cafe,
    Restaurant,
    Bakery,
    CoffeeShop,
}

impl VenueCategory {
    pub const ALL: [VenueCategory; 4] = [
        VenueCategory::Cafe,
        VenueCategory::Restaurant,
        VenueCategory::Bakery,
        VenueCategory::CoffeeShop,
    ];

    /// Returns the serialized identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueCategory::Cafe => "cafe",
            VenueCategory::Restaurant => "restaurant",
            VenueCategory::Bakery => "bakery",
            VenueCategory::CoffeeShop => "coffee_shop",
        }
    }

    /// Returns the human-readable label used in generated prose.
    pub fn label(&self) -> &'static str {
        match self {
            VenueCategory::Cafe => "cafe",
            VenueCategory::Restaurant => "restaurant",
            VenueCategory::Bakery => "bakery",
            VenueCategory::CoffeeShop => "coffee shop",
        }
    }

    /// Cafes and coffee shops share the coffee naming vocabulary; everything else
    /// is named like a restaurant.
    pub fn is_coffee(&self) -> bool {
        matches!(self, VenueCategory::Cafe | VenueCategory::CoffeeShop)
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer origin breakdown in percent. The three shares always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficMix {
    pub locals: u8,
    pub tourists: u8,
    pub business: u8,
}

impl TrafficMix {
    pub fn total(&self) -> u32 {
        u32::from(self.locals) + u32::from(self.tourists) + u32::from(self.business)
    }
}

/// A synthetic cafe or restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
    pub category: VenueCategory,
    pub rating: f64,
    pub price_tier: u8,
    pub popularity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub specialties: Vec<String>,
    pub tags: Vec<String>,
    pub open_hours: String,
    pub peak_hours: String,
    pub neighborhood: String,
    pub address: String,
    pub image_url: String,
    pub description: String,
    pub review_count: u32,
    pub daily_visitors: u32,
    pub distance_km: f64,
    pub year_established: u16,
    pub market_share_pct: u8,
    pub growth_rate_pct: i8,
    pub social_followers: u32,
    /// Average spend per customer in THB.
    pub avg_spend: u32,
    pub retention_pct: u8,
    pub density_score: u8,
    pub traffic_mix: TrafficMix,
    pub competitors: Vec<String>,
}

impl Venue {
    pub fn rating_band(&self) -> RatingBand {
        RatingBand::from_rating(self.rating)
    }

    /// Case-insensitive match against the name and every tag.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Coarse rating bucket, used for marker colours on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingBand::Excellent
        } else if rating >= 4.0 {
            RatingBand::Good
        } else if rating >= 3.5 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            RatingBand::Excellent => "green",
            RatingBand::Good => "blue",
            RatingBand::Fair => "gold",
            RatingBand::Poor => "red",
        }
    }
}

/// Renders a price tier as repeated baht signs, e.g. tier 3 -> "฿฿฿".
pub fn format_price_tier(tier: u8) -> String {
    "฿".repeat(usize::from(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_band_thresholds() {
        assert_eq!(RatingBand::from_rating(5.0), RatingBand::Excellent);
        assert_eq!(RatingBand::from_rating(4.5), RatingBand::Excellent);
        assert_eq!(RatingBand::from_rating(4.4), RatingBand::Good);
        assert_eq!(RatingBand::from_rating(3.5), RatingBand::Fair);
        assert_eq!(RatingBand::from_rating(3.0), RatingBand::Poor);
        assert_eq!(RatingBand::Poor.marker_color(), "red");
    }

    #[test]
    fn test_format_price_tier() {
        assert_eq!(format_price_tier(1), "฿");
        assert_eq!(format_price_tier(4), "฿฿฿฿");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&VenueCategory::CoffeeShop).unwrap();
        assert_eq!(json, "\"coffee_shop\"");
        assert_eq!(VenueCategory::CoffeeShop.label(), "coffee shop");
        assert!(VenueCategory::CoffeeShop.is_coffee());
        assert!(!VenueCategory::Bakery.is_coffee());
    }

    #[test]
    fn test_geo_point_offset() {
        let p = GeoPoint::new(13.0, 100.0).offset(0.5, -0.25);
        assert_eq!(p, GeoPoint::new(13.5, 99.75));
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
    }
}
