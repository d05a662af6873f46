//! Configuration types for venue generation.

use market::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;
use crate::vocabulary::Vocabulary;

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lng: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lng: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Returns the square box extending `spread` degrees on each side of `center`.
    pub fn around(center: GeoPoint, spread: f64) -> Self {
        Self {
            min_lat: center.lat - spread,
            min_lng: center.lng - spread,
            max_lat: center.lat + spread,
            max_lng: center.lng + spread,
        }
    }

    /// Returns true if the point lies inside the box or on its edge.
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Pre-defined reference points.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Central Bangkok.
    pub const BANGKOK: GeoPoint = GeoPoint::new(13.7563, 100.5018);
}

/// Default half-width of the scatter box, in degrees (roughly 5.5 km).
pub const DEFAULT_SPREAD_DEG: f64 = 0.05;

/// Largest accepted spread: half the latitude range.
pub const MAX_SPREAD_DEG: f64 = 90.0;

/// Default number of venues per session.
pub const DEFAULT_VENUE_COUNT: usize = 100;

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueGenConfig {
    /// Number of venues to generate.
    pub count: usize,

    /// Center around which positions are scattered.
    pub reference: GeoPoint,

    /// Maximum offset from the reference point, in degrees, per axis.
    pub spread_deg: f64,

    /// Seed for reproducible output. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Sampling universes for names, tags, and text.
    pub vocabulary: Vocabulary,
}

impl Default for VenueGenConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_VENUE_COUNT,
            reference: Region::BANGKOK,
            spread_deg: DEFAULT_SPREAD_DEG,
            seed: None,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl VenueGenConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_reference(mut self, reference: GeoPoint) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_spread(mut self, degrees: f64) -> Self {
        self.spread_deg = degrees;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// The box every generated position falls into.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::around(self.reference, self.spread_deg)
    }

    /// Checks the geometric inputs and every vocabulary.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.reference.is_finite() {
            return Err(GenerateError::InvalidArgument(format!(
                "reference point must be finite, got ({}, {})",
                self.reference.lat, self.reference.lng
            )));
        }
        if !(0.0..=MAX_SPREAD_DEG).contains(&self.spread_deg) {
            return Err(GenerateError::InvalidArgument(format!(
                "spread must be between 0 and {MAX_SPREAD_DEG} degrees, got {}",
                self.spread_deg
            )));
        }
        self.vocabulary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_around() {
        let bbox = BoundingBox::around(Region::BANGKOK, 0.05);
        assert!(bbox.contains(Region::BANGKOK));
        assert!(bbox.contains(Region::BANGKOK.offset(0.05, -0.05)));
        assert!(!bbox.contains(Region::BANGKOK.offset(0.051, 0.0)));

        let center = bbox.center();
        assert!((center.lat - Region::BANGKOK.lat).abs() < 1e-9);
        assert!((center.lng - Region::BANGKOK.lng).abs() < 1e-9);
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: VenueGenConfig = serde_json::from_str(r#"{"count": 12, "seed": 7}"#).unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.reference, Region::BANGKOK);
        assert_eq!(config.spread_deg, DEFAULT_SPREAD_DEG);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let config = VenueGenConfig::default().with_spread(-1.0);
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));

        let config = VenueGenConfig::default().with_reference(GeoPoint::new(f64::NAN, 100.0));
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_spread() {
        for spread in [1e308, f64::MAX, f64::INFINITY, f64::NAN, MAX_SPREAD_DEG + 0.1] {
            let config = VenueGenConfig::default().with_spread(spread);
            assert!(
                matches!(config.validate(), Err(GenerateError::InvalidArgument(_))),
                "{spread}"
            );
        }
        assert!(VenueGenConfig::default().with_spread(MAX_SPREAD_DEG).validate().is_ok());
    }
}
