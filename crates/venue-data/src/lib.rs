//! Synthetic venue data for the Bangkok market dashboard.
//!
//! This crate fabricates cafe, coffee shop, bakery, and restaurant records with
//! positions, names, tags, and business metrics drawn from fixed vocabularies.
//! With a seed the output is fully reproducible.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use venue_data::prelude::*;
//!
//! let venues = generate(100, Region::BANGKOK, Some(42))?;
//! let snapshot = MarketSnapshot::new(venues);
//! let cheap_cafes = snapshot.query(
//!     &VenueFilter::new()
//!         .category(VenueCategory::Cafe)
//!         .price_tier(1),
//! );
//! ```

pub mod config;
pub mod errors;
pub mod generators;
pub mod vocabulary;

pub use market::{
    GeoPoint, MarketSnapshot, MarketStatistics, TrafficMix, Venue, VenueCategory, VenueFilter,
};

use crate::config::VenueGenConfig;
use crate::errors::GenerateError;
use crate::generators::VenueGenerator;

/// Generates `count` venues scattered around `reference`.
///
/// A zero count yields an empty list; a negative count is an invalid argument.
/// The same `seed` always yields the same venues. Without a seed the draws come
/// from OS entropy.
pub fn generate(
    count: i64,
    reference: GeoPoint,
    seed: Option<u64>,
) -> Result<Vec<Venue>, GenerateError> {
    let count = usize::try_from(count).map_err(|_| {
        GenerateError::InvalidArgument(format!("count must be non-negative, got {count}"))
    })?;

    let config = VenueGenConfig {
        count,
        reference,
        seed,
        ..Default::default()
    };
    VenueGenerator::with_config(config).run()
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region, VenueGenConfig};
    pub use crate::errors::GenerateError;
    pub use crate::generate;
    pub use crate::generators::{VenueGenerator, seeded_rng};
    pub use crate::vocabulary::Vocabulary;
    pub use market::{
        GeoPoint, MarketSnapshot, MarketStatistics, RatingBand, SortOrder, TrafficMix, Venue,
        VenueCategory, VenueFilter, VenueSortBy,
    };
}
