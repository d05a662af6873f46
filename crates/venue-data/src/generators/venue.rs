//! Venue generation.

use market::{Venue, VenueCategory};
use rand::rngs::StdRng;
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::VenueGenConfig;
use crate::errors::GenerateError;
use crate::generators::{text, traffic};
use crate::vocabulary::{pick, pick_distinct};

/// Generates synthetic venues around a reference point.
pub struct VenueGenerator {
    config: VenueGenConfig,
}

impl VenueGenerator {
    /// Creates a new venue generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: VenueGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: VenueGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VenueGenConfig {
        &self.config
    }

    /// Generates `config.count` venues with an RNG built from `config.seed`.
    pub fn run(&self) -> Result<Vec<Venue>, GenerateError> {
        let mut rng = seeded_rng(self.config.seed);
        self.generate_batch(self.config.count, &mut rng)
    }

    /// Generates `count` venues with ids `venue-1` through `venue-<count>`.
    ///
    /// Fails before drawing anything if the configuration is unusable.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Venue>, GenerateError> {
        self.config.validate()?;

        debug!(
            count,
            seed = ?self.config.seed,
            lat = self.config.reference.lat,
            lng = self.config.reference.lng,
            "Generating venues"
        );

        let offset = Uniform::new_inclusive(-self.config.spread_deg, self.config.spread_deg);
        Ok((1..=count)
            .map(|n| self.generate_venue(n, &offset, rng))
            .collect())
    }

    fn generate_venue(&self, n: usize, offset: &Uniform<f64>, rng: &mut impl Rng) -> Venue {
        let vocab = &self.config.vocabulary;

        let category = VenueCategory::ALL
            .choose(rng)
            .copied()
            .unwrap_or(VenueCategory::Cafe);
        let name = text::compose_name(category, vocab, rng);
        let rating = round1(rng.gen_range(3.0..=5.0));
        let price_tier: u8 = rng.gen_range(1..=4);

        let specialty_count = rng.gen_range(1..=3);
        let specialties = pick_distinct(&vocab.specialties, specialty_count, rng);
        let tag_count = rng.gen_range(2..=5);
        let tags = pick_distinct(&vocab.tags, tag_count, rng);

        let open_hours = text::open_hours(rng);

        let neighborhood = pick(&vocab.neighborhoods, rng).to_string();
        let street_number: u32 = rng.gen_range(1..=200);
        let address = text::address(street_number, &neighborhood);

        let template = pick(&vocab.description_templates, rng);
        let description = text::describe(template, category, &specialties, &neighborhood);

        // Competitors may repeat each other or the venue's own name.
        let competitor_count = rng.gen_range(2..=4);
        let competitors = (0..competitor_count)
            .map(|_| text::compose_name(category, vocab, rng))
            .collect();

        let traffic_mix = traffic::traffic_mix(rng);

        let popularity: u8 = rng.gen_range(50..=100);
        let cuisine = (category == VenueCategory::Restaurant)
            .then(|| pick(&vocab.cuisines, rng).to_string());
        let peak_hours = text::peak_hours(rng);
        let image_url = text::image_url(category, rng);
        let review_count: u32 = rng.gen_range(10..=509);
        let distance_km = round1(rng.gen_range(0.1..=5.0));
        let daily_visitors: u32 = rng.gen_range(50..=349);
        let year_established: u16 = rng.gen_range(2000..=2022);
        let market_share_pct: u8 = rng.gen_range(5..=24);
        let growth_rate_pct: i8 = rng.gen_range(-5..=14);
        let social_followers: u32 = rng.gen_range(500..=10_499);
        // Spend scales with the price tier (THB per customer).
        let avg_spend = rng.gen_range(100u32..=399) * u32::from(price_tier);
        let retention_pct: u8 = rng.gen_range(50..=94);
        let density_score: u8 = rng.gen_range(1..=10);

        let position = self
            .config
            .reference
            .offset(offset.sample(rng), offset.sample(rng));

        Venue {
            id: format!("venue-{n}"),
            name,
            position,
            category,
            rating,
            price_tier,
            popularity,
            cuisine,
            specialties,
            tags,
            open_hours,
            peak_hours,
            neighborhood,
            address,
            image_url,
            description,
            review_count,
            daily_visitors,
            distance_km,
            year_established,
            market_share_pct,
            growth_rate_pct,
            social_followers,
            avg_spend,
            retention_pct,
            density_score,
            traffic_mix,
            competitors,
        }
    }
}

impl Default for VenueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic RNG for `Some(seed)`, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
