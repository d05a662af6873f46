//! Venue dump - generates the dashboard's venue list as JSON
//!
//! Run with:
//! ```
//! VENUE_SEED=42 cargo run -p venue-data --bin venues > venues.json
//! ```
//!
//! `VENUE_CONFIG` may point at a JSON `VenueGenConfig`; `VENUE_COUNT` and
//! `VENUE_SEED` override its count and seed.

use std::str::FromStr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use venue_data::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(|key| std::env::var(key).ok())?;
    tracing::info!(
        count = config.count,
        seed = ?config.seed,
        "Generating venues"
    );

    let venues = VenueGenerator::with_config(config).run()?;
    let snapshot = MarketSnapshot::new(venues);
    let stats = snapshot.statistics(&VenueFilter::default());

    tracing::info!("Generation completed!");
    tracing::info!("  Venues: {}", stats.total_venues);
    for category in VenueCategory::ALL {
        tracing::info!("  {}: {}", category, stats.categories.count(category));
    }
    tracing::info!("  Average rating: {}", stats.avg_rating);

    let json = serde_json::to_string_pretty(snapshot.venues())?;
    println!("{json}");

    Ok(())
}

/// Builds the run configuration from `VENUE_CONFIG`, then applies the
/// `VENUE_COUNT` and `VENUE_SEED` overrides on top.
fn load_config(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<VenueGenConfig> {
    let mut config = match lookup("VENUE_CONFIG") {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config file {path}"))?
        }
        None => VenueGenConfig::default(),
    };

    if let Some(count) = parse_override::<usize>(&lookup, "VENUE_COUNT") {
        config.count = count;
    }
    if let Some(seed) = parse_override::<u64>(&lookup, "VENUE_SEED") {
        config.seed = Some(seed);
    }

    Ok(config)
}

/// Parses an override, ignoring it with a warning if malformed.
fn parse_override<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn write_config(name: &str, json: &str) -> String {
        let file = format!("venues-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, json).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_config(lookup_from(&[])).unwrap();
        assert_eq!(config.count, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.reference, Region::BANGKOK);
    }

    #[test]
    fn test_env_overrides_win_over_config_file() {
        let path = write_config("overrides", r#"{"count": 5, "seed": 1, "spread_deg": 0.02}"#);
        let config = load_config(lookup_from(&[
            ("VENUE_CONFIG", path.as_str()),
            ("VENUE_COUNT", "12"),
            ("VENUE_SEED", " 99 "),
        ]))
        .unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.spread_deg, 0.02);
    }

    #[test]
    fn test_config_file_alone_is_used() {
        let path = write_config("plain", r#"{"count": 7, "seed": 3}"#);
        let config = load_config(lookup_from(&[("VENUE_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.count, 7);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_malformed_overrides_are_ignored() {
        let config = load_config(lookup_from(&[
            ("VENUE_COUNT", "-4"),
            ("VENUE_SEED", "forty-two"),
        ]))
        .unwrap();
        assert_eq!(config.count, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_missing_or_invalid_config_file_is_an_error() {
        let missing = load_config(lookup_from(&[("VENUE_CONFIG", "/nonexistent/venues.json")]));
        assert!(missing.is_err());

        let path = write_config("broken", "{not json");
        assert!(load_config(lookup_from(&[("VENUE_CONFIG", path.as_str())])).is_err());
    }
}
