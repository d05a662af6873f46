//! Names, addresses, opening hours, and prose for generated venues.

use market::VenueCategory;
use rand::Rng;

use crate::vocabulary::{Vocabulary, pick};

/// Lunch and dinner rush windows.
const PEAK_WINDOWS: [&str; 2] = ["11:00 - 14:00", "17:00 - 20:00"];

/// Composes a "<prefix> <suffix>" name from the vocabulary matching the category.
pub fn compose_name(category: VenueCategory, vocab: &Vocabulary, rng: &mut impl Rng) -> String {
    let (prefixes, suffixes) = if category.is_coffee() {
        (&vocab.cafe_prefixes, &vocab.cafe_suffixes)
    } else {
        (&vocab.restaurant_prefixes, &vocab.restaurant_suffixes)
    };
    let prefix = pick(prefixes, rng);
    let suffix = pick(suffixes, rng);
    format!("{prefix} {suffix}")
}

/// Draws opening (6-9) and closing (18-23) hours independently.
pub fn open_hours(rng: &mut impl Rng) -> String {
    let open: u8 = rng.gen_range(6..=9);
    let close: u8 = rng.gen_range(18..=23);
    format!("{open}:00 - {close}:00")
}

pub fn peak_hours(rng: &mut impl Rng) -> String {
    let window = if rng.gen_bool(0.5) {
        PEAK_WINDOWS[0]
    } else {
        PEAK_WINDOWS[1]
    };
    window.to_string()
}

pub fn address(street_number: u32, neighborhood: &str) -> String {
    format!("{street_number} {neighborhood}, Bangkok")
}

/// Fills a description template.
pub fn describe(
    template: &str,
    category: VenueCategory,
    specialties: &[String],
    neighborhood: &str,
) -> String {
    template
        .replace("{category}", category.label())
        .replace("{specialties}", &specialties.join(" and "))
        .replace("{neighborhood}", neighborhood)
}

/// Random stock photo URL; restaurants get food imagery, everything else coffee.
pub fn image_url(category: VenueCategory, rng: &mut impl Rng) -> String {
    let keywords = if category == VenueCategory::Restaurant {
        "restaurant-food"
    } else {
        "coffee-cafe"
    };
    let sig: u32 = rng.gen_range(0..1000);
    format!("https://source.unsplash.com/random/300x200/?{keywords}&sig={sig}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{CAFE_NAME_PREFIXES, RESTAURANT_NAME_SUFFIXES};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_compose_name_uses_category_vocabulary() {
        let vocab = Vocabulary::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let name = compose_name(VenueCategory::CoffeeShop, &vocab, &mut rng);
            let (prefix, _) = name.split_once(' ').unwrap();
            assert!(CAFE_NAME_PREFIXES.contains(&prefix), "{name}");

            let name = compose_name(VenueCategory::Bakery, &vocab, &mut rng);
            let (_, suffix) = name.split_once(' ').unwrap();
            assert!(RESTAURANT_NAME_SUFFIXES.contains(&suffix), "{name}");
        }
    }

    #[test]
    fn test_open_hours_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let hours = open_hours(&mut rng);
            let (open, close) = hours.split_once(" - ").unwrap();
            let open: u8 = open.trim_end_matches(":00").parse().unwrap();
            let close: u8 = close.trim_end_matches(":00").parse().unwrap();
            assert!((6..=9).contains(&open));
            assert!((18..=23).contains(&close));
        }
    }

    #[test]
    fn test_describe_substitutes_placeholders() {
        let specialties = vec!["Matcha".to_string(), "Pastries".to_string()];
        let text = describe(
            "A trendy {category} in the heart of {neighborhood}, famous for its {specialties}.",
            VenueCategory::CoffeeShop,
            &specialties,
            "Ari",
        );
        assert_eq!(
            text,
            "A trendy coffee shop in the heart of Ari, famous for its Matcha and Pastries."
        );
    }

    #[test]
    fn test_address_and_image() {
        assert_eq!(address(42, "Silom"), "42 Silom, Bangkok");

        let mut rng = StdRng::seed_from_u64(1);
        assert!(image_url(VenueCategory::Restaurant, &mut rng).contains("restaurant-food"));
        assert!(image_url(VenueCategory::Cafe, &mut rng).contains("coffee-cafe"));
    }
}
