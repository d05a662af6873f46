//! Fixed sampling universes for venue generation.
//!
//! Every list can be overridden through [`Vocabulary`]; generation validates
//! all of them before the first draw.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

pub const CAFE_NAME_PREFIXES: &[&str] = &[
    "Cafe", "Coffee", "Brew", "Bean", "Roast", "Grind", "Aroma", "Sip",
];

pub const CAFE_NAME_SUFFIXES: &[&str] = &[
    "House", "Lab", "Co.", "Bar", "Studio", "Corner", "Society", "Culture",
];

pub const RESTAURANT_NAME_PREFIXES: &[&str] = &[
    "Thai", "Royal", "Golden", "Spice", "Basil", "Mango", "Elephant", "Lotus",
];

pub const RESTAURANT_NAME_SUFFIXES: &[&str] = &[
    "Kitchen", "Bistro", "Garden", "Table", "Plate", "Terrace", "Dining", "Eatery",
];

pub const CUISINES: &[&str] = &[
    "Thai",
    "International",
    "Fusion",
    "Japanese",
    "Italian",
    "French",
];

pub const SPECIALTIES: &[&str] = &[
    "Espresso",
    "Pour Over",
    "Cold Brew",
    "Latte Art",
    "Single Origin",
    "Pastries",
    "Bubble Tea",
    "Matcha",
    "Organic Coffee",
    "Specialty Tea",
    "Vegan Desserts",
    "Gluten-Free Options",
];

pub const TAGS: &[&str] = &[
    "Wifi",
    "Pet Friendly",
    "Outdoor Seating",
    "Study Spot",
    "Instagrammable",
    "Quiet",
    "Busy",
    "Vegan Options",
    "Live Music",
    "Workspace",
    "Rooftop",
    "Air Conditioned",
    "Parking Available",
    "Open Late",
    "Breakfast",
    "Brunch",
    "Lunch",
    "Dinner",
];

pub const NEIGHBORHOODS: &[&str] = &[
    "Sukhumvit",
    "Silom",
    "Siam",
    "Chinatown",
    "Sathorn",
    "Thonglor",
    "Ekkamai",
    "Ari",
    "Phra Khanong",
    "On Nut",
    "Asok",
    "Phrom Phong",
    "Chit Lom",
    "Sala Daeng",
];

/// Description templates. `{category}`, `{specialties}` and `{neighborhood}`
/// are substituted at generation time.
pub const DESCRIPTION_TEMPLATES: &[&str] = &[
    concat!(
        "A charming {category} offering a variety of {specialties}. ",
        "Popular among locals and tourists alike."
    ),
    "This cozy {category} is known for its {specialties}. A perfect spot to relax or work.",
    "One of Bangkok's hidden gems, this {category} specializes in {specialties}.",
    "A trendy {category} in the heart of {neighborhood}, famous for its {specialties}.",
    "This stylish {category} offers exceptional {specialties} in a relaxed atmosphere.",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// The full set of word lists a generator samples from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub cafe_prefixes: Vec<String>,
    pub cafe_suffixes: Vec<String>,
    pub restaurant_prefixes: Vec<String>,
    pub restaurant_suffixes: Vec<String>,
    pub cuisines: Vec<String>,
    pub specialties: Vec<String>,
    pub tags: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub description_templates: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            cafe_prefixes: owned(CAFE_NAME_PREFIXES),
            cafe_suffixes: owned(CAFE_NAME_SUFFIXES),
            restaurant_prefixes: owned(RESTAURANT_NAME_PREFIXES),
            restaurant_suffixes: owned(RESTAURANT_NAME_SUFFIXES),
            cuisines: owned(CUISINES),
            specialties: owned(SPECIALTIES),
            tags: owned(TAGS),
            neighborhoods: owned(NEIGHBORHOODS),
            description_templates: owned(DESCRIPTION_TEMPLATES),
        }
    }
}

impl Vocabulary {
    fn named_lists(&self) -> [(&'static str, &[String]); 9] {
        [
            ("cafe_prefixes", self.cafe_prefixes.as_slice()),
            ("cafe_suffixes", self.cafe_suffixes.as_slice()),
            ("restaurant_prefixes", self.restaurant_prefixes.as_slice()),
            ("restaurant_suffixes", self.restaurant_suffixes.as_slice()),
            ("cuisines", self.cuisines.as_slice()),
            ("specialties", self.specialties.as_slice()),
            ("tags", self.tags.as_slice()),
            ("neighborhoods", self.neighborhoods.as_slice()),
            ("description_templates", self.description_templates.as_slice()),
        ]
    }

    /// Fails on the first empty list.
    pub fn validate(&self) -> Result<(), GenerateError> {
        match self.named_lists().iter().find(|(_, words)| words.is_empty()) {
            Some((name, _)) => Err(GenerateError::Configuration { vocabulary: *name }),
            None => Ok(()),
        }
    }
}

/// Picks one entry uniformly. Returns an empty string for an empty list, which
/// [`Vocabulary::validate`] rules out before generation starts.
pub fn pick<'a>(words: &'a [String], rng: &mut impl Rng) -> &'a str {
    words.choose(rng).map(String::as_str).unwrap_or_default()
}

/// Draws up to `k` distinct entries without replacement, capped at the list size.
pub fn pick_distinct(words: &[String], k: usize, rng: &mut impl Rng) -> Vec<String> {
    let amount = k.min(words.len());
    rand::seq::index::sample(rng, words.len(), amount)
        .into_iter()
        .map(|i| words[i].clone())
        .collect()
}
