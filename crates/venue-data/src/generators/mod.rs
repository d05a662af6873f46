//! Venue generators.
//!
//! - [`VenueGenerator`]: full venue records around a reference point
//! - [`text`]: names, addresses, opening hours, and descriptions
//! - [`traffic`]: locals/tourists/business split

pub mod text;
pub mod traffic;
pub mod venue;

pub use venue::{VenueGenerator, seeded_rng};
