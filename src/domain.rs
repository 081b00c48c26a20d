//! Domain models for wardrobe management and outfit recommendation.
//!
//! This module contains the value types the recommendation engine consumes
//! (garments, weather readings, style profiles, occasions) and the outfits it
//! produces.

mod color;
pub use color::{Color, InvalidColor};

mod config;
pub use config::Config;

/// Wardrobe entries and their attributes.
pub mod garment;
pub use garment::{Category, Formality, Garment, GarmentId, Season};

mod occasion;
pub use occasion::Occasion;

/// Outfits and their presentation scores.
pub mod outfit;
pub use outfit::{MatchScore, OutfitCandidate, Recommendation};

/// The user's style preferences.
pub mod profile;
pub use profile::StyleProfile;

mod weather;
pub use weather::{WeatherCondition, WeatherReading};
