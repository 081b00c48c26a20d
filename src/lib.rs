//! Weather and occasion aware outfit recommendations.
//!
//! A wardrobe of tagged garments is filtered against the weather, the
//! occasion and a personal style profile, then assembled into complete
//! outfits built around a compatible top and bottom.

pub mod domain;
pub use domain::{
    Category, Color, Config, Formality, Garment, GarmentId, MatchScore, Occasion, OutfitCandidate,
    Recommendation, Season, StyleProfile, WeatherCondition, WeatherReading,
};

pub mod engine;
pub use engine::{FixedScores, RandomScores, ScoreSource, recommend};

/// Filesystem storage for garments, profiles and outfit history.
pub mod storage;
pub use storage::{Wardrobe, WornOutfit};
