//! The record of outfits that were actually worn.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{GarmentId, MatchScore, Occasion, Recommendation, WeatherReading};

/// An outfit the user chose to wear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WornOutfit {
    /// Unique identifier of this history entry.
    pub id: Uuid,
    /// The garments worn, in presentation order.
    pub garments: Vec<GarmentId>,
    /// What the outfit was for.
    pub occasion: Occasion,
    /// The weather at the time, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReading>,
    /// The score the outfit was presented with, if it was a recommendation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<MatchScore>,
    /// When it was worn.
    pub worn_at: DateTime<Utc>,
}

impl WornOutfit {
    /// A history entry for a hand-picked set of garments.
    #[must_use]
    pub fn new(garments: Vec<GarmentId>, occasion: Occasion, worn_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            garments,
            occasion,
            weather: None,
            match_score: None,
            worn_at,
        }
    }

    /// A history entry for a recommendation the user accepted.
    #[must_use]
    pub fn from_recommendation(
        recommendation: &Recommendation<'_>,
        occasion: Occasion,
        weather: Option<WeatherReading>,
        worn_at: DateTime<Utc>,
    ) -> Self {
        Self {
            weather,
            match_score: Some(recommendation.match_score),
            ..Self::new(recommendation.outfit.garment_ids(), occasion, worn_at)
        }
    }

    /// The calendar day (UTC) the outfit was worn on.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.worn_at.date_naive()
    }
}

/// The serialized versions of a day's history file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
pub(super) enum HistoryFile {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        outfits: Vec<WornOutfit>,
    },
}

impl From<HistoryFile> for Vec<WornOutfit> {
    fn from(file: HistoryFile) -> Self {
        match file {
            HistoryFile::V1 { outfits } => outfits,
        }
    }
}

impl From<Vec<WornOutfit>> for HistoryFile {
    fn from(outfits: Vec<WornOutfit>) -> Self {
        Self::V1 { outfits }
    }
}
