use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::Color;

/// The user's stored style preferences.
///
/// Only the color sets affect which garments are recommended. The remaining
/// fields are collected during onboarding and used for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Colors the user likes to wear. A garment must have at least one of
    /// these to be recommended.
    #[serde(default)]
    pub favorite_colors: BTreeSet<Color>,

    /// Colors the user never wants to wear.
    ///
    /// Overlap with `favorite_colors` is allowed; the avoid list wins.
    #[serde(default)]
    pub avoid_colors: BTreeSet<Color>,

    /// Style keywords, e.g. "minimalist", "streetwear".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,

    /// Whether the user leans towards neutrals or color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_spectrum: Option<ColorSpectrum>,

    /// Comfort preferences.
    #[serde(default)]
    pub comfort: Comfort,

    /// Home location, used to look up the weather.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl StyleProfile {
    /// A profile with the given favorite and avoided colors.
    #[must_use]
    pub fn with_colors<F, A>(favorite: F, avoid: A) -> Self
    where
        F: IntoIterator<Item = Color>,
        A: IntoIterator<Item = Color>,
    {
        Self {
            favorite_colors: favorite.into_iter().collect(),
            avoid_colors: avoid.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Whether the color is one of the user's favorites.
    #[must_use]
    pub fn likes(&self, color: &Color) -> bool {
        self.favorite_colors.contains(color)
    }

    /// Whether the color is on the avoid list.
    #[must_use]
    pub fn avoids(&self, color: &Color) -> bool {
        self.avoid_colors.contains(color)
    }
}

/// Broad color preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpectrum {
    /// Blacks, whites, greys and earth tones.
    Neutral,
    /// Bright and saturated colors.
    Colorful,
}

/// Comfort preferences gathered during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comfort {
    /// Willingness to wear heels.
    pub heels: Willingness,
    /// Willingness to wear fitted clothing.
    pub tight_clothing: Willingness,
    /// Skirts, trousers, or either.
    pub skirts_vs_pants: LegwearPreference,
    /// Whether layered outfits are welcome.
    pub layers: Layering,
}

/// A three-way preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Willingness {
    /// Happy to.
    Yes,
    /// Depends on the day.
    #[default]
    Sometimes,
    /// Rather not.
    No,
}

/// Preferred legwear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LegwearPreference {
    /// Skirts and dresses.
    Skirts,
    /// Trousers.
    Pants,
    /// No preference.
    #[default]
    Both,
}

/// Layering preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layering {
    /// Enjoys layered looks.
    PreferLayers,
    /// Prefers a single layer.
    #[default]
    PreferSimple,
}
