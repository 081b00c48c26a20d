use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Color;

/// Globally unique, perpetually stable identifier of a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarmentId(Uuid);

impl GarmentId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GarmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GarmentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for GarmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for GarmentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string does not name a known variant of one of the
/// garment attribute enums.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}': expected one of {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Implements `Display`/`FromStr` for a unit-only enum using its serialized
/// names.
macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The canonical lower-case name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: concat!($($name, " "),+),
                    }),
                }
            }
        }
    };
}

/// The slot a garment fills in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, blouses, knitwear.
    Tops,
    /// Trousers, skirts, shorts.
    Bottoms,
    /// Coats and jackets.
    Outerwear,
    /// Footwear.
    Shoes,
    /// Bags, belts, jewellery, scarves.
    Accessories,
}

string_enum!(Category, "category", {
    Tops => "tops",
    Bottoms => "bottoms",
    Outerwear => "outerwear",
    Shoes => "shoes",
    Accessories => "accessories",
});

/// A season a garment is suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Spring.
    Spring,
    /// Summer.
    Summer,
    /// Autumn.
    Fall,
    /// Winter.
    Winter,
}

string_enum!(Season, "season", {
    Spring => "spring",
    Summer => "summer",
    Fall => "fall",
    Winter => "winter",
});

/// How dressy a garment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    /// Everyday wear.
    Casual,
    /// Smart-casual.
    SemiFormal,
    /// Business and evening wear.
    Formal,
}

string_enum!(Formality, "formality", {
    Casual => "casual",
    SemiFormal => "semi-formal",
    Formal => "formal",
});

/// A single entry in the wardrobe.
///
/// Garments are created already classified (category, colors, seasons,
/// formality). The only attribute that changes over a garment's life is when
/// it was last worn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GarmentData", into = "GarmentData")]
pub struct Garment {
    id: GarmentId,
    category: Category,
    colors: NonEmpty<Color>,
    seasons: BTreeSet<Season>,
    formality: Formality,
    tags: Vec<String>,
    created: DateTime<Utc>,
    last_worn: Option<DateTime<Utc>>,
}

impl Garment {
    /// Construct a new, never-worn [`Garment`].
    ///
    /// A new identifier is generated and the creation time is now. Duplicate
    /// seasons are collapsed.
    #[must_use]
    pub fn new(
        category: Category,
        colors: NonEmpty<Color>,
        seasons: NonEmpty<Season>,
        formality: Formality,
    ) -> Self {
        Self {
            id: GarmentId::new(),
            category,
            colors,
            seasons: seasons.into_iter().collect(),
            formality,
            tags: Vec::new(),
            created: Utc::now(),
            last_worn: None,
        }
    }

    /// Replace the free-form tags.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The unique, stable identifier of this garment.
    #[must_use]
    pub const fn id(&self) -> GarmentId {
        self.id
    }

    /// The outfit slot this garment fills.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The garment's colors, dominant color first.
    #[must_use]
    pub const fn colors(&self) -> &NonEmpty<Color> {
        &self.colors
    }

    /// The seasons the garment suits. Never empty.
    #[must_use]
    pub const fn seasons(&self) -> &BTreeSet<Season> {
        &self.seasons
    }

    /// How dressy the garment is.
    #[must_use]
    pub const fn formality(&self) -> Formality {
        self.formality
    }

    /// Free-form tags (materials, garment types, and so on).
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// When the garment was added to the wardrobe.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// When the garment was last worn, if ever.
    #[must_use]
    pub const fn last_worn(&self) -> Option<DateTime<Utc>> {
        self.last_worn
    }

    /// Record that the garment was worn at the given time.
    pub const fn mark_worn(&mut self, at: DateTime<Utc>) {
        self.last_worn = Some(at);
    }

    /// Whether any tag contains any of the given keywords.
    ///
    /// Matching is a case-insensitive substring test, so the keyword
    /// `"jeans"` matches the tag `"Skinny Jeans"`. Keywords must be lower
    /// case.
    #[must_use]
    pub fn has_tag_matching(&self, keywords: &[&str]) -> bool {
        self.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            keywords.iter().any(|keyword| tag.contains(keyword))
        })
    }

    /// Whether the garment suits at least one of the given seasons.
    #[must_use]
    pub fn suits_any_season(&self, seasons: &[Season]) -> bool {
        seasons.iter().any(|season| self.seasons.contains(season))
    }

    /// Whether the garment has the given color.
    #[must_use]
    pub fn has_color(&self, color: &Color) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// Error returned when a garment record violates the model's invariants.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidGarment {
    /// A garment must have at least one color.
    #[error("garment {0} has no colors")]
    NoColors(GarmentId),

    /// A garment must suit at least one season.
    #[error("garment {0} has no seasons")]
    NoSeasons(GarmentId),
}

/// The serialized shape of a garment.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GarmentData {
    id: GarmentId,
    category: Category,
    colors: Vec<Color>,
    seasons: BTreeSet<Season>,
    formality: Formality,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_worn: Option<DateTime<Utc>>,
}

impl TryFrom<GarmentData> for Garment {
    type Error = InvalidGarment;

    fn try_from(data: GarmentData) -> Result<Self, Self::Error> {
        let colors = NonEmpty::from_vec(data.colors).ok_or(InvalidGarment::NoColors(data.id))?;
        if data.seasons.is_empty() {
            return Err(InvalidGarment::NoSeasons(data.id));
        }

        Ok(Self {
            id: data.id,
            category: data.category,
            colors,
            seasons: data.seasons,
            formality: data.formality,
            tags: data.tags,
            created: data.created,
            last_worn: data.last_worn,
        })
    }
}

impl From<Garment> for GarmentData {
    fn from(garment: Garment) -> Self {
        Self {
            id: garment.id,
            category: garment.category,
            colors: garment.colors.into(),
            seasons: garment.seasons,
            formality: garment.formality,
            tags: garment.tags,
            created: garment.created,
            last_worn: garment.last_worn,
        }
    }
}
