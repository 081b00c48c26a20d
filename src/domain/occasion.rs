use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::Formality;

/// What the outfit is for.
///
/// Each occasion admits a fixed set of formality levels. Tags that are not
/// recognised are kept as [`Occasion::Other`] and treated as casual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Occasion {
    /// An ordinary day.
    #[default]
    Daily,
    /// The office.
    Work,
    /// Classes.
    School,
    /// Errands, brunch, a walk.
    CasualOuting,
    /// Dinner for two.
    DateNight,
    /// A party.
    Party,
    /// Weddings, galas, black tie.
    FormalEvent,
    /// A job interview.
    Interview,
    /// A funeral.
    Funeral,
    /// Travelling.
    Vacation,
    /// Exercise.
    Sport,
    /// Any other occasion tag.
    Other(String),
}

impl Occasion {
    /// Every named occasion.
    pub const KNOWN: &'static [Self] = &[
        Self::Daily,
        Self::Work,
        Self::School,
        Self::CasualOuting,
        Self::DateNight,
        Self::Party,
        Self::FormalEvent,
        Self::Interview,
        Self::Funeral,
        Self::Vacation,
        Self::Sport,
    ];

    /// The occasion's tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "daily",
            Self::Work => "work",
            Self::School => "school",
            Self::CasualOuting => "casual-outing",
            Self::DateNight => "date-night",
            Self::Party => "party",
            Self::FormalEvent => "formal-event",
            Self::Interview => "interview",
            Self::Funeral => "funeral",
            Self::Vacation => "vacation",
            Self::Sport => "sport",
            Self::Other(tag) => tag,
        }
    }

    /// The formality levels acceptable for this occasion.
    #[must_use]
    pub const fn admissible_formality(&self) -> &'static [Formality] {
        use Formality::{Casual, Formal, SemiFormal};

        match self {
            Self::Daily | Self::School | Self::Vacation => &[Casual, SemiFormal],
            Self::Work | Self::DateNight | Self::Party => &[SemiFormal, Formal],
            Self::FormalEvent | Self::Interview | Self::Funeral => &[Formal],
            Self::CasualOuting | Self::Sport | Self::Other(_) => &[Casual],
        }
    }

    /// Whether a garment of the given formality is acceptable.
    #[must_use]
    pub fn admits(&self, formality: Formality) -> bool {
        self.admissible_formality().contains(&formality)
    }
}

impl FromStr for Occasion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Ok(Self::KNOWN
            .iter()
            .find(|occasion| occasion.as_str() == tag)
            .cloned()
            .unwrap_or(Self::Other(tag)))
    }
}

impl From<String> for Occasion {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(occasion) => occasion,
            Err(never) => match never {},
        }
    }
}

impl From<Occasion> for String {
    fn from(value: Occasion) -> Self {
        match value {
            Occasion::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
