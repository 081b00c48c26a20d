use std::fmt;

use serde::{Deserialize, Serialize, Serializer, ser::SerializeSeq};

use crate::domain::{Garment, GarmentId};

/// A set of garments worn together.
///
/// Every outfit is anchored on a top and a bottom. Shoes, outerwear and an
/// accessory are optional. Garments are borrowed from the wardrobe the
/// outfit was assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutfitCandidate<'a> {
    /// The top half of the anchor pair.
    pub top: &'a Garment,
    /// The bottom half of the anchor pair.
    pub bottom: &'a Garment,
    /// Footwear, if a compatible pair was found.
    pub shoes: Option<&'a Garment>,
    /// A coat or jacket, if one was called for and a compatible one found.
    pub outerwear: Option<&'a Garment>,
    /// An accessory, if a compatible one was found.
    pub accessory: Option<&'a Garment>,
}

impl<'a> OutfitCandidate<'a> {
    /// An outfit consisting of just the anchor pair.
    #[must_use]
    pub const fn new(top: &'a Garment, bottom: &'a Garment) -> Self {
        Self {
            top,
            bottom,
            shoes: None,
            outerwear: None,
            accessory: None,
        }
    }

    /// The garments in presentation order: top, bottom, shoes, outerwear,
    /// accessory.
    pub fn garments(&self) -> impl Iterator<Item = &'a Garment> + use<'a> {
        [
            Some(self.top),
            Some(self.bottom),
            self.shoes,
            self.outerwear,
            self.accessory,
        ]
        .into_iter()
        .flatten()
    }

    /// The identifiers of the garments, in presentation order.
    #[must_use]
    pub fn garment_ids(&self) -> Vec<GarmentId> {
        self.garments().map(Garment::id).collect()
    }

    /// The number of garments in the outfit. Always at least two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.garments().count()
    }

    /// Always `false`; an outfit has at least a top and a bottom.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for OutfitCandidate<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for garment in self.garments() {
            seq.serialize_element(garment)?;
        }
        seq.end()
    }
}

/// How well an outfit is presented as matching, in percent.
///
/// Scores are cosmetic: they lie in `[MIN, MAX]` and say nothing about the
/// outfit's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    /// The lowest score ever shown.
    pub const MIN: u8 = 80;
    /// The highest score ever shown.
    pub const MAX: u8 = 99;

    /// Creates a score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreOutOfRange`] if the value lies outside `[MIN, MAX]`.
    pub const fn new(value: u8) -> Result<Self, ScoreOutOfRange> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The score as a percentage.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(value: MatchScore) -> Self {
        value.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Error returned when a match score lies outside the presentable range.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "match score {0} out of range: must be between {min} and {max}",
    min = MatchScore::MIN,
    max = MatchScore::MAX
)]
pub struct ScoreOutOfRange(u8);

/// An outfit together with the score it is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
    /// The garments.
    #[serde(rename = "garments")]
    pub outfit: OutfitCandidate<'a>,
    /// The presentation score.
    pub match_score: MatchScore,
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;
    use test_case::test_case;

    use super::*;
    use crate::domain::{Category, Color, Formality, Season};

    fn garment(category: Category) -> Garment {
        Garment::new(
            category,
            nonempty![Color::new("black").unwrap()],
            nonempty![Season::Winter],
            Formality::Casual,
        )
    }

    #[test]
    fn garments_follow_slot_order() {
        let top = garment(Category::Tops);
        let bottom = garment(Category::Bottoms);
        let shoes = garment(Category::Shoes);
        let accessory = garment(Category::Accessories);

        let outfit = OutfitCandidate {
            accessory: Some(&accessory),
            shoes: Some(&shoes),
            ..OutfitCandidate::new(&top, &bottom)
        };

        let categories: Vec<_> = outfit.garments().map(Garment::category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Tops,
                Category::Bottoms,
                Category::Shoes,
                Category::Accessories
            ]
        );
        assert_eq!(outfit.len(), 4);
        assert_eq!(
            outfit.garment_ids(),
            vec![top.id(), bottom.id(), shoes.id(), accessory.id()]
        );
    }

    #[test]
    fn anchor_pair_alone_is_two_garments() {
        let top = garment(Category::Tops);
        let bottom = garment(Category::Bottoms);
        let outfit = OutfitCandidate::new(&top, &bottom);
        assert_eq!(outfit.len(), 2);
        assert!(!outfit.is_empty());
    }

    #[test_case(79, false)]
    #[test_case(80, true)]
    #[test_case(99, true)]
    #[test_case(100, false)]
    fn score_range(value: u8, valid: bool) {
        assert_eq!(MatchScore::new(value).is_ok(), valid);
    }

    #[test]
    fn out_of_range_message() {
        assert_eq!(
            MatchScore::new(100).unwrap_err().to_string(),
            "match score 100 out of range: must be between 80 and 99"
        );
    }
}
