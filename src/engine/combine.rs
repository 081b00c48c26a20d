//! Assembling outfits from the filtered wardrobe.

use tracing::trace;

use crate::{
    domain::{Category, Garment, OutfitCandidate, WeatherReading},
    engine::rules::{colors_harmonious, compatible},
};

/// At most this many tops are considered.
pub const MAX_TOPS: usize = 5;

/// At most this many bottoms are considered.
pub const MAX_BOTTOMS: usize = 5;

/// Outerwear is only added when it is colder than this.
pub const OUTERWEAR_BELOW: i32 = 15;

/// Garments grouped by the outfit slot they fill.
///
/// Each pool keeps the relative order the garments had in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools<'a> {
    /// Tops.
    pub tops: Vec<&'a Garment>,
    /// Bottoms.
    pub bottoms: Vec<&'a Garment>,
    /// Shoes.
    pub shoes: Vec<&'a Garment>,
    /// Coats and jackets.
    pub outerwear: Vec<&'a Garment>,
    /// Accessories.
    pub accessories: Vec<&'a Garment>,
}

impl<'a> Pools<'a> {
    /// Partition garments by category.
    pub fn partition<I>(garments: I) -> Self
    where
        I: IntoIterator<Item = &'a Garment>,
    {
        let mut pools = Self::default();
        for garment in garments {
            let pool = match garment.category() {
                Category::Tops => &mut pools.tops,
                Category::Bottoms => &mut pools.bottoms,
                Category::Shoes => &mut pools.shoes,
                Category::Outerwear => &mut pools.outerwear,
                Category::Accessories => &mut pools.accessories,
            };
            pool.push(garment);
        }
        pools
    }

    /// The upper bound on the number of outfits [`combine`] can produce.
    #[must_use]
    pub fn max_outfits(&self) -> usize {
        self.tops.len().min(MAX_TOPS) * self.bottoms.len().min(MAX_BOTTOMS)
    }
}

/// Build every acceptable outfit from the pools.
///
/// Pairs of the first [`MAX_TOPS`] tops and first [`MAX_BOTTOMS`] bottoms are
/// visited row-major (each top against every bottom, tops in pool order). A
/// pair is kept only if it passes both compatibility rules. Each kept pair is
/// then extended with the first shoes, the first outerwear (only when a
/// reading below [`OUTERWEAR_BELOW`] is present) and the first accessory
/// whose colors harmonise with both halves of the pair. A slot with no such
/// garment is left empty; the pair is still emitted.
#[must_use]
pub fn combine<'a>(pools: &Pools<'a>, weather: Option<&WeatherReading>) -> Vec<OutfitCandidate<'a>> {
    let wants_outerwear = weather.is_some_and(|weather| weather.temperature < OUTERWEAR_BELOW);

    let mut outfits = Vec::with_capacity(pools.max_outfits());

    for &top in pools.tops.iter().take(MAX_TOPS) {
        for &bottom in pools.bottoms.iter().take(MAX_BOTTOMS) {
            if !compatible(top, bottom) {
                trace!(top = %top.id(), bottom = %bottom.id(), "rejected pair");
                continue;
            }

            let outerwear = if wants_outerwear {
                first_harmonious(&pools.outerwear, top, bottom)
            } else {
                None
            };

            outfits.push(OutfitCandidate {
                top,
                bottom,
                shoes: first_harmonious(&pools.shoes, top, bottom),
                outerwear,
                accessory: first_harmonious(&pools.accessories, top, bottom),
            });
        }
    }

    outfits
}

/// The first garment in the pool whose colors harmonise with both halves of
/// the anchor pair. Style is only checked between the top and the bottom.
fn first_harmonious<'a>(
    pool: &[&'a Garment],
    top: &Garment,
    bottom: &Garment,
) -> Option<&'a Garment> {
    pool.iter().copied().find(|candidate| {
        colors_harmonious(candidate.colors().iter(), top.colors().iter())
            && colors_harmonious(candidate.colors().iter(), bottom.colors().iter())
    })
}

#[cfg(test)]
mod tests {
    use nonempty::{NonEmpty, nonempty};
    use test_case::test_case;

    use super::*;
    use crate::{
        domain::{Color, Formality, Season, WeatherCondition},
        engine::rules::{colors_harmonious, style_consistent},
    };

    fn garment(category: Category, colors: &[&str], tags: &[&str]) -> Garment {
        Garment::new(
            category,
            NonEmpty::from_vec(colors.iter().map(|c| Color::new(c).unwrap()).collect()).unwrap(),
            nonempty![Season::Fall],
            Formality::Casual,
        )
        .with_tags(tags.iter().copied())
    }

    fn cold() -> WeatherReading {
        WeatherReading::new(5, WeatherCondition::Clear)
    }

    #[test]
    fn partition_preserves_order_within_category() {
        let garments = vec![
            garment(Category::Tops, &["red"], &[]),
            garment(Category::Shoes, &["black"], &[]),
            garment(Category::Tops, &["blue"], &[]),
            garment(Category::Accessories, &["gold"], &[]),
            garment(Category::Bottoms, &["navy"], &[]),
            garment(Category::Outerwear, &["beige"], &[]),
        ];

        let pools = Pools::partition(&garments);

        assert_eq!(pools.tops, vec![&garments[0], &garments[2]]);
        assert_eq!(pools.bottoms, vec![&garments[4]]);
        assert_eq!(pools.shoes, vec![&garments[1]]);
        assert_eq!(pools.outerwear, vec![&garments[5]]);
        assert_eq!(pools.accessories, vec![&garments[3]]);
    }

    #[test]
    fn pairs_are_visited_row_major() {
        let garments = vec![
            garment(Category::Tops, &["black"], &["top a"]),
            garment(Category::Tops, &["white"], &["top b"]),
            garment(Category::Bottoms, &["gray"], &["bottom a"]),
            garment(Category::Bottoms, &["navy"], &["bottom b"]),
        ];
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, None);

        let pairs: Vec<_> = outfits.iter().map(|o| (o.top.tags()[0].as_str(), o.bottom.tags()[0].as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("top a", "bottom a"),
                ("top a", "bottom b"),
                ("top b", "bottom a"),
                ("top b", "bottom b"),
            ]
        );
    }

    #[test_case(7, 3, 15; "tops capped")]
    #[test_case(2, 9, 10; "bottoms capped")]
    #[test_case(8, 8, 25; "both capped")]
    #[test_case(0, 4, 0; "no tops")]
    fn search_is_bounded(tops: usize, bottoms: usize, expected: usize) {
        let mut garments = Vec::new();
        garments.extend((0..tops).map(|_| garment(Category::Tops, &["black"], &[])));
        garments.extend((0..bottoms).map(|_| garment(Category::Bottoms, &["black"], &[])));
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, None);

        assert_eq!(outfits.len(), expected);
        assert_eq!(pools.max_outfits(), expected);
    }

    #[test]
    fn only_the_first_five_tops_are_considered() {
        let mut garments: Vec<Garment> = (0..5)
            .map(|_| garment(Category::Tops, &["red"], &[]))
            .collect();
        // The only top that would harmonise with the bottom comes sixth.
        garments.push(garment(Category::Tops, &["green"], &[]));
        garments.push(garment(Category::Bottoms, &["green"], &[]));
        let pools = Pools::partition(&garments);

        assert!(combine(&pools, None).is_empty());
    }

    #[test]
    fn incompatible_pairs_are_skipped() {
        let garments = vec![
            garment(Category::Tops, &["red"], &[]),
            garment(Category::Tops, &["white"], &["blazer"]),
            garment(Category::Tops, &["green"], &[]),
            garment(Category::Bottoms, &["green"], &["jeans"]),
        ];
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, None);

        // red/green clash on color, blazer/jeans clash on style.
        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].top, &garments[2]);
        for outfit in &outfits {
            assert!(colors_harmonious(outfit.top.colors().iter(), outfit.bottom.colors().iter()));
            assert!(style_consistent(outfit.top, outfit.bottom));
        }
    }

    #[test]
    fn extensions_pick_first_harmonious_garment() {
        let garments = vec![
            garment(Category::Tops, &["red"], &[]),
            garment(Category::Bottoms, &["red"], &[]),
            garment(Category::Shoes, &["green"], &[]),
            garment(Category::Shoes, &["red", "tan"], &[]),
            garment(Category::Shoes, &["black"], &[]),
            garment(Category::Accessories, &["silver"], &[]),
            garment(Category::Accessories, &["cream"], &[]),
        ];
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, None);

        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].shoes, Some(&garments[3]));
        assert_eq!(outfits[0].accessory, Some(&garments[6]));
        assert_eq!(outfits[0].outerwear, None);
    }

    #[test]
    fn extensions_are_chosen_on_color_alone() {
        let garments = vec![
            garment(Category::Tops, &["white"], &["blazer"]),
            garment(Category::Bottoms, &["black"], &["trousers"]),
            garment(Category::Shoes, &["black"], &["sneakers"]),
        ];
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, None);

        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].shoes, Some(&garments[2]));
        assert!(!style_consistent(&garments[0], &garments[2]));
    }

    #[test]
    fn missing_extensions_do_not_reject_the_pair() {
        let garments = vec![
            garment(Category::Tops, &["red"], &[]),
            garment(Category::Bottoms, &["red"], &[]),
            garment(Category::Shoes, &["green"], &[]),
            garment(Category::Outerwear, &["purple"], &[]),
            garment(Category::Accessories, &["yellow"], &[]),
        ];
        let pools = Pools::partition(&garments);

        let outfits = combine(&pools, Some(&cold()));

        assert_eq!(outfits, vec![OutfitCandidate::new(&garments[0], &garments[1])]);
    }

    #[test_case(None, false; "no reading")]
    #[test_case(Some(14), true; "cool")]
    #[test_case(Some(15), false; "threshold")]
    #[test_case(Some(22), false; "warm")]
    fn outerwear_only_when_cold(temperature: Option<i32>, expected: bool) {
        let garments = vec![
            garment(Category::Tops, &["black"], &[]),
            garment(Category::Bottoms, &["black"], &[]),
            garment(Category::Outerwear, &["camel"], &[]),
        ];
        let pools = Pools::partition(&garments);
        let weather = temperature.map(|t| WeatherReading::new(t, WeatherCondition::Clear));

        let outfits = combine(&pools, weather.as_ref());

        assert_eq!(outfits[0].outerwear.is_some(), expected);
    }
}
