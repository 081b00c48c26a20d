//! Pairwise compatibility rules.
//!
//! These are cheap, fixed-vocabulary heuristics. False negatives are
//! acceptable; a clash should rarely be reported as harmonious.

use crate::domain::{Color, Garment};

/// Colors that go with anything.
pub const NEUTRAL_COLORS: &[&str] = &["black", "white", "gray", "navy", "brown", "beige", "cream"];

/// Tag keywords marking a garment as dressy.
pub const FORMAL_KEYWORDS: &[&str] = &["blazer", "dress", "suit", "heels"];

/// Tag keywords marking a garment as dressed-down.
pub const CASUAL_KEYWORDS: &[&str] = &["jeans", "sneakers", "t-shirt", "hoodie"];

/// Whether the color is one of [`NEUTRAL_COLORS`].
#[must_use]
pub fn is_neutral(color: &Color) -> bool {
    NEUTRAL_COLORS.contains(&color.as_str())
}

/// Whether two color palettes can be worn together.
///
/// They can if either palette contains a neutral, or if they share a color.
/// The test is symmetric and ignores order.
#[must_use]
pub fn colors_harmonious<'a, A, B>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = &'a Color>,
    B: IntoIterator<Item = &'a Color>,
{
    let a: Vec<&Color> = a.into_iter().collect();
    let b: Vec<&Color> = b.into_iter().collect();

    let has_neutral = a.iter().chain(&b).any(|color| is_neutral(color));
    let has_common_color = a.iter().any(|color| b.contains(color));

    has_neutral || has_common_color
}

/// Whether two garments sit at compatible levels of dressiness.
///
/// Only an explicit clash is rejected: one garment tagged with a
/// [`FORMAL_KEYWORDS`] word while the other is tagged with a
/// [`CASUAL_KEYWORDS`] word. Garments with neither kind of tag are
/// consistent with everything.
#[must_use]
pub fn style_consistent(a: &Garment, b: &Garment) -> bool {
    let a_formal = a.has_tag_matching(FORMAL_KEYWORDS);
    let b_formal = b.has_tag_matching(FORMAL_KEYWORDS);
    let a_casual = a.has_tag_matching(CASUAL_KEYWORDS);
    let b_casual = b.has_tag_matching(CASUAL_KEYWORDS);

    !(a_formal && b_casual || a_casual && b_formal)
}

/// Whether two garments pass both compatibility rules.
#[must_use]
pub fn compatible(a: &Garment, b: &Garment) -> bool {
    colors_harmonious(a.colors().iter(), b.colors().iter()) && style_consistent(a, b)
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;
    use test_case::test_case;

    use super::*;
    use crate::domain::{Category, Formality, Season};

    fn colors(names: &[&str]) -> Vec<Color> {
        names.iter().map(|name| Color::new(name).unwrap()).collect()
    }

    fn tagged(tags: &[&str]) -> Garment {
        Garment::new(
            Category::Tops,
            nonempty![Color::new("black").unwrap()],
            nonempty![Season::Spring],
            Formality::Casual,
        )
        .with_tags(tags.iter().copied())
    }

    #[test_case(&["red"], &["black"], true; "neutral on one side")]
    #[test_case(&["cream", "pink"], &["green"], true; "neutral among several")]
    #[test_case(&["red", "green"], &["green"], true; "shared color")]
    #[test_case(&["red"], &["green"], false; "clash")]
    #[test_case(&["red", "orange"], &["purple", "yellow"], false; "multi color clash")]
    fn color_harmony(a: &[&str], b: &[&str], expected: bool) {
        let a = colors(a);
        let b = colors(b);
        assert_eq!(colors_harmonious(&a, &b), expected);
        assert_eq!(colors_harmonious(&b, &a), expected, "harmony is symmetric");
    }

    #[test]
    fn color_harmony_ignores_order() {
        let a = colors(&["red", "blue"]);
        let b = colors(&["yellow", "blue"]);
        let reversed: Vec<_> = b.iter().rev().cloned().collect();
        assert!(colors_harmonious(&a, &b));
        assert!(colors_harmonious(&a, &reversed));
    }

    #[test_case(&["Wool Blazer"], &["ripped jeans"], false; "formal with casual")]
    #[test_case(&["hoodie"], &["HEELS"], false; "casual with formal")]
    #[test_case(&["suit"], &["dress shirt"], true; "both formal")]
    #[test_case(&["t-shirt"], &["sneakers"], true; "both casual")]
    #[test_case(&["linen"], &["jeans"], true; "untagged with casual")]
    #[test_case(&[], &[], true; "no tags")]
    fn style_consistency(a: &[&str], b: &[&str], expected: bool) {
        assert_eq!(style_consistent(&tagged(a), &tagged(b)), expected);
        assert_eq!(style_consistent(&tagged(b), &tagged(a)), expected);
    }

    #[test]
    fn garment_matching_both_vocabularies_clashes_with_either() {
        // "dress" and "t-shirt" on the same garment.
        let mixed = tagged(&["t-shirt dress"]);
        assert!(!style_consistent(&mixed, &tagged(&["heels"])));
        assert!(!style_consistent(&mixed, &tagged(&["jeans"])));
        assert!(style_consistent(&mixed, &tagged(&["cardigan"])));
    }

    #[test]
    fn vocabularies_are_lower_case() {
        for word in NEUTRAL_COLORS.iter().chain(FORMAL_KEYWORDS).chain(CASUAL_KEYWORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
