//! The outfit recommendation engine.
//!
//! Recommendation is a pipeline of pure stages:
//!
//! 1. [`filter`] narrows the wardrobe by weather, then occasion, then the
//!    user's color preferences.
//! 2. [`combine`] pairs tops with bottoms and extends each pair with shoes,
//!    outerwear and an accessory, applying the [`rules`].
//! 3. [`rank`] bounds the list and attaches a presentation score.
//!
//! Nothing is retained between calls. Given the same inputs and the same
//! [`ScoreSource`], [`recommend`] returns the same outfits with the same
//! scores.

/// Assembling outfits from the filtered wardrobe.
pub mod combine;
/// Filter stages.
pub mod filter;
/// Scoring and bounding.
pub mod rank;
/// Pairwise compatibility rules.
pub mod rules;

pub use combine::Pools;
pub use rank::{FixedScores, RandomScores, ScoreSource};
use tracing::{debug, instrument};

use crate::domain::{Garment, Occasion, Recommendation, StyleProfile, WeatherReading};

/// Run the filter stages in order: weather, occasion, profile.
///
/// The result keeps the wardrobe's relative order.
#[must_use]
pub fn filter_pool<'a>(
    wardrobe: &'a [Garment],
    occasion: &Occasion,
    weather: Option<&WeatherReading>,
    profile: Option<&StyleProfile>,
) -> Vec<&'a Garment> {
    let pool: Vec<&Garment> = wardrobe.iter().collect();

    let pool = filter::by_weather(pool, weather);
    debug!(remaining = pool.len(), "weather filter applied");

    let pool = filter::by_occasion(pool, occasion);
    debug!(remaining = pool.len(), "occasion filter applied");

    let pool = filter::by_profile(pool, profile);
    debug!(remaining = pool.len(), "profile filter applied");

    pool
}

/// Recommend outfits from the wardrobe.
///
/// Returns at most [`rank::MAX_RECOMMENDATIONS`] outfits in generation order,
/// each with a score drawn from `scores`.
///
/// A profile is required: if it is missing, or the wardrobe is empty, the
/// result is empty and no scores are drawn. An empty result is also returned
/// when nothing survives filtering or no top/bottom pair is compatible; the
/// caller is expected to present that as "no suggestions".
#[instrument(
    level = "debug",
    skip_all,
    fields(
        garments = wardrobe.len(),
        %occasion,
        temperature = weather.map(|w| w.temperature),
    )
)]
pub fn recommend<'a, S>(
    wardrobe: &'a [Garment],
    occasion: &Occasion,
    weather: Option<&WeatherReading>,
    profile: Option<&StyleProfile>,
    scores: &mut S,
) -> Vec<Recommendation<'a>>
where
    S: ScoreSource + ?Sized,
{
    let Some(profile) = profile else {
        debug!("no style profile, skipping recommendation");
        return Vec::new();
    };
    if wardrobe.is_empty() {
        debug!("empty wardrobe, skipping recommendation");
        return Vec::new();
    }

    let pool = filter_pool(wardrobe, occasion, weather, Some(profile));
    let pools = Pools::partition(pool);
    let outfits = combine::combine(&pools, weather);
    debug!(outfits = outfits.len(), "outfits assembled");

    rank::rank(outfits, scores)
}
