//! Filter stages that narrow the wardrobe to what suits the day.
//!
//! Each stage is a total function over a borrowed garment list. A stage
//! only ever removes garments, and an empty result is valid. The stages are
//! independent intersections, so the surviving set does not depend on the
//! order they run in.

use crate::domain::{Garment, Occasion, Season, StyleProfile, WeatherCondition, WeatherReading};

/// Below this temperature only cold-weather garments are kept.
pub const COLD_BELOW: i32 = 10;

/// Above this temperature only warm-weather garments are kept.
pub const HOT_ABOVE: i32 = 25;

/// Seasons that qualify a garment for cold weather.
pub const COLD_WEATHER_SEASONS: &[Season] = &[Season::Winter, Season::Fall];

/// Seasons that qualify a garment for hot weather.
pub const HOT_WEATHER_SEASONS: &[Season] = &[Season::Summer, Season::Spring];

/// Tag keywords for materials that should stay home in the rain.
pub const RAIN_SENSITIVE_MATERIALS: &[&str] = &["silk", "suede", "leather"];

/// Whether a garment suits the weather.
///
/// The temperature decides which seasons qualify; in the mild band between
/// [`COLD_BELOW`] and [`HOT_ABOVE`] (inclusive) every season does. Rain
/// additionally rules out rain-sensitive materials at any temperature.
#[must_use]
pub fn suits_weather(garment: &Garment, weather: &WeatherReading) -> bool {
    let suits_temperature = if weather.temperature < COLD_BELOW {
        garment.suits_any_season(COLD_WEATHER_SEASONS)
    } else if weather.temperature > HOT_ABOVE {
        garment.suits_any_season(HOT_WEATHER_SEASONS)
    } else {
        true
    };

    let rain_safe = weather.condition != WeatherCondition::Rain
        || !garment.has_tag_matching(RAIN_SENSITIVE_MATERIALS);

    suits_temperature && rain_safe
}

/// Whether a garment suits the user's color preferences.
///
/// The favorite colors act as an allow-list: a garment needs at least one of
/// them, and none of the avoided colors. A profile with no favorites admits
/// nothing.
#[must_use]
pub fn suits_profile(garment: &Garment, profile: &StyleProfile) -> bool {
    let has_favorite_color = garment.colors().iter().any(|color| profile.likes(color));
    let has_avoided_color = garment.colors().iter().any(|color| profile.avoids(color));

    has_favorite_color && !has_avoided_color
}

/// Keeps the garments that suit the weather.
///
/// Without a reading there is no weather constraint and the input is
/// returned unchanged.
#[must_use]
pub fn by_weather<'a>(
    mut garments: Vec<&'a Garment>,
    weather: Option<&WeatherReading>,
) -> Vec<&'a Garment> {
    if let Some(weather) = weather {
        garments.retain(|garment| suits_weather(garment, weather));
    }
    garments
}

/// Keeps the garments whose formality the occasion admits.
#[must_use]
pub fn by_occasion<'a>(mut garments: Vec<&'a Garment>, occasion: &Occasion) -> Vec<&'a Garment> {
    garments.retain(|garment| occasion.admits(garment.formality()));
    garments
}

/// Keeps the garments that suit the user's color preferences.
///
/// Without a profile the input is returned unchanged.
#[must_use]
pub fn by_profile<'a>(
    mut garments: Vec<&'a Garment>,
    profile: Option<&StyleProfile>,
) -> Vec<&'a Garment> {
    if let Some(profile) = profile {
        garments.retain(|garment| suits_profile(garment, profile));
    }
    garments
}
