use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The headline weather condition, as reported by the weather provider.
///
/// Unrecognised conditions are preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    /// Clear sky.
    Clear,
    /// Overcast or broken cloud.
    Clouds,
    /// Rain.
    Rain,
    /// Light rain.
    Drizzle,
    /// Thunderstorm.
    Thunderstorm,
    /// Snow.
    Snow,
    /// Mist, fog or haze.
    Mist,
    /// Any other condition name.
    Other(String),
}

impl WeatherCondition {
    /// The provider's name for this condition.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" => Self::Mist,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for WeatherCondition {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(condition) => condition,
            Err(never) => match never {},
        }
    }
}

impl From<WeatherCondition> for String {
    fn from(value: WeatherCondition) -> Self {
        match value {
            WeatherCondition::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wind speed above which a reading counts as windy, in km/h.
const WINDY_ABOVE: f32 = 15.0;

/// A current-weather reading.
///
/// Only `temperature` and `condition` influence recommendations; the other
/// fields are carried along for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in degrees Celsius, rounded to the nearest degree.
    pub temperature: i32,

    /// Headline condition.
    pub condition: WeatherCondition,

    /// Human-readable description, e.g. "light rain".
    #[serde(default)]
    pub description: String,

    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: u8,

    /// Wind speed in km/h.
    #[serde(default)]
    pub wind_speed: f32,

    /// Name of the place the reading is for.
    #[serde(default)]
    pub location: String,
}

impl WeatherReading {
    /// A reading with just a temperature and condition.
    #[must_use]
    pub fn new(temperature: i32, condition: WeatherCondition) -> Self {
        let description = condition.as_str().to_lowercase();
        Self {
            temperature,
            condition,
            description,
            humidity: 0,
            wind_speed: 0.0,
            location: String::new(),
        }
    }

    /// The reading whose advice is shown when no real reading is available:
    /// a mild, clear day.
    ///
    /// This is for display only and must not be passed to the engine in
    /// place of "no reading".
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            temperature: 20,
            condition: WeatherCondition::Clear,
            description: "clear sky".to_string(),
            humidity: 50,
            wind_speed: 5.0,
            location: "Unknown".to_string(),
        }
    }

    /// Whether it is raining in any form.
    #[must_use]
    pub const fn is_rainy(&self) -> bool {
        matches!(
            self.condition,
            WeatherCondition::Rain | WeatherCondition::Drizzle | WeatherCondition::Thunderstorm
        )
    }

    /// Whether the wind is strong enough to notice.
    #[must_use]
    pub fn is_windy(&self) -> bool {
        self.wind_speed > WINDY_ABOVE
    }

    /// Below 10 °C.
    #[must_use]
    pub const fn is_cold(&self) -> bool {
        self.temperature < 10
    }

    /// A one-line dressing tip for the temperature.
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        if self.is_cold() {
            "Bundle up! Perfect for warm layers, coats, and boots."
        } else if self.temperature < 20 {
            "Transition weather. Light layers and a jacket would work well."
        } else {
            "Warm day! Light, breathable fabrics are perfect."
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Rain", WeatherCondition::Rain; "provider casing")]
    #[test_case("thunderstorm", WeatherCondition::Thunderstorm; "lower case")]
    #[test_case("Squall", WeatherCondition::Other("Squall".to_string()); "unknown")]
    fn conditions_parse(input: &str, expected: WeatherCondition) {
        assert_eq!(WeatherCondition::from(input.to_string()), expected);
    }

    #[test_case(WeatherCondition::Rain, true)]
    #[test_case(WeatherCondition::Drizzle, true)]
    #[test_case(WeatherCondition::Thunderstorm, true)]
    #[test_case(WeatherCondition::Snow, false)]
    #[test_case(WeatherCondition::Clear, false)]
    fn rainy_conditions(condition: WeatherCondition, expected: bool) {
        assert_eq!(WeatherReading::new(12, condition).is_rainy(), expected);
    }

    #[test_case(-3, "Bundle up!"; "freezing")]
    #[test_case(10, "Transition weather."; "lower bound of mild")]
    #[test_case(19, "Transition weather."; "upper bound of mild")]
    #[test_case(20, "Warm day!"; "warm")]
    fn advice_by_temperature(temperature: i32, prefix: &str) {
        let reading = WeatherReading::new(temperature, WeatherCondition::Clear);
        assert!(reading.advice().starts_with(prefix));
    }

    #[test]
    fn temperature_bands() {
        assert!(WeatherReading::new(9, WeatherCondition::Clear).is_cold());
        assert!(!WeatherReading::new(10, WeatherCondition::Clear).is_cold());
    }

    #[test]
    fn windy_above_threshold() {
        let mut reading = WeatherReading::new(15, WeatherCondition::Clouds);
        reading.wind_speed = 15.0;
        assert!(!reading.is_windy());
        reading.wind_speed = 15.5;
        assert!(reading.is_windy());
    }

    #[test]
    fn minimal_yaml_reading() {
        let reading: WeatherReading =
            serde_yaml::from_str("temperature: 4\ncondition: Snow\n").unwrap();
        assert_eq!(reading.temperature, 4);
        assert_eq!(reading.condition, WeatherCondition::Snow);
        assert!(reading.description.is_empty());
    }
}
