use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

/// A normalised color name.
///
/// Color names are compared by exact string equality throughout the engine,
/// so they are trimmed and lower-cased on construction. `"Navy "` and
/// `"navy"` are the same color.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Creates a new `Color` from a name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`] if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, InvalidColor> {
        let normalised = name.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(InvalidColor(name.as_ref().to_string()));
        }
        Ok(Self(normalised))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = InvalidColor;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Color {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a color name is blank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid color '{0}': must contain at least one non-whitespace character")]
pub struct InvalidColor(String);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("black", "black"; "already normalised")]
    #[test_case("Navy", "navy"; "mixed case")]
    #[test_case("  WHITE ", "white"; "padded upper case")]
    fn names_are_normalised(input: &str, expected: &str) {
        assert_eq!(Color::new(input).unwrap().as_str(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace only")]
    fn blank_names_are_rejected(input: &str) {
        assert_eq!(Color::new(input), Err(InvalidColor(input.to_string())));
    }

    #[test]
    fn deserialising_normalises_and_validates() {
        let color: Color = serde_yaml::from_str("Beige").unwrap();
        assert_eq!(color, "beige");

        assert!(serde_yaml::from_str::<Color>("''").is_err());
    }
}
