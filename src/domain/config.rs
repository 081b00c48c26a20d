use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Occasion;

/// Configuration for a wardrobe.
///
/// These settings control the defaults the command line applies when the
/// user does not say otherwise. They never change how outfits are filtered
/// or combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The occasion to dress for when none is given.
    default_occasion: Occasion,

    /// Whether wearing an outfit appends it to the outfit history.
    ///
    /// The garments' last-worn timestamps are updated either way.
    pub record_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_occasion: Occasion::default(),
            record_history: default_record_history(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The occasion to dress for when none is given.
    #[must_use]
    pub const fn default_occasion(&self) -> &Occasion {
        &self.default_occasion
    }

    /// Sets the default occasion.
    ///
    /// Returns `false` if the occasion is not one of the named occasions. It
    /// is stored regardless, and treated as casual.
    pub fn set_default_occasion(&mut self, occasion: Occasion) -> bool {
        let known = !matches!(occasion, Occasion::Other(_));
        self.default_occasion = occasion;
        known
    }
}

const fn default_record_history() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        default_occasion: Occasion,

        #[serde(default = "default_record_history")]
        record_history: bool,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_occasion,
                record_history,
            } => Self {
                default_occasion,
                record_history,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            default_occasion: config.default_occasion,
            record_history: config.record_history,
        }
    }
}
