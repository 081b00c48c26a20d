//! A filesystem backed wardrobe.
//!
//! The [`Wardrobe`] keeps garments, the style profile and the outfit history
//! in plain YAML files under a root directory:
//!
//! ```text
//! <root>/.dressed/config.toml
//! <root>/wardrobe.yaml
//! <root>/profile.yaml
//! <root>/history/YYYY-MM-DD.yaml
//! ```

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use walkdir::WalkDir;

use crate::{
    domain::{Config, Garment, GarmentId, StyleProfile},
    storage::history::{HistoryFile, WornOutfit},
};

const CONFIG_PATH: &str = ".dressed/config.toml";
const GARMENTS_FILE: &str = "wardrobe.yaml";
const PROFILE_FILE: &str = "profile.yaml";
const HISTORY_DIR: &str = "history";

/// State of a wardrobe whose files have been read.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    config: Config,
    garments: Vec<Garment>,
    profile: Option<StyleProfile>,
}

/// State of a wardrobe that has not been read yet.
#[derive(Debug, PartialEq, Eq)]
pub struct Unloaded;

/// A filesystem backed wardrobe.
#[derive(Debug)]
pub struct Wardrobe<S> {
    /// The directory the wardrobe is stored in.
    root: PathBuf,
    state: S,
}

impl<S> Wardrobe<S> {
    /// The directory the wardrobe is stored in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR)
    }
}

impl Wardrobe<Unloaded> {
    /// Opens a wardrobe at the given path.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self {
            root,
            state: Unloaded,
        }
    }

    /// Create an empty wardrobe with a default configuration.
    ///
    /// # Errors
    ///
    /// Fails if a wardrobe already exists at the root, or if the files
    /// cannot be written.
    #[tracing::instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn init(self) -> Result<Wardrobe<Loaded>, Error> {
        if self.root.join(GARMENTS_FILE).exists() {
            return Err(Error::AlreadyInitialised(self.root));
        }

        let wardrobe = Wardrobe {
            root: self.root,
            state: Loaded {
                config: Config::default(),
                garments: Vec::new(),
                profile: None,
            },
        };
        wardrobe.flush()?;
        Ok(wardrobe)
    }

    /// Load the configuration, garments and profile from disk.
    ///
    /// A missing or unreadable configuration file falls back to the default
    /// configuration. A missing profile is not an error.
    ///
    /// # Errors
    ///
    /// Fails if there is no wardrobe at the root, or if the garment or
    /// profile file cannot be read or parsed.
    #[tracing::instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn load(self) -> Result<Wardrobe<Loaded>, Error> {
        let garments_path = self.root.join(GARMENTS_FILE);
        if !garments_path.exists() {
            return Err(Error::NotInitialised(self.root));
        }

        let config = load_config(&self.root);
        let garments: Vec<Garment> = read_yaml::<GarmentFile>(&garments_path)?.into();

        let profile_path = self.root.join(PROFILE_FILE);
        let profile = if profile_path.exists() {
            Some(read_yaml::<ProfileFile>(&profile_path)?.into())
        } else {
            tracing::debug!("No profile at {}", profile_path.display());
            None
        };

        tracing::debug!("Loaded {} garments", garments.len());

        Ok(Wardrobe {
            root: self.root,
            state: Loaded {
                config,
                garments,
                profile,
            },
        })
    }
}

impl Wardrobe<Loaded> {
    /// The wardrobe's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.state.config
    }

    /// Mutable access to the configuration.
    ///
    /// Call [`Wardrobe::flush`] to persist changes.
    pub const fn config_mut(&mut self) -> &mut Config {
        &mut self.state.config
    }

    /// Every garment, in the order they were added.
    #[must_use]
    pub fn garments(&self) -> &[Garment] {
        &self.state.garments
    }

    /// Look up a garment by identifier.
    #[must_use]
    pub fn find(&self, id: GarmentId) -> Option<&Garment> {
        self.state.garments.iter().find(|garment| garment.id() == id)
    }

    /// The user's style profile, if one has been set.
    #[must_use]
    pub const fn profile(&self) -> Option<&StyleProfile> {
        self.state.profile.as_ref()
    }

    /// Replace the style profile.
    ///
    /// Call [`Wardrobe::flush`] to persist the change.
    pub fn set_profile(&mut self, profile: StyleProfile) {
        self.state.profile = Some(profile);
    }

    /// Add a garment to the end of the wardrobe.
    ///
    /// Call [`Wardrobe::flush`] to persist the change.
    pub fn add_garment(&mut self, garment: Garment) -> GarmentId {
        let id = garment.id();
        self.state.garments.push(garment);
        id
    }

    /// Remove a garment.
    ///
    /// Call [`Wardrobe::flush`] to persist the change. History entries that
    /// mention the garment are left untouched.
    ///
    /// # Errors
    ///
    /// Fails if no garment has the given identifier.
    pub fn remove_garment(&mut self, id: GarmentId) -> Result<Garment, Error> {
        let index = self
            .state
            .garments
            .iter()
            .position(|garment| garment.id() == id)
            .ok_or(Error::UnknownGarment(id))?;
        Ok(self.state.garments.remove(index))
    }

    /// Record that an outfit was worn.
    ///
    /// Every garment in the outfit has its last-worn time set to the time
    /// the outfit was worn. If history recording is enabled, the outfit is
    /// appended to that day's history file straight away. Call
    /// [`Wardrobe::flush`] to persist the last-worn times.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the outfit names a garment that is
    /// not in the wardrobe, or if the history file cannot be updated.
    pub fn record_wear(&mut self, outfit: &WornOutfit) -> Result<(), Error> {
        if let Some(&missing) = outfit.garments.iter().find(|&&id| self.find(id).is_none()) {
            return Err(Error::UnknownGarment(missing));
        }

        if self.state.config.record_history {
            self.append_history(outfit)?;
        }

        for garment in &mut self.state.garments {
            if outfit.garments.contains(&garment.id()) {
                garment.mark_worn(outfit.worn_at);
            }
        }

        tracing::info!("Recorded outfit {} ({} garments)", outfit.id, outfit.garments.len());
        Ok(())
    }

    fn append_history(&self, outfit: &WornOutfit) -> Result<(), Error> {
        let path = self.history_path(outfit.day());
        let mut outfits: Vec<WornOutfit> = if path.exists() {
            read_yaml::<HistoryFile>(&path)?.into()
        } else {
            Vec::new()
        };
        outfits.push(outfit.clone());
        write_yaml(&path, &HistoryFile::from(outfits))
    }

    fn history_path(&self, day: NaiveDate) -> PathBuf {
        self.history_dir().join(format!("{}.yaml", day.format("%Y-%m-%d")))
    }

    /// Every recorded outfit, oldest first.
    ///
    /// # Errors
    ///
    /// Fails if the history directory cannot be walked or a history file
    /// cannot be parsed.
    pub fn history(&self) -> Result<Vec<WornOutfit>, Error> {
        let dir = self.history_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut outfits = Vec::new();
        for entry in WalkDir::new(&dir).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("yaml")) {
                continue;
            }
            let day: Vec<WornOutfit> = read_yaml::<HistoryFile>(path)?.into();
            outfits.extend(day);
        }

        outfits.sort_by_key(|outfit| outfit.worn_at);
        Ok(outfits)
    }

    /// The most recent time any garment in the wardrobe was worn.
    #[must_use]
    pub fn last_worn(&self) -> Option<DateTime<Utc>> {
        self.state.garments.iter().filter_map(Garment::last_worn).max()
    }

    /// Write the configuration, garments and profile back to disk.
    ///
    /// # Errors
    ///
    /// Fails if any of the files cannot be written.
    pub fn flush(&self) -> Result<(), Error> {
        let config_path = self.root.join(CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
        }
        self.state.config.save(&config_path).map_err(Error::Config)?;

        write_yaml(
            &self.root.join(GARMENTS_FILE),
            &GarmentFile::from(self.state.garments.clone()),
        )?;
        if let Some(profile) = &self.state.profile {
            write_yaml(
                &self.root.join(PROFILE_FILE),
                &ProfileFile::from(profile.clone()),
            )?;
        }
        Ok(())
    }
}

/// Errors raised while reading or writing a wardrobe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no wardrobe at the given root.
    #[error("no wardrobe found in {} (run 'dressed init' first)", .0.display())]
    NotInitialised(PathBuf),

    /// A wardrobe already exists at the given root.
    #[error("a wardrobe already exists in {}", .0.display())]
    AlreadyInitialised(PathBuf),

    /// A file could not be read or written.
    #[error("failed to access {}", path.display())]
    Io {
        /// The file or directory.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file's contents could not be parsed or serialized.
    #[error("failed to parse {}", path.display())]
    Yaml {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration could not be written.
    #[error("{0}")]
    Config(String),

    /// The history directory could not be walked.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// No garment has the given identifier.
    #[error("no garment with id {0}")]
    UnknownGarment(GarmentId),
}

impl Error {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn yaml(path: &Path, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn load_config(root: &Path) -> Config {
    let path = root.join(CONFIG_PATH);
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    serde_yaml::from_str(&content).map_err(|source| Error::yaml(path, source))
}

fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
    }
    let content = serde_yaml::to_string(value).map_err(|source| Error::yaml(path, source))?;
    fs::write(path, content).map_err(|source| Error::io(path, source))
}

/// The serialized versions of the garment file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum GarmentFile {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        garments: Vec<Garment>,
    },
}

impl From<GarmentFile> for Vec<Garment> {
    fn from(file: GarmentFile) -> Self {
        match file {
            GarmentFile::V1 { garments } => garments,
        }
    }
}

impl From<Vec<Garment>> for GarmentFile {
    fn from(garments: Vec<Garment>) -> Self {
        Self::V1 { garments }
    }
}

/// The serialized versions of the profile file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum ProfileFile {
    #[serde(rename = "1")]
    V1 { profile: StyleProfile },
}

impl From<ProfileFile> for StyleProfile {
    fn from(file: ProfileFile) -> Self {
        match file {
            ProfileFile::V1 { profile } => profile,
        }
    }
}

impl From<StyleProfile> for ProfileFile {
    fn from(profile: StyleProfile) -> Self {
        Self::V1 { profile }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use nonempty::nonempty;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{Category, Color, Formality, Occasion, Season};

    fn setup_temp_wardrobe() -> (TempDir, Wardrobe<Loaded>) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().to_path_buf();
        (tmp, Wardrobe::new(path).init().unwrap())
    }

    fn reload(wardrobe: &Wardrobe<Loaded>) -> Wardrobe<Loaded> {
        Wardrobe::new(wardrobe.root().to_path_buf()).load().unwrap()
    }

    fn garment(category: Category, color: &str) -> Garment {
        Garment::new(
            category,
            nonempty![Color::new(color).unwrap()],
            nonempty![Season::Fall],
            Formality::Casual,
        )
    }

    #[test]
    fn init_creates_empty_wardrobe() {
        let (_tmp, wardrobe) = setup_temp_wardrobe();

        assert!(wardrobe.root().join(GARMENTS_FILE).exists());
        assert!(wardrobe.root().join(CONFIG_PATH).exists());

        let loaded = reload(&wardrobe);
        assert!(loaded.garments().is_empty());
        assert!(loaded.profile().is_none());
        assert_eq!(loaded.config(), &Config::default());
    }

    #[test]
    fn init_refuses_existing_wardrobe() {
        let (_tmp, wardrobe) = setup_temp_wardrobe();
        let error = Wardrobe::new(wardrobe.root().to_path_buf())
            .init()
            .unwrap_err();
        assert!(matches!(error, Error::AlreadyInitialised(_)));
    }

    #[test]
    fn load_without_init_fails() {
        let tmp = TempDir::new().unwrap();
        let error = Wardrobe::new(tmp.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(error, Error::NotInitialised(_)));
        assert!(error.to_string().contains("dressed init"));
    }

    #[test]
    fn garments_and_profile_survive_a_flush() {
        let (_tmp, mut wardrobe) = setup_temp_wardrobe();
        let shirt = wardrobe.add_garment(garment(Category::Tops, "white"));
        let skirt = wardrobe.add_garment(garment(Category::Bottoms, "black"));
        wardrobe.set_profile(StyleProfile::with_colors(
            [Color::new("white").unwrap()],
            [Color::new("orange").unwrap()],
        ));
        wardrobe.flush().unwrap();

        let loaded = reload(&wardrobe);
        let ids: Vec<_> = loaded.garments().iter().map(Garment::id).collect();
        assert_eq!(ids, vec![shirt, skirt]);
        assert_eq!(loaded.profile(), wardrobe.profile());
    }

    #[test]
    fn remove_garment_by_id() {
        let (_tmp, mut wardrobe) = setup_temp_wardrobe();
        let shirt = wardrobe.add_garment(garment(Category::Tops, "white"));
        let skirt = wardrobe.add_garment(garment(Category::Bottoms, "black"));

        let removed = wardrobe.remove_garment(shirt).unwrap();
        assert_eq!(removed.id(), shirt);
        assert!(wardrobe.find(shirt).is_none());
        assert!(wardrobe.find(skirt).is_some());

        let error = wardrobe.remove_garment(shirt).unwrap_err();
        assert!(matches!(error, Error::UnknownGarment(id) if id == shirt));
    }

    #[test]
    fn record_wear_updates_garments_and_history() {
        let (_tmp, mut wardrobe) = setup_temp_wardrobe();
        let shirt = wardrobe.add_garment(garment(Category::Tops, "white"));
        let skirt = wardrobe.add_garment(garment(Category::Bottoms, "black"));
        let scarf = wardrobe.add_garment(garment(Category::Accessories, "red"));

        let morning = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 4, 1, 19, 0, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2025, 4, 2, 8, 0, 0).unwrap();

        for (garments, at) in [
            (vec![shirt, skirt], morning),
            (vec![shirt, skirt, scarf], evening),
            (vec![skirt], next_day),
        ] {
            wardrobe
                .record_wear(&WornOutfit::new(garments, Occasion::Daily, at))
                .unwrap();
        }
        wardrobe.flush().unwrap();

        let loaded = reload(&wardrobe);
        assert_eq!(loaded.find(shirt).unwrap().last_worn(), Some(evening));
        assert_eq!(loaded.find(skirt).unwrap().last_worn(), Some(next_day));
        assert_eq!(loaded.find(scarf).unwrap().last_worn(), Some(evening));
        assert_eq!(loaded.last_worn(), Some(next_day));

        let history = loaded.history().unwrap();
        let times: Vec<_> = history.iter().map(|outfit| outfit.worn_at).collect();
        assert_eq!(times, vec![morning, evening, next_day]);
        assert!(wardrobe.root().join("history/2025-04-01.yaml").exists());
        assert!(wardrobe.root().join("history/2025-04-02.yaml").exists());
    }

    #[test]
    fn record_wear_rejects_unknown_garments() {
        let (_tmp, mut wardrobe) = setup_temp_wardrobe();
        let shirt = wardrobe.add_garment(garment(Category::Tops, "white"));
        let stranger = GarmentId::new();

        let outfit = WornOutfit::new(vec![shirt, stranger], Occasion::Work, Utc::now());
        let error = wardrobe.record_wear(&outfit).unwrap_err();

        assert!(matches!(error, Error::UnknownGarment(id) if id == stranger));
        assert_eq!(wardrobe.find(shirt).unwrap().last_worn(), None);
        assert!(wardrobe.history().unwrap().is_empty());
    }

    #[test]
    fn history_can_be_disabled() {
        let (_tmp, mut wardrobe) = setup_temp_wardrobe();
        wardrobe.config_mut().record_history = false;
        wardrobe.flush().unwrap();

        let mut wardrobe = reload(&wardrobe);
        assert!(!wardrobe.config().record_history);
        let shirt = wardrobe.add_garment(garment(Category::Tops, "white"));
        wardrobe
            .record_wear(&WornOutfit::new(vec![shirt], Occasion::Daily, Utc::now()))
            .unwrap();

        assert!(wardrobe.find(shirt).unwrap().last_worn().is_some());
        assert!(wardrobe.history().unwrap().is_empty());
    }

    #[test]
    fn corrupt_garment_file_reports_path() {
        let (_tmp, wardrobe) = setup_temp_wardrobe();
        let path = wardrobe.root().join(GARMENTS_FILE);
        fs::write(&path, "_version: '1'\ngarments: [oops]\n").unwrap();

        let error = Wardrobe::new(wardrobe.root().to_path_buf())
            .load()
            .unwrap_err();
        assert!(matches!(&error, Error::Yaml { path: p, .. } if p == &path));
    }

    #[test]
    fn unreadable_config_falls_back_to_default() {
        let (_tmp, wardrobe) = setup_temp_wardrobe();
        fs::write(wardrobe.root().join(CONFIG_PATH), "not = [valid").unwrap();

        assert_eq!(reload(&wardrobe).config(), &Config::default());
    }
}
