use std::{collections::BTreeSet, path::PathBuf};

use chrono::Utc;
use clap::Parser;
use dressed::{GarmentId, Occasion, WornOutfit};
use tracing::instrument;

use super::terminal::Colorize;

/// Record a hand-picked outfit as worn today.
#[derive(Debug, Parser)]
pub struct Wear {
    /// The identifiers of the garments worn
    #[arg(required = true, num_args = 1..)]
    garments: Vec<GarmentId>,

    /// What the outfit was worn for (defaults to the configured occasion)
    #[arg(long, short)]
    occasion: Option<Occasion>,
}

impl Wear {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut wardrobe = super::load(root)?;

        let occasion = self
            .occasion
            .unwrap_or_else(|| wardrobe.config().default_occasion().clone());

        let mut seen = BTreeSet::new();
        let garments: Vec<GarmentId> = self
            .garments
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let outfit = WornOutfit::new(garments, occasion, Utc::now());
        wardrobe.record_wear(&outfit)?;
        wardrobe.flush()?;

        println!(
            "{}",
            format!(
                "✅ Recorded {} garments worn for {}",
                outfit.garments.len(),
                outfit.occasion
            )
            .success()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dressed::{Category, Color, Formality, Garment, Season, Wardrobe};
    use nonempty::nonempty;
    use tempfile::tempdir;

    use super::*;

    fn garment(category: Category) -> Garment {
        Garment::new(
            category,
            nonempty![Color::new("gray").unwrap()],
            nonempty![Season::Winter],
            Formality::Casual,
        )
    }

    #[test]
    fn repeated_garments_are_recorded_once() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let mut wardrobe = Wardrobe::new(root.clone()).init().unwrap();
        let top = wardrobe.add_garment(garment(Category::Tops));
        let bottom = wardrobe.add_garment(garment(Category::Bottoms));
        wardrobe.flush().unwrap();

        let wear = Wear {
            garments: vec![top, bottom, top],
            occasion: Some(Occasion::Work),
        };
        wear.run(root.clone()).expect("wear should succeed");

        let history = Wardrobe::new(root).load().unwrap().history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].garments, vec![top, bottom]);
        assert_eq!(history[0].occasion, Occasion::Work);
    }

    #[test]
    fn unknown_garment_is_rejected() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        let mut wardrobe = Wardrobe::new(root.clone()).init().unwrap();
        let top = wardrobe.add_garment(garment(Category::Tops));
        wardrobe.flush().unwrap();
        let stranger = GarmentId::new();

        let wear = Wear {
            garments: vec![top, stranger],
            occasion: None,
        };
        let error = wear.run(root.clone()).unwrap_err();

        assert!(error.to_string().contains(&stranger.to_string()));
        let wardrobe = Wardrobe::new(root).load().unwrap();
        assert!(wardrobe.history().unwrap().is_empty());
        assert_eq!(wardrobe.find(top).unwrap().last_worn(), None);
    }
}
