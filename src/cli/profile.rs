use std::path::PathBuf;

use clap::Parser;
use dressed::{
    Color, StyleProfile,
    domain::profile::{ColorSpectrum, Layering, LegwearPreference, Willingness},
};
use tracing::instrument;

use super::terminal::Colorize;

/// Show or edit the style profile.
#[derive(Debug, Parser)]
pub struct Profile {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Debug, clap::Subcommand)]
enum ProfileCommand {
    /// Show the current profile
    Show,

    /// Update the profile
    ///
    /// Only the options given are changed. The favorite and avoided colors
    /// decide which garments are ever suggested.
    Set(Set),
}

#[derive(Debug, clap::Args)]
struct Set {
    /// Colors you like to wear
    #[arg(long, value_delimiter = ',', value_parser = super::parse_color)]
    favorite: Option<Vec<Color>>,

    /// Colors you never want suggested
    #[arg(long, value_delimiter = ',', value_parser = super::parse_color)]
    avoid: Option<Vec<Color>>,

    /// Style keywords, e.g. "minimalist"
    #[arg(long, value_delimiter = ',')]
    style: Option<Vec<String>>,

    /// Neutral or colorful palette
    #[arg(long, value_enum)]
    spectrum: Option<ColorSpectrum>,

    /// Willingness to wear heels
    #[arg(long, value_enum)]
    heels: Option<Willingness>,

    /// Willingness to wear fitted clothing
    #[arg(long, value_enum)]
    tight_clothing: Option<Willingness>,

    /// Skirts, pants or both
    #[arg(long, value_enum)]
    legwear: Option<LegwearPreference>,

    /// Whether you enjoy layered outfits
    #[arg(long, value_enum)]
    layers: Option<Layering>,

    /// Your home location
    #[arg(long)]
    location: Option<String>,
}

impl Profile {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut wardrobe = super::load(root)?;

        match self.command {
            ProfileCommand::Show => match wardrobe.profile() {
                Some(profile) => print_profile(profile),
                None => println!(
                    "{}",
                    "No profile set. Run 'dressed profile set --favorite <colors>'.".dim()
                ),
            },
            ProfileCommand::Set(set) => {
                let mut profile = wardrobe.profile().cloned().unwrap_or_default();
                set.apply(&mut profile);

                if profile.favorite_colors.is_empty() {
                    eprintln!(
                        "{}",
                        "⚠️  No favorite colors: nothing will be suggested until some are set."
                            .warning()
                    );
                }

                wardrobe.set_profile(profile);
                wardrobe.flush()?;
                println!("{}", "✅ Profile updated".success());
            }
        }
        Ok(())
    }
}

impl Set {
    fn apply(self, profile: &mut StyleProfile) {
        if let Some(favorite) = self.favorite {
            profile.favorite_colors = favorite.into_iter().collect();
        }
        if let Some(avoid) = self.avoid {
            profile.avoid_colors = avoid.into_iter().collect();
        }
        if let Some(styles) = self.style {
            profile.styles = styles;
        }
        if let Some(spectrum) = self.spectrum {
            profile.color_spectrum = Some(spectrum);
        }
        if let Some(heels) = self.heels {
            profile.comfort.heels = heels;
        }
        if let Some(tight) = self.tight_clothing {
            profile.comfort.tight_clothing = tight;
        }
        if let Some(legwear) = self.legwear {
            profile.comfort.skirts_vs_pants = legwear;
        }
        if let Some(layers) = self.layers {
            profile.comfort.layers = layers;
        }
        if let Some(location) = self.location {
            let location = location.trim();
            profile.location = (!location.is_empty()).then(|| location.to_string());
        }
    }
}

fn join<'a>(colors: impl IntoIterator<Item = &'a Color>) -> String {
    let names: Vec<&str> = colors.into_iter().map(Color::as_str).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn print_profile(profile: &StyleProfile) {
    println!("{}", "Style profile".heading());
    println!("  Favorite colors: {}", join(&profile.favorite_colors));
    println!("  Avoided colors:  {}", join(&profile.avoid_colors));
    if !profile.styles.is_empty() {
        println!("  Styles:          {}", profile.styles.join(", "));
    }
    if let Some(spectrum) = profile.color_spectrum {
        println!("  Palette:         {spectrum:?}");
    }
    println!("{}", "Comfort".dim());
    println!("  Heels:           {:?}", profile.comfort.heels);
    println!("  Tight clothing:  {:?}", profile.comfort.tight_clothing);
    println!("  Skirts or pants: {:?}", profile.comfort.skirts_vs_pants);
    println!("  Layers:          {:?}", profile.comfort.layers);
    if let Some(location) = &profile.location {
        println!("  Location:        {location}");
    }
}
