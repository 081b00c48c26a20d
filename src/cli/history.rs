use std::path::PathBuf;

use clap::Parser;
use dressed::WornOutfit;
use tracing::instrument;

use super::{list::render_compact, terminal::Colorize};

/// Show previously worn outfits, most recent first.
#[derive(Debug, Parser)]
pub struct History {
    /// Show at most this many outfits
    #[arg(long, short, default_value_t = 10)]
    limit: usize,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl History {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let wardrobe = super::load(root)?;

        let mut outfits = wardrobe.history()?;
        outfits.reverse();
        outfits.truncate(self.limit);

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outfits)?),
            OutputFormat::Pretty => {
                if outfits.is_empty() {
                    println!("{}", "No outfits recorded yet".dim());
                }
                for outfit in &outfits {
                    Self::print_outfit(&wardrobe, outfit);
                }
            }
        }
        Ok(())
    }

    fn print_outfit(wardrobe: &dressed::Wardrobe<dressed::storage::Loaded>, outfit: &WornOutfit) {
        let mut header = format!(
            "{}  {}",
            outfit.worn_at.format("%Y-%m-%d %H:%M"),
            outfit.occasion
        );
        if let Some(score) = outfit.match_score {
            header.push_str(&format!("  {score} match"));
        }
        if let Some(weather) = &outfit.weather {
            header.push_str(&format!("  {}°C {}", weather.temperature, weather.condition));
        }
        println!("{}", header.heading());

        for id in &outfit.garments {
            match wardrobe.find(*id) {
                Some(garment) => println!("   {}", render_compact(garment)),
                None => println!("   {}", format!("{id} (removed)").dim()),
            }
        }
    }
}
