use std::path::PathBuf;

mod history;
mod list;
mod profile;
mod recommend;
mod terminal;
mod wear;

use anyhow::Context;
use clap::ArgAction;
use dressed::{
    Category, Color, Formality, Garment, GarmentId, Occasion, Season, Wardrobe,
    storage::{Loaded, Unloaded},
};
use history::History;
use list::List;
use nonempty::NonEmpty;
use profile::Profile;
use recommend::Recommend;
use tracing::instrument;
use wear::Wear;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the wardrobe directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Recommend(Recommend::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Suggest outfits for today (default)
    Recommend(Recommend),

    /// Create an empty wardrobe
    Init,

    /// Add a garment to the wardrobe
    Add(Add),

    /// List the garments in the wardrobe
    List(List),

    /// Remove a garment from the wardrobe
    Remove(Remove),

    /// Show or edit the style profile
    Profile(Profile),

    /// Record that an outfit was worn
    Wear(Wear),

    /// Show previously worn outfits
    History(History),

    /// Show or modify configuration settings
    Config(Config),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Recommend(command) => command.run(root)?,
            Self::Init => Init::run(root)?,
            Self::Add(command) => command.run(root)?,
            Self::List(command) => command.run(root)?,
            Self::Remove(command) => command.run(root)?,
            Self::Profile(command) => command.run(root)?,
            Self::Wear(command) => command.run(root)?,
            Self::History(command) => command.run(root)?,
            Self::Config(command) => command.run(root)?,
        }
        Ok(())
    }
}

fn load(root: PathBuf) -> anyhow::Result<Wardrobe<Loaded>> {
    let display = root.display().to_string();
    Wardrobe::<Unloaded>::new(root)
        .load()
        .with_context(|| format!("Failed to open wardrobe at {display}"))
}

/// Parse a color name at the CLI boundary.
fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e| format!("{e}"))
}

struct Init;

impl Init {
    #[instrument]
    fn run(root: PathBuf) -> anyhow::Result<()> {
        let wardrobe = Wardrobe::new(root).init()?;

        println!("Initialized wardrobe in {}", wardrobe.root().display());
        println!("  Created: .dressed/config.toml");
        println!("  Created: wardrobe.yaml");
        println!();
        println!("Next steps:");
        println!("  dressed profile set --favorite black,white");
        println!("  dressed add tops --color white --season spring,summer");

        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// The kind of garment (tops, bottoms, outerwear, shoes, accessories)
    category: Category,

    /// The garment's colors
    #[arg(long, short, value_delimiter = ',', value_parser = parse_color, required = true)]
    color: Vec<Color>,

    /// The seasons the garment suits
    #[arg(long, short, value_delimiter = ',', required = true)]
    season: Vec<Season>,

    /// How formal the garment is (casual, semi-formal, formal)
    #[arg(long, short, default_value = "casual")]
    formality: Formality,

    /// Free-form tags, e.g. "jeans" or "leather"
    #[arg(long, short, value_delimiter = ',')]
    tag: Vec<String>,
}

impl Add {
    #[instrument]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut wardrobe = load(root)?;

        let colors = NonEmpty::from_vec(self.color)
            .ok_or_else(|| anyhow::anyhow!("at least one color is required"))?;
        let seasons = NonEmpty::from_vec(self.season)
            .ok_or_else(|| anyhow::anyhow!("at least one season is required"))?;

        let garment =
            Garment::new(self.category, colors, seasons, self.formality).with_tags(self.tag);
        let id = wardrobe.add_garment(garment);
        wardrobe.flush()?;

        println!("{}", format!("✅ Added {} {id}", self.category).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Remove {
    /// The identifier of the garment to remove
    id: GarmentId,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Remove {
    #[instrument]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut wardrobe = load(root)?;

        let Some(garment) = wardrobe.find(self.id) else {
            anyhow::bail!("Garment {} not found", self.id);
        };

        if !self.yes {
            let proceed = dialoguer::Confirm::new()
                .with_prompt(format!(
                    "Remove {} ({})?",
                    garment.category(),
                    list::join_colors(garment)
                ))
                .default(false)
                .interact()?;
            if !proceed {
                println!("Cancelled");
                return Ok(());
            }
        }

        wardrobe.remove_garment(self.id)?;
        wardrobe.flush()?;

        println!("{}", format!("✅ Removed {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Config {
    #[instrument]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut wardrobe = load(root)?;

        match self.command {
            ConfigCommand::Show => {
                let config = wardrobe.config();
                println!("Configuration:");
                println!("  default_occasion: {}", config.default_occasion());
                println!(
                    "  record_history: {} ({})",
                    config.record_history,
                    if config.record_history {
                        "worn outfits are kept".dim()
                    } else {
                        "only last-worn dates are kept".dim()
                    }
                );
            }
            ConfigCommand::Set { key, value } => {
                let config = wardrobe.config_mut();
                match key.as_str() {
                    "default_occasion" => {
                        let occasion: Occasion = value.parse()?;
                        if !config.set_default_occasion(occasion) {
                            eprintln!(
                                "{}",
                                format!("⚠️  Unknown occasion '{value}' will be treated as casual")
                                    .warning()
                            );
                        }
                    }
                    "record_history" => {
                        config.record_history = value
                            .parse::<bool>()
                            .map_err(|_| anyhow::anyhow!("Value must be 'true' or 'false'"))?;
                    }
                    _ => {
                        return Err(anyhow::anyhow!(
                            "Unknown configuration key: '{key}'\nSupported keys: \
                             default_occasion, record_history",
                        ));
                    }
                }
                wardrobe.flush()?;
                println!("{}", format!("Set {key} = {value}").success());
            }
        }

        Ok(())
    }
}
