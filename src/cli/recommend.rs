use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use dressed::{
    Occasion, RandomScores, Recommendation, ScoreSource, WeatherCondition, WeatherReading,
    WornOutfit, engine,
};
use serde::Serialize;
use tracing::instrument;

use super::{
    list::render_compact,
    terminal::{self, Colorize},
};

#[derive(Debug, Parser, Default)]
#[command(about = "Suggest outfits from the wardrobe")]
pub struct Recommend {
    /// What to dress for (defaults to the configured occasion)
    #[arg(long, short)]
    occasion: Option<Occasion>,

    /// Current temperature in °C
    #[arg(long, short, allow_negative_numbers = true)]
    temperature: Option<i32>,

    /// Current weather condition, e.g. "rain" or "clear" (defaults to clear)
    #[arg(long, short, requires = "temperature")]
    condition: Option<WeatherCondition>,

    /// Current wind speed in km/h
    #[arg(long, requires = "temperature")]
    wind: Option<f32>,

    /// Seed the match scores for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Record the N-th suggestion (counting from 1) as worn
    #[arg(long, value_name = "N")]
    wear: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    occasion: &'a Occasion,
    #[serde(skip_serializing_if = "Option::is_none")]
    weather: Option<&'a WeatherReading>,
    recommendations: &'a [Recommendation<'a>],
}

impl Recommend {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut wardrobe = super::load(root)?;

        let occasion = self
            .occasion
            .clone()
            .unwrap_or_else(|| wardrobe.config().default_occasion().clone());
        let location = wardrobe.profile().and_then(|profile| profile.location.as_deref());
        let weather = self.weather(location);

        let mut scores: Box<dyn ScoreSource> = match self.seed {
            Some(seed) => Box::new(RandomScores::seeded(seed)),
            None => Box::new(RandomScores::thread_local()),
        };

        if wardrobe.profile().is_none() {
            eprintln!(
                "{}",
                "⚠️  No style profile set. Run 'dressed profile set' to get suggestions.".warning()
            );
        }

        let recommendations = engine::recommend(
            wardrobe.garments(),
            &occasion,
            weather.as_ref(),
            wardrobe.profile(),
            scores.as_mut(),
        );

        match self.output {
            OutputFormat::Pretty => output_pretty(&occasion, weather.as_ref(), &recommendations),
            OutputFormat::Json => {
                let output = JsonOutput {
                    occasion: &occasion,
                    weather: weather.as_ref(),
                    recommendations: &recommendations,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        let worn = match self.wear {
            Some(n) => {
                let Some(recommendation) = n.checked_sub(1).and_then(|i| recommendations.get(i))
                else {
                    anyhow::bail!(
                        "No suggestion number {n}: there are {} suggestions",
                        recommendations.len()
                    );
                };
                Some(WornOutfit::from_recommendation(
                    recommendation,
                    occasion,
                    weather,
                    Utc::now(),
                ))
            }
            None => None,
        };

        if let Some(worn) = worn {
            wardrobe.record_wear(&worn)?;
            wardrobe.flush()?;
            eprintln!(
                "{}",
                format!("✅ Recorded outfit of {} garments as worn", worn.garments.len())
                    .success()
            );
        }

        Ok(())
    }

    /// The weather to filter by.
    ///
    /// Without a temperature there is no reading and the weather filter is
    /// skipped. The condition defaults to clear.
    fn weather(&self, location: Option<&str>) -> Option<WeatherReading> {
        let temperature = self.temperature?;
        let condition = self.condition.clone().unwrap_or(WeatherCondition::Clear);
        Some(WeatherReading {
            wind_speed: self.wind.unwrap_or_default(),
            location: location.unwrap_or_default().to_string(),
            ..WeatherReading::new(temperature, condition)
        })
    }
}

fn output_pretty(
    occasion: &Occasion,
    weather: Option<&WeatherReading>,
    recommendations: &[Recommendation<'_>],
) {
    println!("{}", format!("Outfits for {occasion}").heading());
    match weather {
        Some(weather) => {
            let mut line = format!("  {}°C, {}", weather.temperature, weather.condition);
            if !weather.location.is_empty() {
                line.push_str(&format!(" in {}", weather.location));
            }
            println!("{line}");
            println!("  {}", weather.advice().info());
            if weather.is_rainy() {
                println!("  {}", "Take an umbrella.".info());
            }
            if weather.is_windy() {
                println!("  {}", format!("Windy ({} km/h).", weather.wind_speed).info());
            }
        }
        None => {
            println!("  {}", "No weather given, assuming a mild day.".dim());
            println!("  {}", WeatherReading::fallback().advice().info());
        }
    }
    println!();

    if recommendations.is_empty() {
        println!("{}", "No suggestions. Try adding more garments.".dim());
        return;
    }

    let narrow = terminal::is_narrow();
    for (index, recommendation) in recommendations.iter().enumerate() {
        println!(
            "{}. {}",
            index + 1,
            format!("{} match", recommendation.match_score).success()
        );
        for garment in recommendation.outfit.garments() {
            if narrow {
                println!("   {}", render_compact(garment));
            } else {
                println!(
                    "   {}  {}",
                    render_compact(garment),
                    garment.id().to_string().dim()
                );
            }
        }
    }
}
