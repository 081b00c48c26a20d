use std::{fmt, path::PathBuf};

use clap::{Parser, ValueEnum};
use dressed::{Category, Formality, Garment, Season};
use tracing::instrument;

use super::terminal::{self, Colorize};

/// List garments with optional filters.
#[derive(Debug, Parser, Default)]
pub struct List {
    /// Only show garments of this category.
    #[arg(long, short)]
    category: Option<Category>,

    /// Only show garments that suit this season.
    #[arg(long, short)]
    season: Option<Season>,

    /// Only show garments of this formality.
    #[arg(long, short)]
    formality: Option<Formality>,

    /// Only show garments with this color.
    #[arg(long, value_parser = super::parse_color)]
    color: Option<dressed::Color>,

    /// Sort order.
    #[arg(long, default_value_t = SortField::Added)]
    sort: SortField,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Sortable fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum SortField {
    #[default]
    Added,
    Category,
    LastWorn,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let wardrobe = super::load(root)?;
        let garments = self.select(wardrobe.garments());

        tracing::debug!("{} of {} garments match", garments.len(), wardrobe.garments().len());

        match self.output {
            OutputFormat::Table => render_table(&garments),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&garments)?);
            }
        }
        Ok(())
    }

    fn select<'a>(&self, garments: &'a [Garment]) -> Vec<&'a Garment> {
        let mut garments: Vec<&Garment> = garments
            .iter()
            .filter(|garment| self.matches(garment))
            .collect();

        match self.sort {
            SortField::Added => garments.sort_by_key(|garment| garment.created()),
            SortField::Category => garments.sort_by_key(|garment| garment.category()),
            // Most recently worn first, never-worn last.
            SortField::LastWorn => {
                garments.sort_by_key(|garment| std::cmp::Reverse(garment.last_worn()));
            }
        }
        garments
    }

    fn matches(&self, garment: &Garment) -> bool {
        self.category.is_none_or(|category| garment.category() == category)
            && self
                .season
                .is_none_or(|season| garment.seasons().contains(&season))
            && self
                .formality
                .is_none_or(|formality| garment.formality() == formality)
            && self.color.as_ref().is_none_or(|color| garment.has_color(color))
    }
}

/// The garment's colors as a comma-separated list.
pub fn join_colors(garment: &Garment) -> String {
    garment
        .colors()
        .iter()
        .map(dressed::Color::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_seasons(garment: &Garment) -> String {
    garment
        .seasons()
        .iter()
        .map(|season| season.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single line per garment, used for narrow terminals and outfit listings.
pub fn render_compact(garment: &Garment) -> String {
    let mut line = format!("{} ({})", garment.category(), join_colors(garment));
    if !garment.tags().is_empty() {
        line.push_str(&format!(" [{}]", garment.tags().join(", ")));
    }
    line
}

fn render_table(garments: &[&Garment]) {
    if garments.is_empty() {
        println!("{}", "No garments found".dim());
        return;
    }

    if terminal::is_narrow() {
        for garment in garments {
            println!("{}  {}", garment.id().to_string().dim(), render_compact(garment));
        }
        return;
    }

    let headers = ["ID", "CATEGORY", "COLORS", "SEASONS", "FORMALITY", "ADDED", "LAST WORN"];
    let rows: Vec<[String; 7]> = garments
        .iter()
        .map(|garment| {
            [
                garment.id().to_string(),
                garment.category().to_string(),
                join_colors(garment),
                join_seasons(garment),
                garment.formality().to_string(),
                garment.created().format("%Y-%m-%d").to_string(),
                garment
                    .last_worn()
                    .map_or_else(|| "never".to_string(), |at| at.format("%Y-%m-%d").to_string()),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    for (header, width) in headers.iter().zip(widths) {
        print!("{header:<width$}  ");
    }
    println!();
    for width in widths {
        print!("{:-<width$}  ", "");
    }
    println!();
    for row in rows {
        for (value, width) in row.iter().zip(widths) {
            print!("{value:<width$}  ");
        }
        println!();
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Table => "table",
            Self::Json => "json",
        };
        f.write_str(label)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Added => "added",
            Self::Category => "category",
            Self::LastWorn => "last-worn",
        };
        f.write_str(label)
    }
}
