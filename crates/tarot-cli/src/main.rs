//! CLI frontend for tarot readings.

mod commands;

use std::process;

use clap::{Parser, ValueEnum};

use commands::read::ReadOptions;

#[derive(Parser)]
#[command(
    name = "tarot-reader",
    about = "Tarot Reader: generate tarot readings (for entertainment purposes only)",
    version
)]
struct Cli {
    /// Type of reading
    #[arg(short = 't', long = "type", value_enum, default_value_t = ReadingType::Single)]
    reading_type: ReadingType,

    /// Personal seed to flavor the shuffle (e.g. MBTI type, blood type, a question)
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of cards for a random draw (1-78)
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    count: i64,

    /// Output style
    #[arg(long, value_enum, default_value_t = Style::Decorated)]
    style: Style,

    /// Print the reading as JSON
    #[arg(long)]
    json: bool,

    /// Search the deck by name, Major Arcana number, or alias (e.g. s1, wk) instead of drawing
    #[arg(long, conflicts_with_all = ["reading_type", "seed", "count", "json"])]
    search: Option<String>,
}

/// The spread to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReadingType {
    /// One card for daily guidance
    Single,
    /// Past, Present, Future
    Three,
    /// Ten-card Celtic Cross
    Celtic,
    /// `--count` cards; time-based unless a seed is given
    Random,
}

/// Text layout for the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// One line per card
    Compact,
    /// Headers, rules, and position labels
    Decorated,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.search {
        Some(query) => commands::search::run(&query),
        None => commands::read::run(&ReadOptions {
            reading_type: cli.reading_type,
            seed: cli.seed,
            count: cli.count,
            style: cli.style,
            json: cli.json,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
