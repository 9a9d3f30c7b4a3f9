use colored::Colorize;
use tarot_core::{
    FormatStyle, Reading, SeedSource, TarotError, TarotResult, celtic_cross, custom,
    random_drop, reading_summary, single, three_card, validate_count,
};

use crate::{ReadingType, Style};

pub struct ReadOptions {
    pub reading_type: ReadingType,
    pub seed: Option<String>,
    pub count: i64,
    pub style: Style,
    pub json: bool,
}

pub fn run(opts: &ReadOptions) -> Result<(), String> {
    let reading = draw_reading(opts).map_err(|e| e.to_string())?;

    if opts.json {
        let json = serde_json::to_string_pretty(&reading)
            .map_err(|e| TarotError::Internal(e.to_string()).to_string())?;
        println!("{json}");
        return Ok(());
    }

    let style = match opts.style {
        Style::Compact => FormatStyle::Compact,
        Style::Decorated => FormatStyle::Decorated,
    };
    let text = reading_summary(&reading, style);
    match style {
        FormatStyle::Compact => println!("{text}"),
        FormatStyle::Decorated => {
            for line in text.lines() {
                println!("{}", paint(line));
            }
        }
    }
    Ok(())
}

fn draw_reading(opts: &ReadOptions) -> TarotResult<Reading> {
    let seed = SeedSource::from_text(opts.seed.as_deref());
    match opts.reading_type {
        ReadingType::Single => single(&seed),
        ReadingType::Three => three_card(&seed),
        ReadingType::Celtic => celtic_cross(&seed),
        ReadingType::Random => {
            let count = validate_count(opts.count)?;
            match seed {
                SeedSource::Time => random_drop(count),
                seeded => custom(count, &seeded),
            }
        }
    }
}

/// Color a line of decorated output.
fn paint(line: &str) -> String {
    let frame = ['═', '╔', '║', '╚'];
    if line.starts_with(frame) {
        line.purple().bold().to_string()
    } else if line.starts_with('▸') {
        line.cyan().bold().to_string()
    } else if line.trim_start().starts_with('↳') {
        line.dimmed().to_string()
    } else if line.ends_with(':') && line == line.to_uppercase() {
        line.yellow().to_string()
    } else {
        line.to_string()
    }
}
