//! Text rendering for readings.
//!
//! One formatter serves both output styles so that compact and decorated
//! renderings always show the same cards, in the same order, with the same
//! meanings. Nothing here mutates a [`Reading`].

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::draw::{DrawnCard, Reading};
use crate::spread::Spread;

/// How a reading is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// One line per card; suited to logs and language-model prompts.
    #[default]
    Compact,
    /// Multi-line layout with rules, section headers, and position labels.
    Decorated,
}

const NARROW_RULE: usize = 50;
const WIDE_RULE: usize = 60;
const SEED_PREVIEW: usize = 30;

fn orientation_suffix(drawn: &DrawnCard) -> &'static str {
    if drawn.orientation.is_reversed() {
        " (Reversed)"
    } else {
        ""
    }
}

/// Render a single drawn card.
pub fn format_card(drawn: &DrawnCard, style: FormatStyle) -> String {
    let name = drawn.card.name;
    let suffix = orientation_suffix(drawn);
    match style {
        FormatStyle::Compact => format!("{name}{suffix} - {}", drawn.meaning()),
        FormatStyle::Decorated => format!("▸ {name}{suffix}\n   ↳ {}", drawn.meaning()),
    }
}

fn is_numbered(spread: Spread) -> bool {
    matches!(
        spread,
        Spread::CelticCross | Spread::RandomDrop(_) | Spread::Custom(_)
    )
}

fn header_title(spread: Spread) -> String {
    match spread {
        Spread::Single => "SINGLE CARD".to_string(),
        Spread::ThreeCard => "THREE CARD SPREAD (Past • Present • Future)".to_string(),
        Spread::CelticCross => "CELTIC CROSS SPREAD".to_string(),
        Spread::RandomDrop(n) | Spread::Custom(n) => format!("{n}-CARD RANDOM DRAW"),
    }
}

fn rule_width(spread: Spread) -> usize {
    match spread {
        Spread::CelticCross => WIDE_RULE,
        _ => NARROW_RULE,
    }
}

fn compact_body(reading: &Reading) -> Vec<String> {
    let numbered = is_numbered(reading.spread);
    reading
        .iter()
        .enumerate()
        .map(|(i, drawn)| {
            let card = format_card(drawn, FormatStyle::Compact);
            match (numbered, drawn.position) {
                (true, Some(pos)) => format!("{}. {pos}: {card}", i + 1),
                (true, None) => format!("{}. {card}", i + 1),
                (false, Some(pos)) => format!("{pos}: {card}"),
                (false, None) => card,
            }
        })
        .collect()
}

fn decorated_body(reading: &Reading) -> Vec<String> {
    if reading.spread == Spread::Single {
        return reading
            .iter()
            .map(|d| format_card(d, FormatStyle::Decorated))
            .collect();
    }

    let rule = "═".repeat(rule_width(reading.spread));
    let numbered = is_numbered(reading.spread);
    let mut lines = vec![rule.clone(), header_title(reading.spread)];
    if let Some(seed) = &reading.seed {
        lines.push(format!("Personal Seed: {seed}"));
    }
    lines.push(rule);

    for (i, drawn) in reading.iter().enumerate() {
        lines.push(String::new());
        let label = match (numbered, drawn.position) {
            (true, Some(pos)) => format!("{:2}. {}:", i + 1, pos.to_uppercase()),
            (true, None) => format!("{:2}.", i + 1),
            (false, Some(pos)) => format!("{}:", pos.to_uppercase()),
            (false, None) => String::new(),
        };
        if !label.is_empty() {
            lines.push(label);
        }
        lines.push(format_card(drawn, FormatStyle::Decorated));
    }
    lines
}

/// Render the cards of a reading.
pub fn format_reading(reading: &Reading, style: FormatStyle) -> String {
    let lines = match style {
        FormatStyle::Compact => compact_body(reading),
        FormatStyle::Decorated => decorated_body(reading),
    };
    lines.join("\n")
}

fn reading_title(spread: Spread) -> String {
    match spread {
        Spread::Single => "Single Card Tarot Reading".to_string(),
        Spread::ThreeCard => "Three Card Tarot Reading (Past, Present, Future)".to_string(),
        Spread::CelticCross => "Celtic Cross Tarot Reading".to_string(),
        Spread::RandomDrop(n) | Spread::Custom(n) => format!("{n}-Card Tarot Reading"),
    }
}

/// The closing guidance sentence for a spread.
pub fn closing_guidance(spread: Spread) -> &'static str {
    match spread {
        Spread::Single => "This card represents your current energy and guidance for today.",
        Spread::ThreeCard => {
            "This spread shows the flow of time and how past influences shape your present and future path."
        }
        Spread::CelticCross => {
            "This comprehensive spread provides deep insight into your situation, challenges, and potential outcomes."
        }
        Spread::RandomDrop(_) | Spread::Custom(_) => {
            "These cards offer guidance and insight for your current journey."
        }
    }
}

/// The longest prefix of `text` that fits in `max` terminal columns.
fn preview(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > max {
            return &text[..i];
        }
    }
    text
}

fn daily_card_box(seed: Option<&str>) -> String {
    let bar = "═".repeat(NARROW_RULE);
    let mut lines = vec![
        format!("╔{bar}╗"),
        format!("║{:^width$}║", "DAILY CARD READING", width = NARROW_RULE),
    ];
    if let Some(seed) = seed {
        let line = format!("  Seed: {}", preview(seed, SEED_PREVIEW));
        let pad = NARROW_RULE.saturating_sub(line.width());
        lines.push(format!("║{line}{}║", " ".repeat(pad)));
    }
    lines.push(format!("╚{bar}╝"));
    lines.join("\n")
}

/// Render a complete reading: title or header, the cards, and closing guidance.
pub fn reading_summary(reading: &Reading, style: FormatStyle) -> String {
    let body = format_reading(reading, style);
    let closing = closing_guidance(reading.spread);
    match style {
        FormatStyle::Compact => {
            let seed_context = reading
                .seed
                .as_deref()
                .map(|s| format!(" (Personal Seed: {s})"))
                .unwrap_or_default();
            format!(
                "{}{seed_context}:\n\n{body}\n\n{closing}",
                reading_title(reading.spread)
            )
        }
        FormatStyle::Decorated if reading.spread == Spread::Single => {
            format!(
                "{}\n\n{body}\n\n{closing}",
                daily_card_box(reading.seed.as_deref())
            )
        }
        FormatStyle::Decorated => format!("{body}\n\n{closing}"),
    }
}

/// A one-sentence description of a spread, for API responses.
pub fn spread_summary(spread: Spread) -> Option<String> {
    match spread {
        Spread::Single => None,
        Spread::ThreeCard => Some(
            "A three-card spread revealing past influences, present circumstances, and future potential."
                .to_string(),
        ),
        Spread::CelticCross => Some(
            "A comprehensive Celtic Cross reading examining all aspects of your situation."
                .to_string(),
        ),
        Spread::RandomDrop(n) => Some(format!(
            "Random draw of {n} card{} using time-based randomness.",
            if n == 1 { "" } else { "s" }
        )),
        Spread::Custom(n) => Some(format!(
            "A {n}-card draw offering guidance for your current journey."
        )),
    }
}
