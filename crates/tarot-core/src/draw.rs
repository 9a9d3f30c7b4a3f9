//! The draw engine.
//!
//! A draw copies the canonical deck into a private `Vec`, seeds a generator
//! owned by that draw alone, shuffles, takes the first `count` cards, and
//! flips a coin per card for its orientation. Nothing is shared between
//! draws except the immutable deck table.
//!
//! Seeding mixes in the wall clock on purpose: the same personal seed given
//! twice yields two different readings. [`SeedSource::Fixed`] is the only
//! reproducible mode.

use std::hash::Hasher;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;
use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::deck::{Card, DECK_SIZE, all_cards};
use crate::error::{TarotError, TarotResult};
use crate::spread::Spread;

/// Which way up a card was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    /// Upright; the card's upright meaning applies.
    Upright,
    /// Upside down; the card's reversed meaning applies.
    Reversed,
}

impl Orientation {
    /// Whether this is [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }

    /// Lowercase name used on the HTTP wire.
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Self::Upright => "upright",
            Self::Reversed => "reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card as it came out of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    /// The card from the deck table.
    pub card: &'static Card,
    /// Upright or reversed.
    pub orientation: Orientation,
    /// Spread position label, e.g. "Past".
    pub position: Option<&'static str>,
    /// Local wall-clock stamp (`YYYY-MM-DD HH:MM:SS`), set for random drops.
    pub drawn_at: Option<String>,
}

impl DrawnCard {
    /// The meaning matching this card's orientation.
    pub fn meaning(&self) -> &'static str {
        match self.orientation {
            Orientation::Upright => self.card.upright_meaning,
            Orientation::Reversed => self.card.reversed_meaning,
        }
    }
}

impl Serialize for DrawnCard {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DrawnCard", 7)?;
        s.serialize_field("name", self.card.name)?;
        s.serialize_field("number", &self.card.number())?;
        s.serialize_field("suit", &self.card.suit())?;
        s.serialize_field("orientation", &self.orientation)?;
        s.serialize_field("meaning", self.meaning())?;
        s.serialize_field("position", &self.position)?;
        s.serialize_field("drawn_at", &self.drawn_at)?;
        s.end()
    }
}

/// An ordered set of drawn cards with the spread and seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// The layout the cards were drawn for.
    pub spread: Spread,
    /// The personal seed text as the caller supplied it, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Drawn cards in draw order.
    pub cards: Vec<DrawnCard>,
}

impl Reading {
    /// Number of cards in the reading.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the reading holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the drawn cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawnCard> {
        self.cards.iter()
    }

    /// Card names in draw order.
    pub fn names(&self) -> Vec<&'static str> {
        self.cards.iter().map(|d| d.card.name).collect()
    }

    /// Position labels in draw order (cards without a label are skipped).
    pub fn positions(&self) -> Vec<&'static str> {
        self.cards.iter().filter_map(|d| d.position).collect()
    }
}

impl<'a> IntoIterator for &'a Reading {
    type Item = &'a DrawnCard;
    type IntoIter = std::slice::Iter<'a, DrawnCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Where a draw gets its generator seed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Current wall-clock microseconds.
    #[default]
    Time,
    /// Personal seed text, hashed together with the wall clock.
    Text(String),
    /// A fixed generator seed. Reproducible; no time component.
    Fixed(u64),
}

impl SeedSource {
    /// Build a seed source from optional caller text.
    ///
    /// Text that is empty after trimming counts as no seed.
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            Some(t) if !t.trim().is_empty() => Self::Text(t.to_string()),
            _ => Self::Time,
        }
    }

    /// The personal seed text, if this is a non-blank [`SeedSource::Text`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) if !t.trim().is_empty() => Some(t),
            _ => None,
        }
    }

    /// Whether draws from this source are driven by the wall clock alone.
    fn is_time(&self) -> bool {
        match self {
            Self::Time => true,
            Self::Text(t) => t.trim().is_empty(),
            Self::Fixed(_) => false,
        }
    }
}

fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

fn time_seed(micros: i64) -> u32 {
    (micros.rem_euclid(1 << 32)) as u32
}

fn text_seed(text: &str, micros: i64) -> u32 {
    let mut combined = text.trim().to_lowercase();
    combined.push_str(&micros.to_string());

    let mut hasher = FxHasher::default();
    hasher.write(combined.as_bytes());
    let hash = hasher.finish();
    ((hash >> 32) ^ hash) as u32
}

/// Compute the generator seed for a draw started now.
///
/// Time and text seeds fit in 32 bits; a fixed seed is returned unchanged.
pub fn seed_value(source: &SeedSource) -> u64 {
    match source {
        SeedSource::Fixed(seed) => *seed,
        SeedSource::Text(text) if !source.is_time() => u64::from(text_seed(text, now_micros())),
        SeedSource::Text(_) | SeedSource::Time => u64::from(time_seed(now_micros())),
    }
}

/// Check a caller-supplied card count and convert it to `usize`.
pub fn validate_count(count: i64) -> TarotResult<usize> {
    match usize::try_from(count) {
        Ok(n) if (1..=DECK_SIZE).contains(&n) => Ok(n),
        _ => Err(TarotError::InvalidArgument(format!(
            "number of cards must be between 1 and {DECK_SIZE}, got {count}"
        ))),
    }
}

/// Draw `count` distinct cards.
///
/// The result is tagged [`Spread::Custom`]; the spread helpers relabel it.
pub fn draw(count: usize, seed: &SeedSource) -> TarotResult<Reading> {
    if !(1..=DECK_SIZE).contains(&count) {
        return Err(TarotError::InvalidArgument(format!(
            "number of cards must be between 1 and {DECK_SIZE}, got {count}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed_value(seed));
    let mut deck: Vec<&'static Card> = all_cards().iter().collect();

    let passes = if seed.is_time() {
        rng.random_range(3..=7)
    } else {
        1
    };
    for _ in 0..passes {
        deck.shuffle(&mut rng);
    }

    let cards = deck
        .into_iter()
        .take(count)
        .map(|card| DrawnCard {
            card,
            orientation: if rng.random_bool(0.5) {
                Orientation::Reversed
            } else {
                Orientation::Upright
            },
            position: None,
            drawn_at: None,
        })
        .collect();

    Ok(Reading {
        spread: Spread::Custom(count),
        seed: seed.text().map(str::to_string),
        cards,
    })
}
