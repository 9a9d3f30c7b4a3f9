//! Response bodies.

use chrono::Utc;
use serde::Serialize;
use tarot_core::{Arcana, Card, DeckInfo, DrawnCard, Reading, Suit, spread_summary};

/// One drawn card in a reading response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardResponse {
    /// Card name.
    pub name: &'static str,
    /// `"upright"` or `"reversed"`.
    pub orientation: &'static str,
    /// Meaning for the drawn orientation.
    pub meaning: &'static str,
    /// Position label within the spread.
    pub position: Option<&'static str>,
}

impl From<&DrawnCard> for CardResponse {
    fn from(drawn: &DrawnCard) -> Self {
        Self {
            name: drawn.card.name,
            orientation: drawn.orientation.as_lowercase(),
            meaning: drawn.meaning(),
            position: drawn.position,
        }
    }
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingResponse {
    /// Wire name of the spread, e.g. `three_card`.
    pub spread_type: &'static str,
    /// Cards in draw order.
    pub cards: Vec<CardResponse>,
    /// RFC 3339 UTC time the response was produced.
    pub timestamp: String,
    /// The personal seed, echoed back.
    pub seed: Option<String>,
    /// Short description of the spread.
    pub summary: Option<String>,
}

impl From<Reading> for ReadingResponse {
    fn from(reading: Reading) -> Self {
        Self {
            spread_type: reading.spread.wire_name(),
            cards: reading.iter().map(CardResponse::from).collect(),
            timestamp: Utc::now().to_rfc3339(),
            summary: spread_summary(reading.spread),
            seed: reading.seed,
        }
    }
}

/// Deck statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckInfoResponse {
    /// Total number of cards.
    pub total_cards: usize,
    /// Number of Major Arcana cards.
    pub major_arcana: usize,
    /// Number of Minor Arcana cards.
    pub minor_arcana: usize,
    /// Suit names in deck order.
    pub suits: Vec<Suit>,
}

impl From<DeckInfo> for DeckInfoResponse {
    fn from(info: DeckInfo) -> Self {
        Self {
            total_cards: info.total,
            major_arcana: info.major,
            minor_arcana: info.minor,
            suits: info.suits,
        }
    }
}

/// Full information about one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    /// Card name.
    pub name: &'static str,
    /// Major Arcana number.
    pub number: Option<u8>,
    /// Minor Arcana suit.
    pub suit: Option<Suit>,
    /// `"major"` or `"minor"`.
    pub arcana: &'static str,
    /// Meaning when upright.
    pub upright_meaning: &'static str,
    /// Meaning when reversed.
    pub reversed_meaning: &'static str,
}

impl From<&Card> for CardDetail {
    fn from(card: &Card) -> Self {
        Self {
            name: card.name,
            number: card.number(),
            suit: card.suit(),
            arcana: match card.arcana {
                Arcana::Major { .. } => "major",
                Arcana::Minor { .. } => "minor",
            },
            upright_meaning: card.upright_meaning,
            reversed_meaning: card.reversed_meaning,
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}
