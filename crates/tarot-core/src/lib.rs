//! Core library for tarot readings.
//!
//! Holds the static 78-card deck, draws shuffled subsets of it under the
//! classic spreads, searches cards by name or alias, and renders readings as
//! text. The CLI and HTTP crates are thin adapters over this one.
//!
//! ```
//! use tarot_core::{FormatStyle, SeedSource, format_reading, three_card};
//!
//! let reading = three_card(&SeedSource::from_text(Some("INFP"))).unwrap();
//! assert_eq!(reading.positions(), ["Past", "Present", "Future"]);
//! let text = format_reading(&reading, FormatStyle::Compact);
//! assert_eq!(text.lines().count(), 3);
//! ```

pub mod deck;
pub mod draw;
pub mod error;
pub mod format;
pub mod search;
pub mod spread;

pub use deck::{
    Arcana, Card, DeckInfo, Rank, Suit, all_cards, cards_of_suit, find_by_name, major_arcana,
    minor_arcana,
};
pub use draw::{DrawnCard, Orientation, Reading, SeedSource, draw, validate_count};
pub use error::{TarotError, TarotResult};
pub use format::{FormatStyle, format_card, format_reading, reading_summary, spread_summary};
pub use search::{cards_by_suit_name, search, search_one};
pub use spread::{Spread, celtic_cross, custom, random_drop, single, three_card};
