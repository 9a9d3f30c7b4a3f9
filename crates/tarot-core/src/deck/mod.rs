//! The tarot deck: suits, ranks, cards, and the immutable 78-card table.
//!
//! The table is a `static` array that is never mutated. Anything that needs a
//! different order (the draw engine) works on its own `Vec` of references.

mod table;

use serde::{Deserialize, Serialize};

use table::DECK;

/// Total number of cards in a tarot deck.
pub const DECK_SIZE: usize = 78;
/// Number of Major Arcana cards.
pub const MAJOR_ARCANA_COUNT: usize = 22;
/// Number of Minor Arcana cards.
pub const MINOR_ARCANA_COUNT: usize = 56;
/// Number of cards in each Minor Arcana suit.
pub const CARDS_PER_SUIT: usize = 14;

/// One of the four Minor Arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Creativity, passion, action.
    Wands,
    /// Emotions, relationships, feelings.
    Cups,
    /// Thoughts, intellect, conflict.
    Swords,
    /// Material world, finances, career.
    Pentacles,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    /// The suit's display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// Parse a suit name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wands" => Some(Self::Wands),
            "cups" => Some(Self::Cups),
            "swords" => Some(Self::Swords),
            "pentacles" => Some(Self::Pentacles),
            _ => None,
        }
    }

    /// Resolve a single-letter suit alias (`w`, `c`, `s`, `p`).
    pub fn from_alias(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::Wands),
            'c' => Some(Self::Cups),
            's' => Some(Self::Swords),
            'p' => Some(Self::Pentacles),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank of a Minor Arcana card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (one).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page.
    Page,
    /// Knight.
    Knight,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; CARDS_PER_SUIT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Page,
        Self::Knight,
        Self::Queen,
        Self::King,
    ];

    /// The rank's English name as it appears in card names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// The pip rank for a value in `1..=10`. One is the Ace.
    pub fn from_pips(pips: u32) -> Option<Self> {
        match pips {
            1 => Some(Self::Ace),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::Ten),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of the deck a card belongs to, with the data that half carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arcana {
    /// A numbered trump card (0-21).
    Major {
        /// Position in the Major Arcana sequence.
        number: u8,
    },
    /// A suited pip or court card.
    Minor {
        /// The card's suit.
        suit: Suit,
        /// The card's rank within the suit.
        rank: Rank,
    },
}

/// A single card record from the deck table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Unique display name, e.g. "The Fool" or "Ace of Cups".
    pub name: &'static str,
    /// Meaning when the card is drawn upright.
    pub upright_meaning: &'static str,
    /// Meaning when the card is drawn reversed.
    pub reversed_meaning: &'static str,
    /// Major/Minor classification.
    pub arcana: Arcana,
}

impl Card {
    /// Whether this is a Major Arcana card.
    pub fn is_major(&self) -> bool {
        matches!(self.arcana, Arcana::Major { .. })
    }

    /// The Major Arcana number, if any.
    pub fn number(&self) -> Option<u8> {
        match self.arcana {
            Arcana::Major { number } => Some(number),
            Arcana::Minor { .. } => None,
        }
    }

    /// The Minor Arcana suit, if any.
    pub fn suit(&self) -> Option<Suit> {
        match self.arcana {
            Arcana::Major { .. } => None,
            Arcana::Minor { suit, .. } => Some(suit),
        }
    }

    /// The Minor Arcana rank, if any.
    pub fn rank(&self) -> Option<Rank> {
        match self.arcana {
            Arcana::Major { .. } => None,
            Arcana::Minor { rank, .. } => Some(rank),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// All 78 cards in canonical order.
pub fn all_cards() -> &'static [Card] {
    &DECK
}

/// The 22 Major Arcana, ordered by number.
pub fn major_arcana() -> impl Iterator<Item = &'static Card> {
    DECK.iter().filter(|c| c.is_major())
}

/// The 56 Minor Arcana, ordered by suit then rank.
pub fn minor_arcana() -> impl Iterator<Item = &'static Card> {
    DECK.iter().filter(|c| !c.is_major())
}

/// The 14 cards of one suit, Ace to King.
pub fn cards_of_suit(suit: Suit) -> impl Iterator<Item = &'static Card> {
    DECK.iter().filter(move |c| c.suit() == Some(suit))
}

/// Look up a card by its exact name (case-insensitive).
pub fn find_by_name(name: &str) -> Option<&'static Card> {
    let name = name.trim();
    DECK.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Summary counts for the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckInfo {
    /// Total number of cards.
    pub total: usize,
    /// Number of Major Arcana cards.
    pub major: usize,
    /// Number of Minor Arcana cards.
    pub minor: usize,
    /// The Minor Arcana suits in deck order.
    pub suits: Vec<Suit>,
}

impl DeckInfo {
    /// Compute the counts from the deck table.
    pub fn current() -> Self {
        Self {
            total: DECK.len(),
            major: major_arcana().count(),
            minor: minor_arcana().count(),
            suits: Suit::ALL.to_vec(),
        }
    }
}
