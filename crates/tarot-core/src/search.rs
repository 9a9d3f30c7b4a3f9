//! Card search by name, Major Arcana number, or suit/rank alias.
//!
//! Aliases are a suit letter followed by a rank token: `s1` is the Ace of
//! Swords, `wk` the King of Wands, `ckn` the Knight of Cups, `p10` the Ten of
//! Pentacles.

use crate::deck::{Card, Rank, Suit, all_cards, cards_of_suit};
use crate::error::{TarotError, TarotResult};

/// Resolve the rank part of an alias (`a`, `p`, `kn`, `q`, `k`, `1`-`10`).
fn rank_from_alias(token: &str) -> Option<Rank> {
    match token {
        "a" => Some(Rank::Ace),
        "p" => Some(Rank::Page),
        "kn" => Some(Rank::Knight),
        "q" => Some(Rank::Queen),
        "k" => Some(Rank::King),
        _ if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
            token.parse().ok().and_then(Rank::from_pips)
        }
        _ => None,
    }
}

/// Parse a whole query as a suit/rank alias.
fn parse_alias(query: &str) -> Option<(Suit, Rank)> {
    let mut chars = query.chars();
    let suit = Suit::from_alias(chars.next()?)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return None;
    }
    Some((suit, rank_from_alias(rest)?))
}

/// Find every card matching `query`, in deck order, each at most once.
///
/// A card matches when the query is a case-insensitive substring of its name,
/// when the query is a Major Arcana number (0-21), or when the query is a
/// suit/rank alias for it. A blank query matches nothing.
pub fn search(query: &str) -> Vec<&'static Card> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let number: Option<u8> = if query.bytes().all(|b| b.is_ascii_digit()) {
        query.parse().ok().filter(|n| *n <= 21)
    } else {
        None
    };
    let alias = parse_alias(&query);

    all_cards()
        .iter()
        .filter(|card| {
            card.name.to_lowercase().contains(&query)
                || (number.is_some() && card.number() == number)
                || alias.is_some_and(|(suit, rank)| {
                    card.suit() == Some(suit) && card.rank() == Some(rank)
                })
        })
        .collect()
}

/// The first card matching `query`, or [`TarotError::NotFound`].
pub fn search_one(query: &str) -> TarotResult<&'static Card> {
    search(query)
        .into_iter()
        .next()
        .ok_or_else(|| TarotError::no_card_matching(query))
}

/// All cards of a suit given by name (case-insensitive).
pub fn cards_by_suit_name(name: &str) -> TarotResult<Vec<&'static Card>> {
    let suit = Suit::parse(name).ok_or_else(|| {
        let valid: Vec<&str> = Suit::ALL.iter().map(|s| s.name()).collect();
        TarotError::NotFound(format!(
            "suit '{name}' not found. Valid suits: {}",
            valid.join(", ")
        ))
    })?;
    Ok(cards_of_suit(suit).collect())
}
