//! Named spreads: fixed layouts over the draw engine.

use chrono::Local;
use serde::Serialize;

use crate::draw::{Reading, SeedSource, draw};
use crate::error::TarotResult;

/// Position labels for the three-card spread, in draw order.
pub const THREE_CARD_POSITIONS: [&str; 3] = ["Past", "Present", "Future"];

/// Position labels for the Celtic Cross, in draw order.
pub const CELTIC_CROSS_POSITIONS: [&str; 10] = [
    "Present Situation",
    "Challenge",
    "Distant Past/Foundation",
    "Recent Past",
    "Possible Outcome",
    "Near Future",
    "Your Approach",
    "External Influences",
    "Hopes and Fears",
    "Final Outcome",
];

/// A reading layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spread {
    /// One card for daily guidance.
    Single,
    /// Past, Present, Future.
    ThreeCard,
    /// The ten-card Celtic Cross.
    CelticCross,
    /// `n` cards, always time-seeded and timestamped.
    RandomDrop(usize),
    /// `n` cards honoring the caller's seed.
    Custom(usize),
}

impl Spread {
    /// How many cards the spread draws.
    pub fn card_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => THREE_CARD_POSITIONS.len(),
            Self::CelticCross => CELTIC_CROSS_POSITIONS.len(),
            Self::RandomDrop(n) | Self::Custom(n) => n,
        }
    }

    /// Position labels, for spreads that have them.
    pub fn positions(self) -> Option<&'static [&'static str]> {
        match self {
            Self::ThreeCard => Some(&THREE_CARD_POSITIONS),
            Self::CelticCross => Some(&CELTIC_CROSS_POSITIONS),
            Self::Single | Self::RandomDrop(_) | Self::Custom(_) => None,
        }
    }

    /// Identifier used in JSON responses.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Single => "single_card",
            Self::ThreeCard => "three_card",
            Self::CelticCross => "celtic_cross",
            Self::RandomDrop(_) => "random_drop",
            Self::Custom(_) => "custom",
        }
    }

    /// Draw this spread.
    ///
    /// [`Spread::RandomDrop`] ignores `seed` and always uses the wall clock.
    pub fn draw(self, seed: &SeedSource) -> TarotResult<Reading> {
        match self {
            Self::Single => single(seed),
            Self::ThreeCard => three_card(seed),
            Self::CelticCross => celtic_cross(seed),
            Self::RandomDrop(n) => random_drop(n),
            Self::Custom(n) => custom(n, seed),
        }
    }
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single Card"),
            Self::ThreeCard => write!(f, "Three Card"),
            Self::CelticCross => write!(f, "Celtic Cross"),
            Self::RandomDrop(n) => write!(f, "{n}-Card Random Drop"),
            Self::Custom(n) => write!(f, "{n}-Card"),
        }
    }
}

impl Serialize for Spread {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

fn labeled(spread: Spread, seed: &SeedSource) -> TarotResult<Reading> {
    let mut reading = draw(spread.card_count(), seed)?;
    reading.spread = spread;
    if let Some(positions) = spread.positions() {
        for (drawn, position) in reading.cards.iter_mut().zip(positions) {
            drawn.position = Some(*position);
        }
    }
    Ok(reading)
}

/// Draw one card.
pub fn single(seed: &SeedSource) -> TarotResult<Reading> {
    labeled(Spread::Single, seed)
}

/// Draw a Past/Present/Future spread.
pub fn three_card(seed: &SeedSource) -> TarotResult<Reading> {
    labeled(Spread::ThreeCard, seed)
}

/// Draw a Celtic Cross.
pub fn celtic_cross(seed: &SeedSource) -> TarotResult<Reading> {
    labeled(Spread::CelticCross, seed)
}

/// Draw `count` cards with pure time-based randomness.
///
/// Every card is stamped with the local time of the draw.
pub fn random_drop(count: usize) -> TarotResult<Reading> {
    let mut reading = labeled(Spread::RandomDrop(count), &SeedSource::Time)?;
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    for drawn in &mut reading.cards {
        drawn.drawn_at = Some(stamp.clone());
    }
    Ok(reading)
}

/// Draw `count` cards honoring the seed, without position labels.
pub fn custom(count: usize, seed: &SeedSource) -> TarotResult<Reading> {
    labeled(Spread::Custom(count), seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TarotError;

    #[test]
    fn single_has_one_unlabeled_card() {
        let reading = single(&SeedSource::Time).unwrap();
        assert_eq!(reading.spread, Spread::Single);
        assert_eq!(reading.len(), 1);
        assert!(reading.cards[0].position.is_none());
        assert!(reading.cards[0].drawn_at.is_none());
    }

    #[test]
    fn three_card_positions_in_order() {
        let reading = three_card(&SeedSource::Text("ENFJ + career change".into())).unwrap();
        assert_eq!(reading.positions(), vec!["Past", "Present", "Future"]);
        assert_eq!(reading.seed.as_deref(), Some("ENFJ + career change"));
    }

    #[test]
    fn celtic_cross_positions_in_order() {
        let reading = celtic_cross(&SeedSource::Time).unwrap();
        assert_eq!(reading.len(), 10);
        assert_eq!(reading.positions(), CELTIC_CROSS_POSITIONS.to_vec());
        assert_eq!(reading.positions()[2], "Distant Past/Foundation");
    }

    #[test]
    fn random_drop_is_stamped_and_unseeded() {
        let reading = random_drop(5).unwrap();
        assert_eq!(reading.spread, Spread::RandomDrop(5));
        assert_eq!(reading.len(), 5);
        assert!(reading.seed.is_none());
        for drawn in &reading {
            let stamp = drawn.drawn_at.as_deref().unwrap();
            assert_eq!(stamp.len(), "2025-01-01 00:00:00".len());
        }
    }

    #[test]
    fn random_drop_rejects_out_of_range() {
        assert!(matches!(random_drop(0), Err(TarotError::InvalidArgument(_))));
        assert!(matches!(random_drop(79), Err(TarotError::InvalidArgument(_))));
    }

    #[test]
    fn random_drop_ignores_seed_via_dispatch() {
        let reading = Spread::RandomDrop(2)
            .draw(&SeedSource::Text("ignored".into()))
            .unwrap();
        assert!(reading.seed.is_none());
    }

    #[test]
    fn custom_keeps_seed_and_count() {
        let reading = custom(7, &SeedSource::Fixed(9)).unwrap();
        assert_eq!(reading.spread, Spread::Custom(7));
        assert_eq!(reading.len(), 7);
        assert!(reading.positions().is_empty());
    }

    #[test]
    fn wire_names() {
        assert_eq!(Spread::Single.wire_name(), "single_card");
        assert_eq!(Spread::ThreeCard.wire_name(), "three_card");
        assert_eq!(Spread::CelticCross.wire_name(), "celtic_cross");
        assert_eq!(Spread::RandomDrop(3).wire_name(), "random_drop");
    }

    #[test]
    fn dispatch_matches_card_count() {
        for spread in [Spread::Single, Spread::ThreeCard, Spread::CelticCross, Spread::Custom(4)] {
            let reading = spread.draw(&SeedSource::Time).unwrap();
            assert_eq!(reading.len(), spread.card_count());
            assert_eq!(reading.spread, spread);
        }
    }
}
