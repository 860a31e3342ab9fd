use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::{join_cards, Card, Suit};
use crate::cardset::{CommunityCards, Hand};
use crate::detect;
use crate::errors::PokerError;

/// Hand categories, worst to best. The discriminant is the category's priority.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Best first: the order the ranker consults the detectors in.
    pub const BY_PRIORITY: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::Quads,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub fn detect(self, pool: &[Card]) -> Option<RankedHand> {
        match self {
            Category::RoyalFlush => detect::royal_flush(pool),
            Category::StraightFlush => detect::straight_flush(pool),
            Category::Quads => detect::quads(pool),
            Category::FullHouse => detect::full_house(pool),
            Category::Flush => detect::flush(pool),
            Category::Straight => detect::straight(pool),
            Category::ThreeOfKind => detect::three_of_kind(pool),
            Category::TwoPair => detect::two_pair(pool),
            Category::Pair => detect::pair(pool),
            Category::HighCard => detect::high_card(pool),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five-card holding found in a pool, with the cards that justify it.
///
/// Equality and ordering go through [`HandStrength`]: two rankings with the same
/// values in different suits are equal.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(tag = "category")]
pub enum RankedHand {
    HighCard {
        cards: [Card; 5],
    },
    Pair {
        pair: [Card; 2],
        kickers: [Card; 3],
    },
    TwoPair {
        high_pair: [Card; 2],
        low_pair: [Card; 2],
        kicker: Card,
    },
    ThreeOfKind {
        trips: [Card; 3],
        kickers: [Card; 2],
    },
    Straight {
        cards: [Card; 5],
        high: Card,
    },
    Flush {
        cards: [Card; 5],
        suit: Suit,
    },
    FullHouse {
        trips: [Card; 3],
        pair: [Card; 2],
    },
    Quads {
        quads: [Card; 4],
        kicker: Card,
    },
    StraightFlush {
        cards: [Card; 5],
        high: Card,
    },
    RoyalFlush {
        cards: [Card; 5],
        suit: Suit,
    },
}

impl RankedHand {
    pub fn category(&self) -> Category {
        match self {
            RankedHand::HighCard { .. } => Category::HighCard,
            RankedHand::Pair { .. } => Category::Pair,
            RankedHand::TwoPair { .. } => Category::TwoPair,
            RankedHand::ThreeOfKind { .. } => Category::ThreeOfKind,
            RankedHand::Straight { .. } => Category::Straight,
            RankedHand::Flush { .. } => Category::Flush,
            RankedHand::FullHouse { .. } => Category::FullHouse,
            RankedHand::Quads { .. } => Category::Quads,
            RankedHand::StraightFlush { .. } => Category::StraightFlush,
            RankedHand::RoyalFlush { .. } => Category::RoyalFlush,
        }
    }

    /// Cards that form the category itself, in display order.
    pub fn made_cards(&self) -> Vec<Card> {
        match self {
            RankedHand::HighCard { cards } => vec![cards[0]],
            RankedHand::Pair { pair, .. } => pair.to_vec(),
            RankedHand::TwoPair {
                high_pair,
                low_pair,
                ..
            } => [*high_pair, *low_pair].concat(),
            RankedHand::ThreeOfKind { trips, .. } => trips.to_vec(),
            RankedHand::FullHouse { trips, pair } => [&trips[..], &pair[..]].concat(),
            RankedHand::Quads { quads, .. } => quads.to_vec(),
            RankedHand::Straight { cards, .. }
            | RankedHand::Flush { cards, .. }
            | RankedHand::StraightFlush { cards, .. }
            | RankedHand::RoyalFlush { cards, .. } => cards.to_vec(),
        }
    }

    /// Tie-break cards outside the category, highest first.
    pub fn kickers(&self) -> Vec<Card> {
        match self {
            RankedHand::HighCard { cards } => cards[1..].to_vec(),
            RankedHand::Pair { kickers, .. } => kickers.to_vec(),
            RankedHand::ThreeOfKind { kickers, .. } => kickers.to_vec(),
            RankedHand::TwoPair { kicker, .. } | RankedHand::Quads { kicker, .. } => {
                vec![*kicker]
            }
            _ => Vec::new(),
        }
    }

    /// All five cards: the made cards followed by the kickers.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = self.made_cards();
        cards.extend(self.kickers());
        cards
    }

    /// The comparison key: category, then the category's tie-break values.
    pub fn strength(&self) -> HandStrength {
        let key = match self {
            RankedHand::RoyalFlush { .. } => [0; 5],
            RankedHand::StraightFlush { high, .. } | RankedHand::Straight { high, .. } => {
                [high.value(), 0, 0, 0, 0]
            }
            RankedHand::Quads { quads, kicker } => [quads[0].value(), kicker.value(), 0, 0, 0],
            RankedHand::FullHouse { trips, pair } => [trips[0].value(), pair[0].value(), 0, 0, 0],
            RankedHand::Flush { cards, .. } | RankedHand::HighCard { cards } => {
                cards.map(|c| c.value())
            }
            RankedHand::ThreeOfKind { trips, kickers } => [
                trips[0].value(),
                kickers[0].value(),
                kickers[1].value(),
                0,
                0,
            ],
            RankedHand::TwoPair {
                high_pair,
                low_pair,
                kicker,
            } => [
                high_pair[0].value(),
                low_pair[0].value(),
                kicker.value(),
                0,
                0,
            ],
            RankedHand::Pair { pair, kickers } => [
                pair[0].value(),
                kickers[0].value(),
                kickers[1].value(),
                kickers[2].value(),
                0,
            ],
        };
        HandStrength {
            category: self.category(),
            key,
        }
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.strength() == other.strength()
    }
}

impl Eq for RankedHand {}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(&self.strength(), &other.strength())
    }
}

impl fmt::Display for RankedHand {
    /// Made cards, then `+` and the kickers when there are any: `AcAsAhAd+Kd`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_cards(&self.made_cards()))?;
        let kickers = self.kickers();
        if !kickers.is_empty() {
            write!(f, "+{}", join_cards(&kickers))?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct HandStrength {
    pub category: Category,
    // tie-break values, most significant first, zero-padded to five
    pub key: [u8; 5],
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.key.cmp(&b.key),
        ord => ord,
    }
}

/// Ranks a pool of at least five cards by the first category, best first, that is present.
pub fn rank_pool(pool: &[Card]) -> Result<RankedHand, PokerError> {
    if pool.len() < 5 {
        return Err(PokerError::EmptyInput(format!(
            "a pool needs at least 5 cards, got {}",
            pool.len()
        )));
    }
    let ranked = Category::BY_PRIORITY
        .into_iter()
        .find_map(|category| category.detect(pool))
        .ok_or_else(|| PokerError::EmptyInput("no category matched the pool".into()))?;
    tracing::debug!(category = %ranked.category(), cards = %ranked, "pool ranked");
    Ok(ranked)
}

/// Ranks `hand` against the shared `board`.
pub fn evaluate(hand: &Hand, board: &CommunityCards) -> Result<RankedHand, PokerError> {
    rank_pool(&hand.pool(board))
}
