use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PokerError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Spades suit (♠)
    Spades,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    /// Fixed iteration order used wherever suits are scanned (deck order, flush search).
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Lowercase letter used in the card text format.
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            's' => Some(Suit::Spades),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the card's strength, so `rank as u8` is its value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Integer strength, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Uppercase token used in the card text format.
    pub fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Case-insensitive lookup of a rank token (`"2"`..`"10"`, `"J"`, `"q"`, ...).
    pub fn from_token(token: &str) -> Option<Rank> {
        let upper = token.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.token() == upper)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: copied freely and equal iff rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Hearts, Diamonds, Spades, or Clubs)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    /// Formats as `Ah`, `10c`, `Kd`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses `<RANK><SUIT>` tokens such as `"Ah"`, `"10c"` or `"kd"`.
///
/// The suit is checked before the rank, so `"Xq"` reports the suit.
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = match chars.next_back() {
            Some(c) if !chars.as_str().is_empty() => c,
            _ => return Err(PokerError::InvalidCardFormat(s.to_string())),
        };
        let rank_token = chars.as_str();

        let suit = Suit::from_letter(suit_ch).ok_or(PokerError::InvalidSuit(suit_ch))?;
        let rank = Rank::from_token(rank_token)
            .ok_or_else(|| PokerError::InvalidRank(rank_token.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// Concatenates card displays, e.g. `KdJs`.
pub fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect()
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &Suit::ALL {
        for &r in &Rank::ALL {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
