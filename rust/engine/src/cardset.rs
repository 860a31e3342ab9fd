//! Card collections: a player's private [`Hand`] and the shared [`CommunityCards`].
//!
//! The board is a small state machine over [`Street`]. Each push is the only
//! legal transition out of its state: `Preflop -> Flop -> Turn -> River`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{join_cards, Card, Suit};
use crate::errors::PokerError;

/// Represents how far the community board has been revealed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Street {
    /// No community cards yet
    Preflop,
    /// First three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
}

impl Street {
    /// The stage a push from this state would reveal.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Number of cards revealed by the push that enters this stage.
    pub fn arity(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}

/// A player's private cards, in the order they were received.
///
/// Two cards in Hold'em, but nothing downstream depends on that count.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The evaluation pool: board cards first, then this hand's cards.
    pub fn pool(&self, board: &CommunityCards) -> Vec<Card> {
        let mut pool = Vec::with_capacity(board.len() + self.cards.len());
        pool.extend_from_slice(board.cards());
        pool.extend_from_slice(&self.cards);
        pool
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_cards(&self.cards))
    }
}

/// The shared board, revealed as flop (3 cards), turn (1) and river (1).
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CommunityCards {
    cards: Vec<Card>,
    street: Street,
}

impl Default for CommunityCards {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityCards {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
            street: Street::Preflop,
        }
    }

    /// Builds a board from 0, 3, 4 or 5 cards by replaying the legal pushes.
    pub fn from_cards(cards: &[Card]) -> Result<Self, PokerError> {
        let mut board = Self::new();
        match cards.len() {
            0 => {}
            n @ 3..=5 => {
                board.push_flop(&cards[..3])?;
                for &card in &cards[3..n] {
                    board.deal_next(&[card])?;
                }
            }
            n => {
                return Err(PokerError::StageArity {
                    street: Street::Flop,
                    expected: Street::Flop.arity(),
                    actual: n,
                })
            }
        }
        Ok(board)
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn suits(&self) -> Vec<Suit> {
        self.cards.iter().map(|c| c.suit).collect()
    }

    pub fn get_flop(&self) -> Option<&[Card]> {
        (self.street >= Street::Flop).then(|| &self.cards[..3])
    }

    pub fn get_turn(&self) -> Option<Card> {
        (self.street >= Street::Turn).then(|| self.cards[3])
    }

    pub fn get_river(&self) -> Option<Card> {
        (self.street >= Street::River).then(|| self.cards[4])
    }

    pub fn push_flop(&mut self, flop: &[Card]) -> Result<(), PokerError> {
        self.push(Street::Flop, flop)
    }

    pub fn push_turn(&mut self, card: Card) -> Result<(), PokerError> {
        self.push(Street::Turn, &[card])
    }

    pub fn push_river(&mut self, card: Card) -> Result<(), PokerError> {
        self.push(Street::River, &[card])
    }

    /// Pushes whichever stage comes next, checking that stage's arity.
    pub fn deal_next(&mut self, cards: &[Card]) -> Result<Street, PokerError> {
        let next = self.street.next().ok_or(PokerError::StageOrder {
            attempted: Street::River,
            current: self.street,
        })?;
        self.push(next, cards)?;
        Ok(next)
    }

    fn push(&mut self, street: Street, cards: &[Card]) -> Result<(), PokerError> {
        if cards.len() != street.arity() {
            return Err(PokerError::StageArity {
                street,
                expected: street.arity(),
                actual: cards.len(),
            });
        }
        if self.street.next() != Some(street) {
            return Err(PokerError::StageOrder {
                attempted: street,
                current: self.street,
            });
        }
        self.cards.extend_from_slice(cards);
        self.street = street;
        tracing::trace!(%street, board = %self, "community cards pushed");
        Ok(())
    }
}

impl fmt::Display for CommunityCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_cards(&self.cards))
    }
}
