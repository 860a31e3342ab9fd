//! Card-list parsing and validation for command arguments.
//!
//! This module turns the free-form card lists given on the command line into
//! engine values and checks them before anything is ranked:
//! - Card lists are split on whitespace and commas (`"Kc Qc"`, `"Kc,Qc"`)
//! - Hole cards must be exactly two cards
//! - Boards must hold a flop, a turn, or a river (3, 4 or 5 cards)
//! - No card may appear twice across all inputs
//!
//! ## Error Handling
//!
//! Token errors keep the engine's `PokerError` so the message names the bad
//! suit or rank; shape errors are plain `String`s, as elsewhere in the CLI.

use std::collections::HashSet;

use handrank_engine::cards::Card;
use handrank_engine::cardset::{CommunityCards, Hand};
use handrank_engine::errors::PokerError;

/// Parse a whitespace- or comma-separated card list.
///
/// # Example
///
/// ```rust
/// # use handrank_cli::validation::parse_cards;
/// let cards = parse_cards("Kc, Qc 10d").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(parse_cards("Kc Qx").is_err());
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, PokerError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse::<Card>)
        .collect()
}

pub fn validate_hole_cards(cards: &[Card]) -> Result<(), String> {
    if cards.len() != 2 {
        return Err(format!(
            "a hand must have exactly 2 cards, got {}",
            cards.len()
        ));
    }
    Ok(())
}

pub fn validate_board_size(cards: &[Card]) -> Result<(), String> {
    if !(3..=5).contains(&cards.len()) {
        return Err(format!(
            "the board must have 3, 4 or 5 cards, got {}",
            cards.len()
        ));
    }
    Ok(())
}

/// Reject any card that shows up more than once across `groups`.
pub fn ensure_distinct(groups: &[&[Card]]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for card in groups.iter().flat_map(|g| g.iter()) {
        if !seen.insert(*card) {
            return Err(format!("duplicate card {}", card));
        }
    }
    Ok(())
}

/// Parse one hole-card argument into a [`Hand`].
pub fn parse_hand(input: &str) -> Result<Hand, crate::CliError> {
    let cards = parse_cards(input)?;
    validate_hole_cards(&cards).map_err(crate::CliError::InvalidInput)?;
    Ok(Hand::new(cards))
}

/// Parse a board argument and stage it street by street.
pub fn parse_board(input: &str) -> Result<CommunityCards, crate::CliError> {
    let cards = parse_cards(input)?;
    validate_board_size(&cards).map_err(crate::CliError::InvalidInput)?;
    Ok(CommunityCards::from_cards(&cards)?)
}
