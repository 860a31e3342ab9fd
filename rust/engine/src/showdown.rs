use std::cmp::Ordering;

use crate::cardset::{CommunityCards, Hand};
use crate::errors::PokerError;
use crate::hand::{evaluate, RankedHand};

/// A hand still in contention at showdown, with its seat in the input list.
#[derive(Debug, Clone, Copy)]
pub struct Contender<'a> {
    /// Index of the hand in the list passed to [`showdown`]
    pub seat: usize,
    pub hand: &'a Hand,
    pub ranked: RankedHand,
}

/// Ranks every hand against the shared board and keeps the ones tied for best.
///
/// Single pass: the first hand seeds the best, a strictly better hand resets the
/// tied list, an equal one joins it. More than one contender means a split pot.
pub fn showdown<'a>(
    board: &CommunityCards,
    hands: &'a [Hand],
) -> Result<Vec<Contender<'a>>, PokerError> {
    let mut best: Vec<Contender<'a>> = Vec::new();
    for (seat, hand) in hands.iter().enumerate() {
        let ranked = evaluate(hand, board)?;
        let contender = Contender { seat, hand, ranked };
        match best.first().map(|b| ranked.cmp(&b.ranked)) {
            None | Some(Ordering::Greater) => best = vec![contender],
            Some(Ordering::Equal) => best.push(contender),
            Some(Ordering::Less) => {}
        }
    }
    if best.is_empty() {
        return Err(PokerError::EmptyInput("no hands to resolve".into()));
    }
    tracing::debug!(
        board = %board,
        hands = hands.len(),
        winners = best.len(),
        category = %best[0].ranked.category(),
        "showdown resolved"
    );
    Ok(best)
}

/// The winning hands in input order; two or more means the pot is split.
pub fn resolve_winners<'a>(
    board: &CommunityCards,
    hands: &'a [Hand],
) -> Result<Vec<&'a Hand>, PokerError> {
    Ok(showdown(board, hands)?
        .into_iter()
        .map(|c| c.hand)
        .collect())
}
