//! Deal command handler for dealing and ranking a full hand.
//!
//! This module provides the `deal` command which shuffles a seeded deck, deals
//! hole cards to every player, burns and deals the flop, turn and river, and
//! then ranks each hand and names the winners. The seed is echoed so a deal
//! can be reproduced.

use std::io::Write;

use handrank_engine::cards::Card;
use handrank_engine::cardset::{CommunityCards, Hand};
use handrank_engine::deck::Deck;
use handrank_engine::hand::evaluate;
use handrank_engine::showdown::showdown;

use crate::commands::showdown::write_winners;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_ranked};

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed; a random one is drawn (and printed) when absent
/// * `players` - Number of hands to deal, 2 through [`config::MAX_PLAYERS`]
/// * `symbols` - Print Unicode suit symbols instead of letters
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    symbols: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    config::validate_players(players).map_err(CliError::InvalidInput)?;
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();

    // one card to each player per round, twice
    let mut holes: Vec<Vec<Card>> = vec![Vec::with_capacity(2); players];
    for _ in 0..2 {
        for hole in holes.iter_mut() {
            hole.push(draw(&mut deck)?);
        }
    }
    let hands: Vec<Hand> = holes.into_iter().map(Hand::new).collect();

    let mut board = CommunityCards::new();
    while let Some(next) = board.street().next() {
        deck.burn_card();
        let cards = deck
            .deal_n(next.arity())
            .ok_or_else(|| CliError::InvalidInput("deck exhausted".into()))?;
        board.deal_next(&cards)?;
    }

    writeln!(out, "Seed: {}", base_seed)?;
    for (seat, hand) in hands.iter().enumerate() {
        writeln!(out, "Hole P{}: {}", seat + 1, format_board(hand.cards(), symbols))?;
    }
    writeln!(out, "Board: {}", format_board(board.cards(), symbols))?;
    for (seat, hand) in hands.iter().enumerate() {
        let ranked = evaluate(hand, &board)?;
        writeln!(out, "P{}: {}", seat + 1, format_ranked(&ranked, symbols))?;
    }
    let winners: Vec<usize> = showdown(&board, &hands)?.iter().map(|c| c.seat).collect();
    write_winners(out, &winners)?;
    Ok(())
}

fn draw(deck: &mut Deck) -> Result<Card, CliError> {
    deck.deal_card()
        .ok_or_else(|| CliError::InvalidInput("deck exhausted".into()))
}
