//! Showdown command handler: resolve the winners among several hands.
//!
//! Every hand is ranked against the same board; the best ranking wins and
//! equal best rankings split the pot.

use serde::Serialize;
use std::io::Write;

use handrank_engine::cardset::Hand;
use handrank_engine::hand::{evaluate, Category, RankedHand};
use handrank_engine::showdown::showdown;

use crate::error::CliError;
use crate::formatters::{format_board, format_ranked, format_seats};
use crate::validation;

#[derive(Debug, Serialize)]
struct SeatReport {
    seat: usize,
    hand: String,
    category: Category,
    description: String,
    ranked: RankedHand,
}

#[derive(Debug, Serialize)]
struct ShowdownReport {
    board: String,
    hands: Vec<SeatReport>,
    winners: Vec<usize>,
    split: bool,
}

/// Handle the showdown command.
///
/// Seats are numbered from 1 in the order the hands were given.
pub fn handle_showdown_command(
    board: &str,
    hands: &[String],
    json: bool,
    symbols: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands.len() < 2 {
        return Err(CliError::InvalidInput(format!(
            "showdown needs at least 2 hands, got {}",
            hands.len()
        )));
    }
    let board = validation::parse_board(board)?;
    let hands: Vec<Hand> = hands
        .iter()
        .map(|h| validation::parse_hand(h))
        .collect::<Result<_, _>>()?;

    let mut groups: Vec<&[_]> = vec![board.cards()];
    groups.extend(hands.iter().map(Hand::cards));
    validation::ensure_distinct(&groups).map_err(CliError::InvalidInput)?;

    let winners: Vec<usize> = showdown(&board, &hands)?.iter().map(|c| c.seat).collect();
    let ranked: Vec<RankedHand> = hands
        .iter()
        .map(|h| evaluate(h, &board))
        .collect::<Result<_, _>>()?;

    if json {
        let report = ShowdownReport {
            board: board.to_string(),
            hands: hands
                .iter()
                .zip(&ranked)
                .enumerate()
                .map(|(seat, (hand, r))| SeatReport {
                    seat: seat + 1,
                    hand: hand.to_string(),
                    category: r.category(),
                    description: r.to_string(),
                    ranked: *r,
                })
                .collect(),
            winners: winners.iter().map(|s| s + 1).collect(),
            split: winners.len() > 1,
        };
        let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(
        out,
        "Board: {} ({})",
        format_board(board.cards(), symbols),
        board.street()
    )?;
    for (seat, (hand, r)) in hands.iter().zip(&ranked).enumerate() {
        writeln!(
            out,
            "P{}: {} {}",
            seat + 1,
            format_board(hand.cards(), symbols),
            format_ranked(r, symbols)
        )?;
    }
    write_winners(out, &winners)?;
    Ok(())
}

/// `Winner: P2`, or `Split pot: P1, P2` when several seats tie.
pub(crate) fn write_winners(out: &mut dyn Write, winners: &[usize]) -> std::io::Result<()> {
    if winners.len() > 1 {
        writeln!(out, "Split pot: {}", format_seats(winners))
    } else {
        writeln!(out, "Winner: {}", format_seats(winners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_showdown(board: &str, list: &[&str], json: bool) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_showdown_command(board, &hands(list), json, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_winner() {
        let output = run_showdown("6d 7c 9d 10h Jh", &["As Qc", "Ah Ks"], false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Board: [6d 7c 9d 10h Jh] (river)");
        assert_eq!(lines[1], "P1: [As Qc] High Card: As + Qc Jh 10h 9d");
        assert_eq!(lines[2], "P2: [Ah Ks] High Card: Ah + Ks Jh 10h 9d");
        assert_eq!(lines[3], "Winner: P2");
    }

    #[test]
    fn test_split_pot() {
        let output = run_showdown("2c Qc 9c 7c 4c", &["Jd 3d", "Kd 4d"], false).unwrap();
        assert!(output.ends_with("Split pot: P1, P2\n"));
    }

    #[test]
    fn test_json_report() {
        let output = run_showdown("Kc Ad Ah As Qc", &["Ks 3s", "Ac 2h"], true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(v["winners"], serde_json::json!([2]));
        assert_eq!(v["split"], false);
        assert_eq!(v["hands"][0]["category"], "FullHouse");
        assert_eq!(v["hands"][1]["category"], "Quads");
        assert_eq!(v["hands"][1]["description"], "AdAhAsAc+Kc");
    }

    #[test]
    fn test_needs_two_hands() {
        assert!(matches!(
            run_showdown("6d 7c 9d 10h Jh", &["As Qc"], false),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_card_held_twice() {
        let err = run_showdown("6d 7c 9d 10h Jh", &["As Qc", "As Ks"], false).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m == "duplicate card As"));
    }

    #[test]
    fn test_write_winners() {
        let mut out = Vec::new();
        write_winners(&mut out, &[0, 2]).unwrap();
        write_winners(&mut out, &[1]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Split pot: P1, P3\nWinner: P2\n");
    }
}
