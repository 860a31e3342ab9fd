//! Eval command handler: rank one hand against a board.
//!
//! Parses the hole cards and the board, rejects duplicates across both, and
//! prints the best five-card holding as text or JSON.
//!
//! # Example Output
//!
//! ```text
//! Hand:  [Kc Qc]
//! Board: [2s 7c 8c Jc Ah] (river)
//! Rank:  Flush: Kc Qc Jc 8c 7c
//! ```

use serde::Serialize;
use std::io::Write;

use handrank_engine::cardset::Street;
use handrank_engine::hand::{evaluate, Category, HandStrength, RankedHand};

use crate::error::CliError;
use crate::formatters::{format_board, format_ranked};
use crate::validation;

#[derive(Debug, Serialize)]
struct EvalReport {
    hand: String,
    board: String,
    street: Street,
    category: Category,
    description: String,
    ranked: RankedHand,
    strength: HandStrength,
}

/// Handle the eval command.
///
/// # Errors
///
/// Returns `CliError::Engine` for unparsable cards, `CliError::InvalidInput`
/// for a wrong number of cards or a duplicated card, and `CliError::Io` if
/// writing fails.
pub fn handle_eval_command(
    hand: &str,
    board: &str,
    json: bool,
    symbols: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = validation::parse_hand(hand)?;
    let board = validation::parse_board(board)?;
    validation::ensure_distinct(&[hand.cards(), board.cards()]).map_err(CliError::InvalidInput)?;

    let ranked = evaluate(&hand, &board)?;

    if json {
        let report = EvalReport {
            hand: hand.to_string(),
            board: board.to_string(),
            street: board.street(),
            category: ranked.category(),
            description: ranked.to_string(),
            ranked,
            strength: ranked.strength(),
        };
        let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "Hand:  {}", format_board(hand.cards(), symbols))?;
        writeln!(
            out,
            "Board: {} ({})",
            format_board(board.cards(), symbols),
            board.street()
        )?;
        writeln!(out, "Rank:  {}", format_ranked(&ranked, symbols))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_eval(hand: &str, board: &str, json: bool) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(hand, board, json, false, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_eval_text_output() {
        let output = run_eval("Kc Qc", "2s 7c 8c Jc Ah", false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Hand:  [Kc Qc]",
                "Board: [2s 7c 8c Jc Ah] (river)",
                "Rank:  Flush: Kc Qc Jc 8c 7c",
            ]
        );
    }

    #[test]
    fn test_eval_on_the_flop() {
        let output = run_eval("As Ad", "Ac 7h 2d", false).unwrap();
        assert!(output.contains("(flop)"));
        assert!(output.contains("Rank:  Three of a Kind: Ac As Ad + 7h 2d"));
    }

    #[test]
    fn test_eval_json_output() {
        let output = run_eval("Kc Qc", "2s 7c 8c Jc Ah", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(v["hand"], "KcQc");
        assert_eq!(v["board"], "2s7c8cJcAh");
        assert_eq!(v["street"], "River");
        assert_eq!(v["category"], "Flush");
        assert_eq!(v["description"], "KcQcJc8c7c");
        assert_eq!(v["ranked"]["category"], "Flush");
        assert_eq!(v["strength"]["key"], serde_json::json!([13, 12, 11, 8, 7]));
    }

    #[test]
    fn test_eval_rejects_duplicates() {
        let err = run_eval("Kc Qc", "Kc 7c 8c", false).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m.contains("duplicate card Kc")));
    }

    #[test]
    fn test_eval_rejects_bad_shapes() {
        assert!(matches!(
            run_eval("Kc", "2s 7c 8c", false),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            run_eval("Kc Qc", "2s 7c", false),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            run_eval("Kc Qq", "2s 7c 8c", false),
            Err(CliError::Engine(_))
        ));
    }
}
