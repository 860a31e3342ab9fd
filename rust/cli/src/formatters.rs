//! Card, board, and ranking formatters for terminal display.
//!
//! Pure functions turning engine values into text. Cards print in the same
//! `<RANK><suit>` form the parser accepts (`10c`, `Ah`), or with Unicode suit
//! symbols when the caller asks for them.
//!
//! - **ASCII mode**: `h d s c` letters
//! - **Symbol mode**: `♥ ♦ ♠ ♣`
//!
//! ## Example
//!
//! ```rust
//! use handrank_engine::cards::{Card, Rank, Suit};
//! use handrank_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades, false), "As");
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_board(&[ace_spades], false), "[As]");
//! ```

use handrank_engine::cards::{Card, Rank, Suit};
use handrank_engine::hand::RankedHand;

/// Format a Suit as a letter, or as its Unicode symbol when `symbols` is set.
pub fn format_suit(suit: Suit, symbols: bool) -> String {
    if symbols {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Rank the way the card parser reads it (2-10, J, Q, K, A).
pub fn format_rank(rank: Rank) -> &'static str {
    rank.token()
}

pub fn format_card(card: &Card, symbols: bool) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit, symbols))
}

/// Space-separated cards: `Kc Qc Jc`.
pub fn format_cards(cards: &[Card], symbols: bool) -> String {
    cards
        .iter()
        .map(|c| format_card(c, symbols))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bracketed cards, `[A♠ K♥]`; an empty board prints as `[]`.
pub fn format_board(cards: &[Card], symbols: bool) -> String {
    format!("[{}]", format_cards(cards, symbols))
}

/// Category name, the cards that make it, then any kickers:
/// `Pair: As Ah + Kd Qc Js`.
pub fn format_ranked(ranked: &RankedHand, symbols: bool) -> String {
    let made = format_cards(&ranked.made_cards(), symbols);
    let kickers = ranked.kickers();
    if kickers.is_empty() {
        format!("{}: {}", ranked.category(), made)
    } else {
        format!(
            "{}: {} + {}",
            ranked.category(),
            made,
            format_cards(&kickers, symbols)
        )
    }
}

/// One-based seat labels joined for a winners line: `P1, P3`.
pub fn format_seats(seats: &[usize]) -> String {
    seats
        .iter()
        .map(|s| format!("P{}", s + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_engine::hand::rank_pool;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_format_suit_ascii_and_symbols() {
        assert_eq!(format_suit(Suit::Hearts, false), "h");
        assert_eq!(format_suit(Suit::Clubs, false), "c");
        assert_eq!(format_suit(Suit::Hearts, true), "♥");
        assert_eq!(format_suit(Suit::Diamonds, true), "♦");
        assert_eq!(format_suit(Suit::Spades, true), "♠");
        assert_eq!(format_suit(Suit::Clubs, true), "♣");
    }

    #[test]
    fn test_format_card_uses_parseable_ranks() {
        let ten = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(format_card(&ten, false), "10c");
        assert_eq!(format_card(&ten, true), "10♣");
        let parsed: Card = format_card(&ten, false).parse().unwrap();
        assert_eq!(parsed, ten);
    }

    #[test]
    fn test_format_board() {
        assert_eq!(format_board(&[], false), "[]");
        assert_eq!(format_board(&cards("As Kh"), true), "[A♠ K♥]");
        assert_eq!(format_board(&cards("2s 7c 8c"), false), "[2s 7c 8c]");
    }

    #[test]
    fn test_format_ranked_with_and_without_kickers() {
        let flush = rank_pool(&cards("2s 7c 8c Jc Ah Kc Qc")).unwrap();
        assert_eq!(format_ranked(&flush, false), "Flush: Kc Qc Jc 8c 7c");

        let pair = rank_pool(&cards("Ad 7c 9d Kh Jh As 2c")).unwrap();
        assert_eq!(format_ranked(&pair, false), "Pair: Ad As + Kh Jh 9d");

        let high = rank_pool(&cards("6d 7c 9d 10h Jh As Qc")).unwrap();
        assert_eq!(format_ranked(&high, true), "High Card: A♠ + Q♣ J♥ 10♥ 9♦");
    }

    #[test]
    fn test_format_seats_is_one_based() {
        assert_eq!(format_seats(&[0]), "P1");
        assert_eq!(format_seats(&[0, 2]), "P1, P3");
    }
}
