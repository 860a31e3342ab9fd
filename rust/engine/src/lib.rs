//! # handrank-engine: Poker Hand Ranking Core
//!
//! Ranks Texas Hold'em hands: finds the best five-card category in a player's
//! hole cards plus the shared board, orders rankings totally (kickers included),
//! and picks the winners, split pots included, among hands on the same board.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`cardset`] - Hole cards and the staged community board
//! - [`detect`] - One detector per hand category
//! - [`hand`] - Ranked hands, the hand ranker and the comparison key
//! - [`showdown`] - Winner resolution across hands sharing a board
//! - [`deck`] - Seeded deck used to deal cards
//! - [`errors`] - Error types for parsing, board staging and evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use handrank_engine::cards::Card;
//! use handrank_engine::cardset::{CommunityCards, Hand};
//! use handrank_engine::hand::{evaluate, Category};
//!
//! let cards = |s: &str| -> Vec<Card> { s.split(' ').map(|t| t.parse().unwrap()).collect() };
//!
//! let mut board = CommunityCards::new();
//! board.push_flop(&cards("2s 7c 8c")).unwrap();
//! board.push_turn("Jc".parse().unwrap()).unwrap();
//! board.push_river("Ah".parse().unwrap()).unwrap();
//!
//! let ranked = evaluate(&Hand::new(cards("Kc Qc")), &board).unwrap();
//! assert_eq!(ranked.category(), Category::Flush);
//! assert_eq!(ranked.to_string(), "KcQcJc8c7c");
//! ```
//!
//! ## Split Pots
//!
//! ```rust
//! use handrank_engine::cards::Card;
//! use handrank_engine::cardset::{CommunityCards, Hand};
//! use handrank_engine::showdown::resolve_winners;
//!
//! let cards = |s: &str| -> Vec<Card> { s.split(' ').map(|t| t.parse().unwrap()).collect() };
//!
//! let board = CommunityCards::from_cards(&cards("6d 7c 9d 10h Jh")).unwrap();
//! let hands = [Hand::new(cards("As 2c")), Hand::new(cards("Ah 3s"))];
//! assert_eq!(resolve_winners(&board, &hands).unwrap().len(), 2);
//! ```

pub mod cards;
pub mod cardset;
pub mod deck;
pub mod detect;
pub mod errors;
pub mod hand;
pub mod showdown;
