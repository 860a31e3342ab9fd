use thiserror::Error;

use crate::cardset::Street;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PokerError {
    #[error("Invalid card format: {0:?} (expected <rank><suit>, e.g. \"Ah\" or \"10c\")")]
    InvalidCardFormat(String),
    #[error("Invalid suit: {0:?} (expected one of h, d, s, c)")]
    InvalidSuit(char),
    #[error("Invalid rank: {0:?} (expected 2-10, J, Q, K or A)")]
    InvalidRank(String),
    #[error("Cannot push the {attempted} while the board is at the {current}")]
    StageOrder { attempted: Street, current: Street },
    #[error("The {street} takes exactly {expected} card(s), got {actual}")]
    StageArity {
        street: Street,
        expected: usize,
        actual: usize,
    },
    #[error("Nothing to evaluate: {0}")]
    EmptyInput(String),
}
