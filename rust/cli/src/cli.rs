//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "handrank",
    version,
    about = "Texas Hold'em hand ranking and showdown resolution"
)]
pub struct HandrankCli {
    /// Print suits as Unicode symbols (♥ ♦ ♠ ♣)
    #[arg(long, global = true)]
    pub symbols: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank one hand against a board
    Eval {
        /// Two hole cards, e.g. "Kc Qc"
        #[arg(long)]
        hand: String,
        /// Three to five community cards, e.g. "2s 7c 8c Jc Ah"
        #[arg(long)]
        board: String,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve the winners among several hands on one board
    Showdown {
        #[arg(long)]
        board: String,
        /// Hole cards for one seat; repeat once per seat
        #[arg(long = "hand", required = true)]
        hands: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Shuffle, deal a full hand, and show the rankings
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Print the resolved configuration
    Cfg,
}
