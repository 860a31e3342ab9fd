//! # handrank CLI Library
//!
//! Command-line front end for the `handrank_engine` hand evaluator. It parses
//! card lists, ranks hands, resolves showdowns and deals seeded hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let args = ["handrank", "eval", "--hand", "Kc Qc", "--board", "2s 7c 8c Jc Ah"];
//! let code = handrank_cli::run(args, &mut out, &mut std::io::stderr());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Rank one hand against a board
//! - `showdown`: Resolve winners and split pots among several hands
//! - `deal`: Deal a seeded hand to a table and show every ranking
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HandrankCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_showdown_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "showdown", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let args = ["handrank", "deal", "--seed", "42"];
/// let code = handrank_cli::run(args, &mut out, &mut std::io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandrankCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "handrank - poker hand ranking");
                    write_or_exit!(err, "Usage: handrank <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: handrank --help");
                    exit_code::ERROR
                }
            };
        }
    };

    tracing::debug!(cmd = ?cli.cmd, symbols = cli.symbols, "dispatching command");
    match dispatch(cli, out, err) {
        Ok(()) => exit_code::SUCCESS,
        // configuration errors are reported where they are detected
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(cli: HandrankCli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { hand, board, json } => {
            let cfg = load_config(err)?;
            warn_symbols_in_json(err, json, cli.symbols)?;
            handle_eval_command(&hand, &board, json, cli.symbols || cfg.symbols, out)
        }
        Commands::Showdown { board, hands, json } => {
            let cfg = load_config(err)?;
            warn_symbols_in_json(err, json, cli.symbols)?;
            handle_showdown_command(&board, &hands, json, cli.symbols || cfg.symbols, out)
        }
        Commands::Deal { seed, players } => {
            let cfg = load_config(err)?;
            handle_deal_command(
                seed.or(cfg.seed),
                players.unwrap_or(cfg.players),
                cli.symbols || cfg.symbols,
                out,
            )
        }
    }
}

fn load_config(err: &mut dyn Write) -> Result<config::Config, CliError> {
    config::load().or_else(|e| {
        ui::write_error(err, &format!("Invalid configuration: {}", e))?;
        Err(CliError::Config(e.to_string()))
    })
}

fn warn_symbols_in_json(
    err: &mut dyn Write,
    json: bool,
    symbols_flag: bool,
) -> Result<(), CliError> {
    if json && symbols_flag {
        ui::display_warning(err, "--symbols has no effect on JSON output")?;
    }
    Ok(())
}
