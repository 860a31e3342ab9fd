//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! handrank configuration with the source of every value (default,
//! configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "players": {
//!     "value": 2,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    write_config(&resolved, out)
}

fn write_config(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "symbols": {
            "value": config.symbols,
            "source": sources.symbols,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_from, ValueSource};

    #[test]
    fn test_cfg_reports_values_and_sources() {
        let resolved = load_from(|key| match key {
            "HANDRANK_PLAYERS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(resolved.sources.players, ValueSource::Env);

        let mut out = Vec::new();
        write_config(&resolved, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let v: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

        assert_eq!(v["players"]["value"], 5);
        assert_eq!(v["players"]["source"], "env");
        assert_eq!(v["seed"]["value"], serde_json::Value::Null);
        assert_eq!(v["seed"]["source"], "default");
        assert_eq!(v["symbols"]["value"], false);
        assert_eq!(v["log_level"]["value"], "warn");
    }

    #[test]
    fn test_cfg_writes_pretty_json() {
        let resolved = load_from(|_| None).unwrap();
        let mut out = Vec::new();
        write_config(&resolved, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains('\n'), "output should be pretty-printed");
        assert!(output.contains("  "), "output should be indented");
    }
}
