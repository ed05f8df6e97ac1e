//! Command line arguments.

use clap::{Parser, Subcommand};
use lexicon_i18n::Vars;
use serde_json::Value;
use std::path::PathBuf;

/// Resolve translations from configured bundles.
#[derive(Debug, Parser)]
#[command(name = "lexicon", version, about)]
pub struct Cli {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, env = "LEXICON_CONFIG", default_value = "lexicon.yaml")]
    pub config: PathBuf,

    /// Log filter, overriding the configuration
    #[arg(long)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Sub-commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve one key for one locale
    Get {
        /// Locale to resolve for
        locale: String,
        /// Translation key
        key: String,
        /// Variable as NAME=VALUE; VALUE is parsed as JSON when possible
        #[arg(short, long = "var", value_parser = parse_var)]
        vars: Vec<(String, Value)>,
    },
    /// Resolve one key for every loaded locale
    Localizations {
        /// Translation key
        key: String,
        /// Variable as NAME=VALUE; VALUE is parsed as JSON when possible
        #[arg(short, long = "var", value_parser = parse_var)]
        vars: Vec<(String, Value)>,
        /// Print a JSON object instead of one line per locale
        #[arg(long)]
        json: bool,
    },
    /// List the keys of a locale's bundle
    Keys {
        /// Locale whose bundle to list
        locale: String,
    },
}

/// Parse a `NAME=VALUE` pair.
pub fn parse_var(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("variable name missing in '{raw}'"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

/// Collect parsed pairs into a variable map; later pairs win.
pub fn to_vars(pairs: &[(String, Value)]) -> Vars {
    pairs.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("Name=Bob").unwrap(), ("Name".to_string(), json!("Bob")));
        assert_eq!(parse_var("Count=3").unwrap(), ("Count".to_string(), json!(3)));
        assert_eq!(
            parse_var("User={\"Name\":\"Ada\"}").unwrap(),
            ("User".to_string(), json!({ "Name": "Ada" }))
        );
        assert_eq!(parse_var("Empty=").unwrap(), ("Empty".to_string(), json!("")));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "lexicon", "--config", "bot.toml", "get", "fr", "command.greet", "-v", "User=Ann",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("bot.toml"));
        match cli.command {
            Command::Get { locale, key, vars } => {
                assert_eq!(locale, "fr");
                assert_eq!(key, "command.greet");
                assert_eq!(to_vars(&vars)["User"], json!("Ann"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_later_vars_win() {
        let vars = to_vars(&[
            ("A".to_string(), json!(1)),
            ("A".to_string(), json!(2)),
        ]);
        assert_eq!(vars["A"], json!(2));
    }
}
