use clap::{Parser, ValueEnum};
use std::collections::HashMap;

use crate::error::{ConfigError, Result};

#[derive(Parser)]
#[command(name = "qcfg")]
#[command(about = "Quota Configs - Inspect and validate dynamic quota override schemas")]
#[command(version)]
pub struct Args {
    /// Schema view to use
    #[arg(short, long, value_enum, default_value = "client")]
    pub schema: SchemaArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Check whether NAME is a quota config (repeatable)
    #[arg(long, value_name = "NAME")]
    pub check: Vec<String>,

    /// Override to validate against the schema (repeatable, each NAME at most once)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,

    /// Mechanism names to use instead of the built-in SCRAM list (user schema)
    #[arg(short, long, value_name = "NAME")]
    pub mechanism: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show verbose output (schema build logs)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SchemaArg {
    /// Quota settings only
    Client,
    /// Quota settings plus per-mechanism credentials
    User,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table format with colors
    Table,
    /// JSON output for scripting
    Json,
    /// Simple text format
    Simple,
}

/// Split `NAME=VALUE` at the first `=`
pub fn parse_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got {:?}", raw)),
    }
}

/// Collect `--set` pairs, rejecting a name given more than once
pub fn collect_overrides(pairs: &[(String, String)]) -> Result<HashMap<String, String>> {
    let mut overrides = HashMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        if overrides.insert(name.clone(), value.clone()).is_some() {
            return Err(ConfigError::DuplicateOverride(name.clone()));
        }
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_collect_overrides() {
        let overrides = collect_overrides(&[pair("producer_byte_rate", "1024"), pair("request_percentage", "50")]).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["request_percentage"], "50");
    }

    #[test]
    fn test_collect_overrides_rejects_repeated_name() {
        let err = collect_overrides(&[
            pair("producer_byte_rate", "1"),
            pair("consumer_byte_rate", "2"),
            pair("producer_byte_rate", "3"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOverride(ref n) if n == "producer_byte_rate"));
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("producer_byte_rate=1024"),
            Ok(("producer_byte_rate".to_string(), "1024".to_string()))
        );
        assert_eq!(
            parse_override("SCRAM-SHA-256=salt=abc,iterations=4096"),
            Ok(("SCRAM-SHA-256".to_string(), "salt=abc,iterations=4096".to_string()))
        );
        assert!(parse_override("no_equals").is_err());
        assert!(parse_override("=5").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "qcfg", "--schema", "user", "--set", "request_percentage=50", "--check", "acks", "-m", "SCRAM-SHA-256",
        ]);
        assert_eq!(args.schema, SchemaArg::User);
        assert_eq!(args.overrides, vec![("request_percentage".to_string(), "50".to_string())]);
        assert_eq!(args.check, vec!["acks"]);
        assert_eq!(args.mechanism, vec!["SCRAM-SHA-256"]);
        assert!(!args.verbose);
    }
}
