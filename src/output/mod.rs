pub mod json;
pub mod simple;
pub mod table;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config_def::{ConfigDef, ParsedConfig};
use crate::mechanisms::ScramMechanism;
use crate::quota::is_quota_config;

/// Which part of a schema an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind {
    Quota,
    /// Credential slot for a built-in SCRAM mechanism
    Scram(ScramMechanism),
    /// Credential slot for an operator-supplied mechanism
    Credential,
}

impl EntryKind {
    pub fn of(name: &str) -> Self {
        if is_quota_config(name) {
            EntryKind::Quota
        } else if let Some(mechanism) = ScramMechanism::from_mechanism_name(name) {
            EntryKind::Scram(mechanism)
        } else {
            EntryKind::Credential
        }
    }

    /// Credential algorithm summary, only known for SCRAM entries
    pub fn details(&self) -> Option<String> {
        match self {
            EntryKind::Scram(m) => Some(format!(
                "{} / {}, min {} iterations",
                m.hash_algorithm(),
                m.mac_algorithm(),
                m.min_iterations()
            )),
            EntryKind::Quota | EntryKind::Credential => None,
        }
    }
}

/// Result of a single `is_quota_config` lookup
#[derive(Debug, Clone, Serialize)]
pub struct QuotaCheck {
    pub name: String,
    pub quota_config: bool,
}

impl QuotaCheck {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let quota_config = is_quota_config(&name);
        Self { name, quota_config }
    }
}

/// Format a schema according to the specified format
pub fn format_schema(def: &ConfigDef, format: OutputFormat, no_color: bool) -> String {
    match format {
        OutputFormat::Table => table::format_schema_table(def, no_color),
        OutputFormat::Json => json::format_json("configs", def.keys()),
        OutputFormat::Simple => simple::format_schema_simple(def, no_color),
    }
}

/// Format resolved override values according to the specified format
pub fn format_parsed(parsed: &ParsedConfig, format: OutputFormat, no_color: bool) -> String {
    match format {
        OutputFormat::Table => table::format_parsed_table(parsed, no_color),
        OutputFormat::Json => json::format_json("values", parsed.entries()),
        OutputFormat::Simple => simple::format_parsed_simple(parsed, no_color),
    }
}

/// Format membership checks according to the specified format
pub fn format_checks(checks: &[QuotaCheck], format: OutputFormat, no_color: bool) -> String {
    match format {
        OutputFormat::Json => json::format_json("checks", checks),
        OutputFormat::Table | OutputFormat::Simple => simple::format_checks_simple(checks, no_color),
    }
}
