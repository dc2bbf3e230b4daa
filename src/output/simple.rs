/*
 * Copyright (C) 2026 João Sena Ribeiro <sena@smux.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use crate::config_def::{ConfigDef, ConfigKey, ParsedConfig, ParsedEntry, ValueSource};
use crate::output::{EntryKind, QuotaCheck};
use colored::Colorize;

/// Format a schema as simple text (one line per entry)
pub fn format_schema_simple(def: &ConfigDef, no_color: bool) -> String {
    if def.is_empty() {
        return "No configs defined.".to_string();
    }

    def.keys()
        .iter()
        .map(|k| format_key_simple(k, no_color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format resolved values as simple text (one line per entry)
pub fn format_parsed_simple(parsed: &ParsedConfig, no_color: bool) -> String {
    if parsed.entries().is_empty() {
        return "No configs defined.".to_string();
    }

    parsed
        .entries()
        .iter()
        .map(|e| format_entry_simple(e, no_color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format membership checks as simple text
pub fn format_checks_simple(checks: &[QuotaCheck], no_color: bool) -> String {
    checks
        .iter()
        .map(|c| {
            let verdict = if c.quota_config {
                "quota config"
            } else {
                "not a quota config"
            };
            if no_color {
                format!("{}: {}", c.name, verdict)
            } else if c.quota_config {
                format!("{}: {}", c.name.bright_blue(), verdict.green())
            } else {
                format!("{}: {}", c.name.bright_blue(), verdict.red())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_name(name: &str, no_color: bool) -> String {
    if no_color {
        return name.to_string();
    }
    match EntryKind::of(name) {
        EntryKind::Quota => name.bright_blue().to_string(),
        EntryKind::Scram(_) => name.yellow().to_string(),
        EntryKind::Credential => name.magenta().to_string(),
    }
}

fn format_key_simple(key: &ConfigKey, no_color: bool) -> String {
    let default = key
        .default_value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = format!(
        "{} ({}, default: {}, importance: {}): {}",
        colorize_name(&key.name, no_color),
        key.config_type,
        default,
        key.importance,
        key.documentation
    );

    match EntryKind::of(&key.name).details() {
        Some(details) => format!("{} [{}]", line, details),
        None => line,
    }
}

fn format_entry_simple(entry: &ParsedEntry, no_color: bool) -> String {
    let value = entry
        .value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());

    let source = if no_color {
        entry.source.to_string()
    } else {
        match entry.source {
            ValueSource::Override => entry.source.to_string().green().to_string(),
            ValueSource::Default => entry.source.to_string(),
            ValueSource::Unset => entry.source.to_string().dimmed().to_string(),
        }
    };

    format!("{} = {} [{}]", colorize_name(&entry.name, no_color), value, source)
}
