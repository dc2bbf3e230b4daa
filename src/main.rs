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

use anyhow::Context;
use clap::Parser;
use colored::{control, Colorize};
use quota_configs::cli::{collect_overrides, Args, SchemaArg};
use quota_configs::config_def::ConfigDef;
use quota_configs::mechanisms::{MechanismProvider, ScramMechanisms, StaticMechanisms};
use quota_configs::output::{format_checks, format_parsed, format_schema, QuotaCheck};
use quota_configs::quota::{client_configs, user_configs_with};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    // Disable colors if requested
    if args.no_color {
        control::set_override(false);
    }

    // Membership checks need no schema
    if !args.check.is_empty() {
        let checks: Vec<QuotaCheck> = args.check.iter().map(QuotaCheck::new).collect();
        println!("{}", format_checks(&checks, args.format, args.no_color));
        return if checks.iter().all(|c| c.quota_config) {
            ExitCode::from(0)
        } else {
            ExitCode::from(1)
        };
    }

    let def = match build_schema(&args) {
        Ok(def) => def,
        Err(e) => {
            print_error(&format!("{:#}", e), args.no_color);
            return ExitCode::from(2);
        }
    };

    // Override validation
    if !args.overrides.is_empty() {
        let parsed = collect_overrides(&args.overrides).and_then(|overrides| def.parse(&overrides));
        return match parsed.context("Invalid override") {
            Ok(parsed) => {
                println!("{}", format_parsed(&parsed, args.format, args.no_color));
                ExitCode::from(0)
            }
            Err(e) => {
                print_error(&format!("{:#}", e), args.no_color);
                ExitCode::from(1)
            }
        };
    }

    println!("{}", format_schema(&def, args.format, args.no_color));
    ExitCode::from(0)
}

/// Logs go to stderr so JSON output stays clean; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_schema(args: &Args) -> anyhow::Result<ConfigDef> {
    match args.schema {
        SchemaArg::Client => client_configs().context("Failed to build client schema"),
        SchemaArg::User => {
            let provider: Box<dyn MechanismProvider> = if args.mechanism.is_empty() {
                Box::new(ScramMechanisms::new())
            } else {
                Box::new(StaticMechanisms::new(args.mechanism.iter().cloned()))
            };
            tracing::debug!(provider = provider.name(), "building user schema");
            user_configs_with(provider.as_ref()).context("Failed to build user schema")
        }
    }
}

/// Print a formatted error message
fn print_error(error: &str, no_color: bool) {
    if no_color {
        eprintln!("Error: {}", error);
    } else {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }
}
