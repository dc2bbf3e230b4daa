use crate::config_def::{ConfigDef, ParsedConfig, ValueSource};
use crate::output::EntryKind;
use tabled::{builder::Builder, settings::Color, settings::Style, settings::Width, settings::style::HorizontalLine};

const DOC_WIDTH: usize = 60;

/// Format a schema as a pretty table with UTF-8 borders
/// Features:
/// - Double line after header
/// - Quota entries and credential entries colored apart
/// - Documentation wrapped to a fixed width
pub fn format_schema_table(def: &ConfigDef, no_color: bool) -> String {
    if def.is_empty() {
        return "No configs defined.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Name", "Type", "Default", "Importance", "Documentation"]);

    for key in def.keys() {
        builder.push_record([
            key.name.clone(),
            key.config_type.to_string(),
            key.default_value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            key.importance.to_string(),
            match EntryKind::of(&key.name).details() {
                Some(details) => format!("{}\n({})", key.documentation, details),
                None => key.documentation.clone(),
            },
        ]);
    }

    let mut table = builder.build();
    let double_line = HorizontalLine::full('═', '╪', '╞', '╡');
    table.with(Style::rounded().horizontals([(1, double_line)]));

    for row in 1..=def.len() {
        table.modify((row, 4), Width::wrap(DOC_WIDTH));
    }

    if !no_color {
        apply_header_color(&mut table);
        for (i, key) in def.keys().iter().enumerate() {
            table.modify((i + 1, 0), get_kind_color(EntryKind::of(&key.name)));
        }
    }

    table.to_string()
}

/// Format resolved values as a table
pub fn format_parsed_table(parsed: &ParsedConfig, no_color: bool) -> String {
    if parsed.entries().is_empty() {
        return "No configs defined.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Name", "Value", "Source"]);

    for entry in parsed.entries() {
        builder.push_record([
            entry.name.clone(),
            entry
                .value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry.source.to_string(),
        ]);
    }

    let mut table = builder.build();
    let double_line = HorizontalLine::full('═', '╪', '╞', '╡');
    table.with(Style::rounded().horizontals([(1, double_line)]));

    if !no_color {
        apply_header_color(&mut table);
        for (i, entry) in parsed.entries().iter().enumerate() {
            table.modify((i + 1, 0), get_kind_color(EntryKind::of(&entry.name)));
            table.modify((i + 1, 2), get_source_color(entry.source));
        }
    }

    table.to_string()
}

fn apply_header_color(table: &mut tabled::Table) {
    use tabled::settings::object::Rows;

    table.modify(Rows::first(), Color::BOLD);
}

/// Get tabled Color for the name column
fn get_kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Quota => Color::FG_BRIGHT_BLUE,
        EntryKind::Scram(_) => Color::FG_YELLOW,
        EntryKind::Credential => Color::FG_MAGENTA,
    }
}

/// Get tabled Color for where a value came from
fn get_source_color(source: ValueSource) -> Color {
    match source {
        ValueSource::Override => Color::FG_GREEN,
        ValueSource::Default => Color::FG_WHITE,
        ValueSource::Unset => Color::FG_BRIGHT_BLACK,
    }
}
