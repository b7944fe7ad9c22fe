//! Table display for the resolved configuration.
//!
//! Responsibilities:
//! - Render an `AppConfig` as a bordered two-column table.
//! - Write the table to stdout.
//!
//! Does NOT handle:
//! - Loading configuration (see `rich_table_config`).
//!
//! Invariants:
//! - The password is never printed; a present password renders as `****`.

use std::io::{self, Write};

use rich_table_config::AppConfig;

const NOT_SET: &str = "(not set)";
const MASKED: &str = "****";

/// Render `config` as a table with a `Field`/`Value` header.
pub fn render(config: &AppConfig) -> String {
    let username = config.username().map(sanitize);
    let password = config.password().map(|_| MASKED.to_string());

    let rows = [
        ("Username", username.as_deref().unwrap_or(NOT_SET)),
        ("Password", password.as_deref().unwrap_or(NOT_SET)),
    ];
    render_table(("Field", "Value"), &rows)
}

/// Write the rendered table for `config` to stdout.
pub fn show(config: &AppConfig) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(config).as_bytes())?;
    stdout.flush()
}

fn render_table(header: (&str, &str), rows: &[(&str, &str)]) -> String {
    let key_width = column_width(header.0, rows.iter().map(|row| row.0));
    let value_width = column_width(header.1, rows.iter().map(|row| row.1));
    let border = format!(
        "+{}+{}+\n",
        "-".repeat(key_width + 2),
        "-".repeat(value_width + 2)
    );

    let mut output = String::new();
    output.push_str(&border);
    push_row(&mut output, header, key_width, value_width);
    output.push_str(&border);
    for row in rows {
        push_row(&mut output, *row, key_width, value_width);
    }
    output.push_str(&border);
    output
}

fn column_width<'a>(header: &'a str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.chain([header]).map(display_width).max().unwrap_or(0)
}

fn push_row(
    output: &mut String,
    (key, value): (&str, &str),
    key_width: usize,
    value_width: usize,
) {
    output.push_str(&format!(
        "| {}{} | {}{} |\n",
        key,
        " ".repeat(key_width - display_width(key)),
        value,
        " ".repeat(value_width - display_width(value))
    ));
}

fn display_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Replace control characters so a value cannot break the table layout.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
