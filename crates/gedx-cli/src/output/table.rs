//! Aligned plain-text tables for `--format table`.
//!
//! Widths are counted in characters, so place names such as "Zürich" and the
//! `…` truncation marker line up with ASCII cells.

use std::cmp::Reverse;

/// Columns never shrink below this, or below their header.
const MIN_COLUMN_WIDTH: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Render `rows` under `headers`. Missing cells print as `-`; cells that
/// look numeric are right-aligned.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let floors: Vec<usize> = headers
        .iter()
        .map(|header| width_of(header).max(MIN_COLUMN_WIDTH))
        .collect();
    let mut widths: Vec<usize> = floors
        .iter()
        .enumerate()
        .map(|(column, floor)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| width_of(cell))
                .fold(*floor, usize::max)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, &floors, max_width);
    }

    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| cell(header, *width, false))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    lines.push("-".repeat(total));
    for row in rows {
        lines.push(
            widths
                .iter()
                .enumerate()
                .map(|(column, width)| {
                    let value = row.get(column).map_or("-", String::as_str);
                    cell(value, *width, options.color)
                })
                .collect::<Vec<_>>()
                .join(GAP),
        );
    }
    lines.join("\n")
}

/// Take one character at a time from the widest column still above its floor
/// until the table fits or nothing can shrink.
fn shrink_to(widths: &mut [usize], floors: &[usize], max_width: usize) {
    let mut total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    while total > max_width {
        let widest = widths
            .iter()
            .zip(floors)
            .enumerate()
            .filter(|(_, (width, floor))| width > floor)
            .max_by_key(|(column, (width, _))| (**width, Reverse(*column)))
            .map(|(column, _)| column);
        let Some(column) = widest else {
            break;
        };
        widths[column] -= 1;
        total -= 1;
    }
}

fn cell(value: &str, width: usize, color: bool) -> String {
    let text = clip(value, width);
    let pad = " ".repeat(width.saturating_sub(width_of(&text)));
    let numeric = looks_numeric(&text);
    let text = match severity_color(&text) {
        Some(code) if color => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
        _ => text,
    };
    if numeric {
        format!("{pad}{text}")
    } else {
        format!("{text}{pad}")
    }
}

fn clip(value: &str, width: usize) -> String {
    if width_of(value) <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.starts_with(|ch: char| ch.is_ascii_digit() || matches!(ch, '-' | '+'))
        && trimmed.parse::<f64>().is_ok()
}

/// ANSI color for report flags (`valid`, `known`) and violation severities.
fn severity_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some("32"),
        "warning" => Some("33"),
        "error" | "false" => Some("31"),
        _ => None,
    }
}
