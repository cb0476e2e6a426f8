//! Grid-formatted results table.
//!
//! Renders the outcome map as a bordered grid, one row per service. Failure
//! rows carry `Error` in the item-key column, the error description in the
//! value column, and `N/A` for the dictionary ID.

use crate::types::UpdateOutcome;
use indexmap::IndexMap;

const HEADERS: [&str; 5] = [
    "Service ID",
    "Service Name",
    "Item Key",
    "Item Value",
    "Dictionary ID",
];

const MISSING: &str = "N/A";

/// Render the results map as a grid table, rows in map order.
pub fn render(results: &IndexMap<String, UpdateOutcome>) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|(service_id, outcome)| match outcome {
            UpdateOutcome::Updated { service_name, item } => [
                service_id.clone(),
                service_name.clone(),
                item.item_key.clone(),
                item.item_value.clone(),
                item.dictionary_id
                    .clone()
                    .unwrap_or_else(|| MISSING.to_string()),
            ],
            UpdateOutcome::Failed {
                service_name,
                error,
            } => [
                service_id.clone(),
                service_name.clone(),
                "Error".to_string(),
                error.clone(),
                MISSING.to_string(),
            ],
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (width, header) in widths.iter_mut().zip(HEADERS.iter()) {
        *width = header.len();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut table = String::new();
    table.push_str(&border(&widths, "-"));
    table.push_str(&format_row(&HEADERS.map(String::from), &widths));
    table.push_str(&border(&widths, "="));
    for row in &rows {
        table.push_str(&format_row(row, &widths));
        table.push_str(&border(&widths, "-"));
    }
    table
}

fn border(widths: &[usize; 5], fill: &str) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&fill.repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths.iter()) {
        line.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    line.push('\n');
    line
}
