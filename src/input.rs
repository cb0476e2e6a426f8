//! Service-ID input files: plain newline lists or single-column CSV.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Header cell skipped in CSV input, compared case-insensitively.
const CSV_HEADER: &str = "service_id";

/// Load service IDs from `path`.
///
/// A `.csv` file contributes the first field of every row, skipping blank
/// rows and a `service_id` header; any other file contributes one trimmed,
/// non-empty ID per line.
pub fn load_service_ids<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let is_csv = path.extension().is_some_and(|ext| ext == "csv");
    let reader = BufReader::new(File::open(path)?);

    let mut service_ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let value = if is_csv {
            line.split(',').next().unwrap_or("").trim()
        } else {
            line.trim()
        };

        if value.is_empty() || (is_csv && value.eq_ignore_ascii_case(CSV_HEADER)) {
            continue;
        }
        service_ids.push(value.to_string());
    }

    Ok(service_ids)
}
