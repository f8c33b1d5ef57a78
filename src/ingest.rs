// src/ingest.rs

//! Delimiter-tolerant CSV ingestion
//!
//! The exports this tool consumes are only nominally CSV: delimiters vary
//! between pipe, comma, semicolon, and tab, and header naming is free text.
//! Parsing therefore tries an explicit, deterministic priority order of
//! delimiters and accepts the first candidate that yields a plausible
//! table. Headers are normalized once at the boundary so that every
//! downstream lookup works on stable keys.
//!
//! Delimiter choice is deliberately not left to a sniffing heuristic:
//! ambiguous files (commas inside free-text fields of a pipe-delimited
//! export) must resolve toward the operator's likely intent, which the
//! fixed priority order encodes.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::decode::decode_text;
use crate::error::Result;

/// One parsed data row: normalized header -> trimmed cell value.
pub type RawRow = HashMap<String, String>;

/// A parsed CSV source: data rows plus the normalized header list in
/// source column order.
#[derive(Debug, Default)]
pub struct CsvTable {
    pub rows: Vec<RawRow>,
    pub headers: Vec<String>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Delimiter candidates when the first line contains a pipe.
const DELIMS_PIPE_FIRST: [u8; 4] = [b'|', b',', b';', b'\t'];
/// Delimiter candidates otherwise.
const DELIMS_COMMA_FIRST: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Normalize a raw header into a lookup key.
///
/// Strips byte-order marks, collapses internal whitespace, trims,
/// lowercases, and replaces spaces with underscores. Idempotent: applying
/// it to its own output is a no-op.
pub fn normalize_header(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|&c| c != '\u{feff}').collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase().replace(' ', "_")
}

/// Load a CSV file, auto-detecting its delimiter.
///
/// Returns an empty table when the file does not exist, is empty, or no
/// delimiter candidate produces usable rows. I/O failures on an existing
/// file propagate as errors.
pub fn load_csv(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Ok(CsvTable::default());
    }
    let raw = std::fs::read(path)?;
    let text = decode_text(&raw);
    if text.is_empty() {
        return Ok(CsvTable::default());
    }

    let first_line = text.lines().next().unwrap_or("");
    let candidates = if first_line.contains('|') {
        DELIMS_PIPE_FIRST
    } else {
        DELIMS_COMMA_FIRST
    };

    for delim in candidates {
        if let Some(table) = parse_with_delimiter(&text, delim) {
            debug!(
                delimiter = %(delim as char),
                file = %path.display(),
                rows = table.rows.len(),
                "csv delimiter accepted"
            );
            return Ok(table);
        }
    }

    // Ultimate fallback: a pipe in the first line is a strong signal even
    // when the earlier acceptance pass rejected every candidate.
    if first_line.contains('|') {
        if let Some(table) = parse_with_delimiter(&text, b'|') {
            return Ok(table);
        }
    }

    Ok(CsvTable::default())
}

/// Parse `text` with a single explicit delimiter.
///
/// Accepts the result only if the header row has more than one non-empty
/// column and at least one data row was produced. Headers that normalize
/// to the empty string are dropped along with their column values.
fn parse_with_delimiter(text: &str, delim: u8) -> Option<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(str::to_string).collect(),
        Err(_) => return None,
    };
    let non_empty = raw_headers.iter().filter(|h| !h.trim().is_empty()).count();
    if non_empty <= 1 {
        return None;
    }

    // (source column index, normalized name) for every kept column.
    let kept: Vec<(usize, String)> = raw_headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let norm = normalize_header(h);
            (!norm.is_empty()).then_some((i, norm))
        })
        .collect();
    if kept.len() <= 1 {
        return None;
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(_) => return None,
        };
        let mut row = RawRow::with_capacity(kept.len());
        for (idx, name) in &kept {
            // Short records pad with empty; extra cells beyond the header
            // are dropped.
            let value = record.get(*idx).unwrap_or("").trim().to_string();
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return None;
    }

    let headers = kept.into_iter().map(|(_, name)| name).collect();
    Some(CsvTable { rows, headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_normalize_header_basic() {
        assert_eq!(normalize_header("CPU Model"), "cpu_model");
        assert_eq!(normalize_header("  Supported   Releases "), "supported_releases");
        assert_eq!(normalize_header("\u{feff}Model"), "model");
    }

    #[test]
    fn test_normalize_header_idempotent() {
        for raw in ["CPU Model", " Code  Name ", "already_normal", ""] {
            let once = normalize_header(raw);
            assert_eq!(normalize_header(&once), once);
        }
    }

    #[test]
    fn test_pipe_delimited_round_trip() {
        let f = write_temp(
            "Model|CPU Model|Supported Releases\n\
             Dell R750|Intel Xeon Gold 6338|ESXi 8.0 ESXi 9.0\n",
        );
        let table = load_csv(f.path()).unwrap();
        assert_eq!(table.headers, vec!["model", "cpu_model", "supported_releases"]);
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row["model"], "Dell R750");
        assert_eq!(row["cpu_model"], "Intel Xeon Gold 6338");
        assert_eq!(row["supported_releases"], "ESXi 8.0 ESXi 9.0");
    }

    #[test]
    fn test_pipe_preferred_over_comma_when_first_line_has_pipe() {
        // Commas inside free text must not win over the pipe format.
        let f = write_temp(
            "Model|CPU Model|Notes\n\
             Dell R650|Xeon 6326|8.x only, check OEM\n",
        );
        let table = load_csv(f.path()).unwrap();
        assert_eq!(table.headers, vec!["model", "cpu_model", "notes"]);
        assert_eq!(table.rows[0]["notes"], "8.x only, check OEM");
    }

    #[test]
    fn test_semicolon_fallback() {
        let f = write_temp("Name;Model;CPU\nesx-01;HPE DL380;Xeon 6330\n");
        let table = load_csv(f.path()).unwrap();
        assert_eq!(table.headers, vec!["name", "model", "cpu"]);
        assert_eq!(table.rows[0]["name"], "esx-01");
    }

    #[test]
    fn test_single_column_rejected() {
        let f = write_temp("just some text\nmore text\n");
        let table = load_csv(f.path()).unwrap();
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let table = load_csv(Path::new("/nonexistent/systems.csv")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_file_yields_empty() {
        let f = write_temp("");
        let table = load_csv(f.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_header_only_rejected() {
        let f = write_temp("Model,CPU Model,Supported Releases\n");
        let table = load_csv(f.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let f = write_temp("Model,CPU,Code Name\nDell R750,Xeon 6338\n");
        let table = load_csv(f.path()).unwrap();
        assert_eq!(table.rows[0]["code_name"], "");
    }

    #[test]
    fn test_empty_headers_dropped() {
        let f = write_temp("Model,,CPU\nDell R750,ignored,Xeon 6338\n");
        let table = load_csv(f.path()).unwrap();
        assert_eq!(table.headers, vec!["model", "cpu"]);
        assert!(!table.rows[0].contains_key(""));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let content = "a,b;c\n1,2;3\n4,5;6\n";
        let f = write_temp(content);
        let first = load_csv(f.path()).unwrap();
        for _ in 0..3 {
            let again = load_csv(f.path()).unwrap();
            assert_eq!(again.headers, first.headers);
            assert_eq!(again.rows.len(), first.rows.len());
        }
    }
}
