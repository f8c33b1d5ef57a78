// src/columns.rs

//! Logical column resolution
//!
//! Source CSVs name the same logical field inconsistently ("CPU Model",
//! "Processor", "CPU"). Resolution first looks for an exact normalized
//! match, then falls back to prefix/containment matching so minor header
//! drift does not break the run. Absence is an `Option`, not an error;
//! the caller decides whether a missing column is fatal.

use crate::ingest::normalize_header;

/// Resolve a logical field to one of the normalized headers present.
///
/// `candidates` are human-readable names in priority order, most preferred
/// first. Pass 1 normalizes each candidate and looks for an exact header
/// match. Pass 2 scans headers in source order and returns the first one
/// that equals, starts with, or contains (in either direction) any
/// normalized candidate.
pub fn resolve_column(headers: &[String], candidates: &[&str]) -> Option<String> {
    let normalized: Vec<String> = candidates.iter().map(|c| normalize_header(c)).collect();

    for cand in &normalized {
        if headers.iter().any(|h| h == cand) {
            return Some(cand.clone());
        }
    }

    for header in headers {
        for cand in &normalized {
            if header == cand
                || header.starts_with(cand.as_str())
                || header.contains(cand.as_str())
                || cand.contains(header.as_str())
            {
                return Some(header.clone());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_wins() {
        let h = headers(&["cpu_model", "cpu"]);
        assert_eq!(
            resolve_column(&h, &["CPU Model", "CPU", "Processor"]),
            Some("cpu_model".to_string())
        );
    }

    #[test]
    fn test_exact_match_respects_candidate_priority() {
        let h = headers(&["cpu", "cpu_model"]);
        // "CPU Model" is the preferred candidate, so it wins even though
        // "cpu" appears first in the header list.
        assert_eq!(
            resolve_column(&h, &["CPU Model", "CPU"]),
            Some("cpu_model".to_string())
        );
    }

    #[test]
    fn test_prefix_fallback() {
        let h = headers(&["model_name", "vendor"]);
        assert_eq!(
            resolve_column(&h, &["Model"]),
            Some("model_name".to_string())
        );
    }

    #[test]
    fn test_containment_fallback_either_direction() {
        // Header "processor_name" is not an exact or prefix match for any
        // candidate, but candidate "processor" is a prefix of it.
        let h = headers(&["processor_name"]);
        assert_eq!(
            resolve_column(&h, &["CPU Model", "CPU", "Processor"]),
            Some("processor_name".to_string())
        );
        // Candidate contained inside a longer header.
        let h = headers(&["server_cpu_model"]);
        assert_eq!(
            resolve_column(&h, &["CPU Model"]),
            Some("server_cpu_model".to_string())
        );
        // And the reverse: header shorter than the candidate.
        let h = headers(&["release"]);
        assert_eq!(
            resolve_column(&h, &["Supported Releases", "Releases"]),
            Some("release".to_string())
        );
    }

    #[test]
    fn test_not_found_is_none() {
        let h = headers(&["serial_number", "rack"]);
        assert_eq!(resolve_column(&h, &["CPU Model", "Processor"]), None);
    }

    #[test]
    fn test_empty_headers() {
        assert_eq!(resolve_column(&[], &["Model"]), None);
    }
}
