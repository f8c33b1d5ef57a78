// src/hcl.rs

//! HCL dataset loading
//!
//! Resolves the logical columns of a parsed compatibility-list export and
//! derives one classified `HclEntry` per data row. Model, CPU model, and
//! supported releases are required; a missing one is a fatal configuration
//! error reported with the headers actually found. Code name is optional
//! and coerces to empty.

use crate::classify::{Vendor, classify_support};
use crate::columns::resolve_column;
use crate::error::{Error, Result};
use crate::ingest::CsvTable;
use crate::model::HclEntry;

/// Candidate header names for each logical HCL column, preferred first.
const MODEL_CANDIDATES: &[&str] = &["Model", "Server Model", "Product", "Model Name"];
const CPU_CANDIDATES: &[&str] = &["CPU Model", "CPU", "Processor"];
const CODE_NAME_CANDIDATES: &[&str] = &["Code Name", "Codename"];
const RELEASES_CANDIDATES: &[&str] = &[
    "Supported Releases",
    "Supported versions",
    "Releases",
    "SupportedRelease",
];

/// Derive classified HCL entries from a parsed table.
pub fn load_hcl_entries(table: &CsvTable, target_marker: &str) -> Result<Vec<HclEntry>> {
    let model_col = resolve_column(&table.headers, MODEL_CANDIDATES);
    let cpu_col = resolve_column(&table.headers, CPU_CANDIDATES);
    let code_col = resolve_column(&table.headers, CODE_NAME_CANDIDATES);
    let releases_col = resolve_column(&table.headers, RELEASES_CANDIDATES);

    let missing: Vec<String> = [
        ("Model", &model_col),
        ("CPU Model", &cpu_col),
        ("Supported Releases", &releases_col),
    ]
    .iter()
    .filter(|(_, col)| col.is_none())
    .map(|(label, _)| label.to_string())
    .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns {
            missing,
            headers: table.headers.clone(),
        });
    }
    let model_col = model_col.unwrap();
    let cpu_col = cpu_col.unwrap();
    let releases_col = releases_col.unwrap();

    let entries = table
        .rows
        .iter()
        .map(|row| {
            let get = |col: &str| row.get(col).cloned().unwrap_or_default();
            let model = get(&model_col);
            let supported_releases = get(&releases_col);
            let status = classify_support(&supported_releases, target_marker);
            let vendor = Vendor::from_model(&model);
            HclEntry {
                cpu_model: get(&cpu_col),
                code_name: code_col.as_deref().map(get).unwrap_or_default(),
                supported_releases,
                status,
                vendor,
                model,
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SupportStatus;
    use crate::ingest::RawRow;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let rows = rows
            .iter()
            .map(|cells| {
                let mut row = RawRow::new();
                for (h, c) in headers.iter().zip(cells.iter()) {
                    row.insert(h.clone(), c.to_string());
                }
                row
            })
            .collect();
        CsvTable { rows, headers }
    }

    #[test]
    fn test_entries_classified_at_load() {
        let t = table(
            &["model", "cpu_model", "code_name", "supported_releases"],
            &[
                &["Dell R750", "Intel Xeon Gold 6338", "Ice Lake", "ESXi 8.0, ESXi 9.0"],
                &["Cisco UCS C220 M4", "Intel Xeon E5-2680 v4", "Broadwell", "ESXi 8.0"],
            ],
        );
        let entries = load_hcl_entries(&t, "ESXi 9.0").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, SupportStatus::Ok);
        assert_eq!(entries[0].vendor, Vendor::Dell);
        assert_eq!(entries[1].status, SupportStatus::Blocked);
        assert_eq!(entries[1].vendor, Vendor::Cisco);
    }

    #[test]
    fn test_code_name_optional() {
        let t = table(
            &["model", "cpu_model", "supported_releases"],
            &[&["HPE DL380", "Xeon 6330", "ESXi 9.0"]],
        );
        let entries = load_hcl_entries(&t, "ESXi 9.0").unwrap();
        assert_eq!(entries[0].code_name, "");
    }

    #[test]
    fn test_missing_required_columns_fatal() {
        let t = table(&["model", "rack_location"], &[&["Dell R750", "A-12"]]);
        let err = load_hcl_entries(&t, "ESXi 9.0").unwrap_err();
        match err {
            Error::MissingColumns { missing, headers } => {
                assert_eq!(missing, vec!["CPU Model", "Supported Releases"]);
                assert_eq!(headers, vec!["model", "rack_location"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_fuzzy_column_resolution() {
        let t = table(
            &["server_model", "processor_name", "releases"],
            &[&["Lenovo SR650", "Xeon 8358", "ESXi 9.0"]],
        );
        let entries = load_hcl_entries(&t, "ESXi 9.0").unwrap();
        assert_eq!(entries[0].model, "Lenovo SR650");
        assert_eq!(entries[0].cpu_model, "Xeon 8358");
        assert_eq!(entries[0].supported_releases, "ESXi 9.0");
    }
}
