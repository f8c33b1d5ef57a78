// src/inventory.rs

//! Host inventory loading
//!
//! The inventory is optional input: when the export is missing, empty, or
//! its Name/Model/CPU columns cannot be resolved, the caller falls back to
//! an HCL-only projection instead of failing the run. Absence is therefore
//! `None`, never an error.

use crate::columns::resolve_column;
use crate::ingest::CsvTable;
use crate::model::InventoryEntry;

const NAME_CANDIDATES: &[&str] = &["Name", "Hostname", "Host Name"];
const MODEL_CANDIDATES: &[&str] = &["Model"];
const CPU_CANDIDATES: &[&str] = &["CPU Model", "Processor"];

/// Derive inventory entries from a parsed table.
///
/// Returns `None` when the table is empty or any required column is
/// unresolvable; reconciliation then degrades gracefully.
pub fn load_inventory_entries(table: &CsvTable) -> Option<Vec<InventoryEntry>> {
    if table.is_empty() {
        return None;
    }
    let name_col = resolve_column(&table.headers, NAME_CANDIDATES)?;
    let model_col = resolve_column(&table.headers, MODEL_CANDIDATES)?;
    let cpu_col = resolve_column(&table.headers, CPU_CANDIDATES)?;

    let entries = table
        .rows
        .iter()
        .map(|row| {
            let get = |col: &String| row.get(col).cloned().unwrap_or_default();
            InventoryEntry {
                name: get(&name_col),
                model: get(&model_col),
                cpu_model: get(&cpu_col),
            }
        })
        .collect();
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_load_with_alternate_headers() {
        let t = table(
            &["hostname", "model", "processor"],
            &[&["esx-prod-01", "Dell R750", "Intel Xeon Gold 6338 @ 2.0 GHz"]],
        );
        let entries = load_inventory_entries(&t).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "esx-prod-01");
        assert_eq!(entries[0].model, "Dell R750");
    }

    #[test]
    fn test_missing_column_degrades_to_none() {
        let t = table(&["hostname", "model"], &[&["esx-01", "Dell R750"]]);
        assert!(load_inventory_entries(&t).is_none());
    }

    #[test]
    fn test_empty_table_degrades_to_none() {
        assert!(load_inventory_entries(&CsvTable::default()).is_none());
    }
}
