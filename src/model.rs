// src/model.rs

//! Report data model
//!
//! All entities are derived in one pass from the source CSVs and never
//! mutated afterwards. `HclEntry` carries its readiness verdict from load
//! time; `ReportRow` is the reconciled view consumed by the renderer and
//! the JSON export.

use serde::Serialize;

use crate::classify::{SupportStatus, Vendor};

/// One row of the hardware compatibility list, enriched at load time.
#[derive(Debug, Clone, Serialize)]
pub struct HclEntry {
    pub model: String,
    pub cpu_model: String,
    pub code_name: String,
    pub supported_releases: String,
    pub status: SupportStatus,
    pub vendor: Vendor,
}

/// One host from the inventory export, raw.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryEntry {
    pub name: String,
    pub model: String,
    pub cpu_model: String,
}

/// An inventory host reconciled against the HCL (or, absent an inventory,
/// a direct projection of an HCL entry with an empty name).
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub model: String,
    pub cpu_model: String,
    pub code_name: String,
    pub supported_releases: String,
    pub status: SupportStatus,
}

/// OK/Blocked tallies for a set of classified rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub ok: usize,
    pub blocked: usize,
}

impl StatusCounts {
    pub fn tally(statuses: impl IntoIterator<Item = SupportStatus>) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for status in statuses {
            match status {
                SupportStatus::Ok => counts.ok += 1,
                SupportStatus::Blocked => counts.blocked += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.ok + self.blocked
    }

    /// Percentage of OK rows, formatted to one decimal place.
    /// An empty set reads as 0.0% rather than dividing by zero.
    pub fn percent_ok(&self) -> String {
        let total = self.total().max(1);
        format!("{:.1}%", self.ok as f64 / total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let counts = StatusCounts::tally([
            SupportStatus::Ok,
            SupportStatus::Blocked,
            SupportStatus::Ok,
        ]);
        assert_eq!(counts, StatusCounts { ok: 2, blocked: 1 });
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_percent_ok() {
        let counts = StatusCounts { ok: 1, blocked: 2 };
        assert_eq!(counts.percent_ok(), "33.3%");
        assert_eq!(StatusCounts::default().percent_ok(), "0.0%");
    }
}
