// src/pipeline.rs

//! End-to-end dataset assembly
//!
//! One pass: locate the sources, ingest them, derive the classified HCL
//! entries, reconcile the inventory, and tally statuses. The result is a
//! self-contained `ReportDataset`; rendering and export layers consume it
//! without reaching back into the pipeline.
//!
//! Only the HCL side can fail the run. Inventory trouble degrades to an
//! HCL-only projection with a warning, per the conservative-for-planning
//! policy.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::discover::{find_hcl_file, find_inventory_file};
use crate::error::{Error, Result};
use crate::hcl::load_hcl_entries;
use crate::ingest::load_csv;
use crate::inventory::load_inventory_entries;
use crate::model::{HclEntry, InventoryEntry, ReportRow, StatusCounts};
use crate::reconcile::reconcile;

/// Everything a run produces: classified HCL entries, reconciled rows,
/// and status tallies at both levels.
#[derive(Debug, Serialize)]
pub struct ReportDataset {
    pub target_marker: String,
    pub entries: Vec<HclEntry>,
    pub rows: Vec<ReportRow>,
    pub hcl_counts: StatusCounts,
    pub inventory_counts: StatusCounts,
}

/// Build the reconciled dataset for one run.
pub fn build_dataset(config: &ReportConfig) -> Result<ReportDataset> {
    let hcl_path = match &config.hcl_path {
        Some(path) => path.clone(),
        None => find_hcl_file(config.hcl_dir()).ok_or_else(|| Error::HclNotFound {
            dir: config.hcl_dir().to_path_buf(),
        })?,
    };

    let hcl_table = load_csv(&hcl_path)?;
    if hcl_table.is_empty() {
        return Err(Error::HclUnparseable { path: hcl_path });
    }
    let entries = load_hcl_entries(&hcl_table, &config.target_marker)?;
    info!(
        file = %hcl_path.display(),
        entries = entries.len(),
        "hcl export loaded"
    );

    let inventory = load_inventory(config);
    let rows = reconcile(&entries, inventory.as_deref());

    let hcl_counts = StatusCounts::tally(entries.iter().map(|e| e.status));
    let inventory_counts = StatusCounts::tally(rows.iter().map(|r| r.status));

    Ok(ReportDataset {
        target_marker: config.target_marker.clone(),
        entries,
        rows,
        hcl_counts,
        inventory_counts,
    })
}

/// Load the inventory when one is available and resolvable.
///
/// `None` means "reconcile in degraded mode"; every failure path here
/// warns instead of erroring.
fn load_inventory(config: &ReportConfig) -> Option<Vec<InventoryEntry>> {
    let path = match &config.inventory_path {
        Some(path) => path.clone(),
        None => {
            let found = find_inventory_file(&[config.base_dir.as_path()]);
            if found.is_none() {
                warn!("no host inventory found; report will omit server names");
            }
            found?
        }
    };

    let table = match load_csv(&path) {
        Ok(table) => table,
        Err(err) => {
            warn!(file = %path.display(), %err, "could not read host inventory");
            return None;
        }
    };
    if table.is_empty() {
        warn!(
            file = %path.display(),
            "could not parse host inventory; report will omit server names"
        );
        return None;
    }

    let entries = load_inventory_entries(&table);
    if entries.is_none() {
        warn!(
            file = %path.display(),
            headers = %table.headers.join(", "),
            "inventory columns unresolvable; report will omit server names"
        );
    }
    entries
}
