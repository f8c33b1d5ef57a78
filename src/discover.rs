// src/discover.rs

//! Input file discovery
//!
//! Exports land in shared folders under operator-chosen names ("Systems
//! with 3rd Gen CPUs.csv", "Sep 2025 Host Inventory.csv"), so discovery
//! matches on space-stripped lowercase names. Files are considered in
//! sorted name order for determinism; a missing directory means "not
//! found", not an error.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Sorted file names of a directory, or empty when it cannot be listed.
fn sorted_file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Find the HCL export: the first `Systems*.csv` in `dir`, tolerating
/// spaces in the file name.
pub fn find_hcl_file(dir: &Path) -> Option<PathBuf> {
    for name in sorted_file_names(dir) {
        let squashed = name.to_lowercase().replace(' ', "");
        if squashed.starts_with("systems") && squashed.ends_with(".csv") {
            let path = dir.join(&name);
            debug!(file = %path.display(), "hcl export discovered");
            return Some(path);
        }
    }
    None
}

/// Find a host inventory CSV: name contains "host" and "inventory"
/// (accepting the common typo "invenotry"), first search dir wins.
pub fn find_inventory_file(search_dirs: &[&Path]) -> Option<PathBuf> {
    for dir in search_dirs {
        for name in sorted_file_names(dir) {
            let lower = name.to_lowercase();
            if !lower.ends_with(".csv") {
                continue;
            }
            let squashed = lower.replace(' ', "");
            if squashed.contains("host")
                && (squashed.contains("inventory") || squashed.contains("invenotry"))
            {
                let path = dir.join(&name);
                debug!(file = %path.display(), "inventory export discovered");
                return Some(path);
            }
        }
    }
    None
}
