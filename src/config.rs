// src/config.rs

//! Run configuration
//!
//! Everything a run needs travels in one explicit `ReportConfig` handed to
//! the pipeline; there is no ambient global state. The CLI layer builds
//! this from arguments, tests build it directly.

use std::path::{Path, PathBuf};

use crate::classify::DEFAULT_TARGET_MARKER;

/// Configuration for a single report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Base directory: inventory discovery root and default output location.
    pub base_dir: PathBuf,
    /// Explicit HCL export path; bypasses discovery when set.
    pub hcl_path: Option<PathBuf>,
    /// Directory scanned for a `Systems*.csv` export (defaults to base_dir).
    pub hcl_dir: Option<PathBuf>,
    /// Explicit inventory path; bypasses discovery when set.
    pub inventory_path: Option<PathBuf>,
    /// Release marker whose presence classifies an entry as OK.
    pub target_marker: String,
    /// Optional banner image embedded at the top of the report.
    pub banner_path: Option<PathBuf>,
    /// Output HTML path; a dated default under base_dir when unset.
    pub output_path: Option<PathBuf>,
    /// Optional JSON dataset export path.
    pub json_path: Option<PathBuf>,
    /// Attribution shown in the report footer.
    pub generated_by: Option<String>,
}

impl ReportConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> ReportConfig {
        ReportConfig {
            base_dir: base_dir.into(),
            hcl_path: None,
            hcl_dir: None,
            inventory_path: None,
            target_marker: DEFAULT_TARGET_MARKER.to_string(),
            banner_path: None,
            output_path: None,
            json_path: None,
            generated_by: None,
        }
    }

    /// Directory scanned for the HCL export.
    pub fn hcl_dir(&self) -> &Path {
        self.hcl_dir.as_deref().unwrap_or(&self.base_dir)
    }

    /// Output path, defaulting to a dated filename under the base directory.
    pub fn output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            let stamp = chrono::Local::now().format("%Y%m%d");
            self.base_dir
                .join(format!("vcf9_cpu_support_report_{stamp}.html"))
        })
    }
}
