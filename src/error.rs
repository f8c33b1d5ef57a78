// src/error.rs

//! Error types for the report pipeline
//!
//! Only fatal configuration problems are errors: the HCL source missing,
//! unparseable, or lacking required columns. Inventory trouble is a
//! degraded-mode warning handled locally, and absent columns or files are
//! signalled with `Option`, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a report run
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No HCL export could be located
    #[error("No HCL export found (looked for Systems*.csv in {dir})")]
    HclNotFound { dir: PathBuf },

    /// The HCL export exists but no delimiter candidate produced rows
    #[error("Could not parse HCL export '{path}': no delimiter yields usable rows")]
    HclUnparseable { path: PathBuf },

    /// Required logical columns could not be resolved in the HCL export
    #[error("Required HCL columns not found: {}. Headers present: {}",
        missing.join(", "),
        headers.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        headers: Vec<String>,
    },
}
