// src/lib.rs

//! hclreport
//!
//! Builds a hardware-compatibility snapshot for platform upgrade planning
//! from two loosely-structured CSV exports: a hardware compatibility list
//! (HCL) and a host inventory.
//!
//! # Pipeline
//!
//! - Tolerant ingestion: multi-encoding decode, delimiter auto-detection,
//!   header normalization, fuzzy column resolution
//! - Classification: one-sided OK/Blocked verdict per entry based on a
//!   target release marker; vendor derived from model text
//! - Reconciliation: exact (model, CPU) key join with a relaxed substring
//!   fallback; unmatched hosts default to Blocked
//! - Rendering: static HTML report with summary pies and detail tables,
//!   plus an optional JSON dataset export

pub mod classify;
pub mod columns;
pub mod config;
pub mod decode;
pub mod discover;
mod error;
pub mod hcl;
pub mod ingest;
pub mod inventory;
pub mod model;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use classify::{DEFAULT_TARGET_MARKER, SupportStatus, Vendor, classify_support};
pub use config::ReportConfig;
pub use error::{Error, Result};
pub use model::{HclEntry, InventoryEntry, ReportRow, StatusCounts};
pub use pipeline::{ReportDataset, build_dataset};
pub use reconcile::{MatchKey, reconcile};
pub use report::render_report;
