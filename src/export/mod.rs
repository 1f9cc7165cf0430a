//! Snapshot export
//!
//! Read-only dumps of the in-memory state:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: full snapshot, machine-readable
//! - YAML: full snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::BudgetResult;
use crate::store::BudgetState;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, Snapshot, SnapshotMetadata, SNAPSHOT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON snapshot
    Json,
    /// YAML snapshot
    Yaml,
    /// CSV, expenses only
    Csv,
}

/// Write `state` to `writer` in `format`
pub fn export_state<W: Write>(state: &BudgetState, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_json(state, writer, true),
        ExportFormat::Yaml => export_yaml(state, writer),
        ExportFormat::Csv => export_expenses_csv(state, writer),
    }
}
