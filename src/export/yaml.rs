//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use crate::error::BudgetResult;
use crate::export::json::Snapshot;
use crate::store::BudgetState;
use std::io::Write;

/// Write the state as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let snapshot = Snapshot::from_state(state);

    writeln!(writer, "# budget-cards snapshot")?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &snapshot)?;

    Ok(())
}
