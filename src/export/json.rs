//! JSON Export functionality
//!
//! Dumps the in-memory state as a versioned snapshot. Snapshots are for
//! reading elsewhere; nothing loads them back into a store.

use crate::error::BudgetResult;
use crate::models::{Budget, Money};
use crate::store::BudgetState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Full state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All budgets in display order, sentinels last
    pub budgets: Vec<Budget>,

    /// Aggregates at export time
    pub metadata: SnapshotMetadata,
}

/// Aggregates recorded alongside the budgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Number of user-created budgets
    pub budget_count: usize,

    /// Expenses across all budgets, Total's ledger included
    pub expense_count: usize,

    /// Ceiling of the Total card
    pub combined_limit: Money,

    /// Spent according to the Total ledger
    pub total_spent: Money,

    /// Spent summed over the other budgets
    pub derived_total: Money,
}

impl Snapshot {
    /// Capture the current state
    pub fn from_state(state: &BudgetState) -> Self {
        let metadata = SnapshotMetadata {
            budget_count: state.user_budgets().count(),
            expense_count: state.expense_count(),
            combined_limit: state.combined_limit(),
            total_spent: state.total().map(Budget::spent).unwrap_or_default(),
            derived_total: state.derived_total(),
        };

        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budgets: state.budgets().to_vec(),
            metadata,
        }
    }
}

/// Write the state as JSON
pub fn export_json<W: Write>(state: &BudgetState, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let snapshot = Snapshot::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)?;
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)?;
    }
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{reduce, BudgetAction};

    #[test]
    fn test_snapshot_metadata() {
        let state = reduce(&BudgetState::new(), &BudgetAction::add_budget("Food", "100"));
        let food = state.find("Food").unwrap().id;
        let state = reduce(&state, &BudgetAction::add_expense("Lunch", Money::from_units(12), food));

        let snapshot = Snapshot::from_state(&state);
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.budgets.len(), 3);
        assert_eq!(snapshot.metadata.budget_count, 1);
        assert_eq!(snapshot.metadata.expense_count, 2);
        assert_eq!(snapshot.metadata.total_spent, Money::from_units(12));
        assert_eq!(snapshot.metadata.derived_total, Money::from_units(12));
    }

    #[test]
    fn test_export_json() {
        let state = reduce(&BudgetState::new(), &BudgetAction::add_budget("Food", "100"));
        let mut buffer = Vec::new();
        export_json(&state, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["budgets"][0]["name"], "Food");
        assert_eq!(value["budgets"][0]["limit"], 10000);
        assert_eq!(value["budgets"][0]["card_variant"], "regular");
        assert_eq!(value["budgets"][2]["card_variant"], "total");
    }
}
