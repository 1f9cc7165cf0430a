//! Budget store
//!
//! [`reduce`] is a pure transition function over [`BudgetState`];
//! [`BudgetStore`] is the single owner of the live state for a session. It
//! applies one action at a time and journals what each action changed.

pub mod action;
pub mod reducer;
pub mod state;

pub use action::{AddBudget, AddExpense, BudgetAction, DeleteBudget, DeleteExpense};
pub use reducer::reduce;
pub use state::BudgetState;

use crate::audit::{AuditEntry, AuditLogger, EntityType};

/// Owns the budget state and applies actions to it
#[derive(Debug, Default)]
pub struct BudgetStore {
    state: BudgetState,
    journal: Vec<AuditEntry>,
    audit_log: Option<AuditLogger>,
}

impl BudgetStore {
    /// Create a store holding only the two sentinel budgets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that also appends its journal to an audit log file
    pub fn with_audit_log(logger: AuditLogger) -> Self {
        Self {
            audit_log: Some(logger),
            ..Self::default()
        }
    }

    /// The current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// The audit log this store appends to, if enabled
    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit_log.as_ref()
    }

    /// Everything this store has changed, oldest first
    pub fn history(&self) -> &[AuditEntry] {
        &self.journal
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: BudgetAction) -> bool {
        let next = reduce(&self.state, &action);
        if next == self.state {
            tracing::debug!(action = action.kind(), "action left state unchanged");
            return false;
        }

        let entries = journal_entries(&self.state, &next);
        tracing::info!(
            action = action.kind(),
            changes = entries.len(),
            "state updated"
        );

        if let Some(logger) = &self.audit_log {
            if let Err(e) = logger.log_batch(&entries) {
                tracing::warn!(path = %logger.path().display(), "failed to write audit log: {}", e);
            }
        }

        self.journal.extend(entries);
        self.state = next;
        true
    }
}

/// Describe the difference between two states as audit entries: removed
/// budgets, removed expenses, then created budgets and created expenses.
fn journal_entries(before: &BudgetState, after: &BudgetState) -> Vec<AuditEntry> {
    let mut entries = Vec::new();

    for old in before.budgets() {
        match after.get(old.id) {
            None => entries.push(AuditEntry::delete(
                EntityType::Budget,
                old.id.to_string(),
                Some(old.name.clone()),
                old,
            )),
            Some(new) => {
                for expense in old.expenses.iter().filter(|e| new.expense(e.id).is_none()) {
                    entries.push(AuditEntry::delete(
                        EntityType::Expense,
                        expense.id.to_string(),
                        Some(format!("{} in {}", expense.description, old.name)),
                        expense,
                    ));
                }
            }
        }
    }

    for new in after.budgets() {
        let old = before.get(new.id);
        if old.is_none() {
            entries.push(AuditEntry::create(
                EntityType::Budget,
                new.id.to_string(),
                Some(new.name.clone()),
                new,
            ));
        }

        for expense in new
            .expenses
            .iter()
            .filter(|e| old.map_or(true, |o| o.expense(e.id).is_none()))
        {
            entries.push(AuditEntry::create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(format!("{} in {}", expense.description, new.name)),
                expense,
            ));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{BudgetId, Money};
    use tempfile::TempDir;

    #[test]
    fn test_dispatch_updates_state_and_journal() {
        let mut store = BudgetStore::new();
        assert!(store.dispatch(BudgetAction::add_budget("Food", "100")));

        let food = store.state().find("Food").unwrap().id;
        assert!(store.dispatch(BudgetAction::add_expense(
            "Lunch",
            Money::from_units(12),
            food
        )));

        let history = store.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].entity_type, EntityType::Budget);
        assert_eq!(history[0].operation, Operation::Create);
        assert!(history[1..]
            .iter()
            .all(|e| e.entity_type == EntityType::Expense && e.operation == Operation::Create));
        assert_eq!(history[2].entity_name.as_deref(), Some("Lunch in Total"));
    }

    #[test]
    fn test_noop_dispatch_is_not_journaled() {
        let mut store = BudgetStore::new();
        let uncategorized = store.state().uncategorized().unwrap().id;

        assert!(!store.dispatch(BudgetAction::delete_budget(uncategorized)));
        assert!(!store.dispatch(BudgetAction::delete_budget(BudgetId::new())));
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_delete_budget_journals_budget_only() {
        let mut store = BudgetStore::new();
        store.dispatch(BudgetAction::add_budget("Food", "100"));
        let food = store.state().find("Food").unwrap().id;
        store.dispatch(BudgetAction::add_expense("Lunch", Money::from_units(12), food));

        store.dispatch(BudgetAction::delete_budget(food));
        let last = store.history().last().unwrap();
        assert_eq!(last.operation, Operation::Delete);
        assert_eq!(last.entity_type, EntityType::Budget);
        assert_eq!(last.entity_name.as_deref(), Some("Food"));
        assert_eq!(store.history().len(), 4);
    }

    #[test]
    fn test_delete_expense_journaled() {
        let mut store = BudgetStore::new();
        store.dispatch(BudgetAction::add_budget("Food", "100"));
        let food = store.state().find("Food").unwrap().id;
        store.dispatch(BudgetAction::add_expense("Lunch", Money::from_units(12), food));
        let lunch = store.state().get(food).unwrap().expenses[0].id;

        assert!(store.dispatch(BudgetAction::delete_expense(lunch, food)));
        let last = store.history().last().unwrap();
        assert_eq!(last.operation, Operation::Delete);
        assert_eq!(last.entity_id, lunch.to_string());
    }

    #[test]
    fn test_audit_log_receives_entries() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let mut store = BudgetStore::with_audit_log(logger.clone());

        store.dispatch(BudgetAction::add_budget("Food", "100"));
        store.dispatch(BudgetAction::add_budget("Rent", "900"));

        let logged = logger.read_all().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[1].entity_name.as_deref(), Some("Rent"));
    }
}
