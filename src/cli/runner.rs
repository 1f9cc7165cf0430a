//! Script runner
//!
//! Feeds script lines through the same validators the TUI forms use and
//! dispatches the resulting actions to one in-memory store. A failing line is
//! reported with its line number and leaves the state untouched; the runner
//! then carries on with the next line.

use std::io::{BufRead, Write};

use crate::display::{format_budget_cards, format_budget_details, format_history, CurrencyFormat};
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_state;
use crate::models::{Budget, ExpenseId, Money, UNCATEGORIZED_BUDGET_NAME};
use crate::store::{BudgetAction, BudgetState, BudgetStore};
use crate::validation::{
    budget_max_validator, budget_name_validator, expense_amount_validator, string_validator,
    Observable, ValidationCoordinator, Validator,
};

use super::command::{parse_args, ParsedLine, ScriptCommand};
use super::tokenize::split_line;

/// Outcome of a whole script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, including blanks and comments
    pub lines: usize,
    /// Commands that ran successfully
    pub succeeded: usize,
    /// Lines that failed to parse or run
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs script commands against a store
pub struct Runner {
    store: BudgetStore,
    currency: CurrencyFormat,
}

impl Runner {
    pub fn new(store: BudgetStore, currency: CurrencyFormat) -> Self {
        Self { store, currency }
    }

    pub fn store(&self) -> &BudgetStore {
        &self.store
    }

    /// Run every line of `reader`, writing results to `out` and per-line
    /// errors to `err`
    pub fn run_script<R: BufRead, O: Write, E: Write>(
        &mut self,
        reader: R,
        out: &mut O,
        err: &mut E,
    ) -> BudgetResult<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            summary.lines += 1;

            match self.run_line(&line, out) {
                Ok(true) => summary.succeeded += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(line = line_no, error = %e, "script line failed");
                    writeln!(err, "line {}: {}", line_no, e)?;
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            lines = summary.lines,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "script finished"
        );
        Ok(summary)
    }

    /// Run one line. Returns whether a command ran.
    pub fn run_line<O: Write>(&mut self, line: &str, out: &mut O) -> BudgetResult<bool> {
        let args = split_line(line)?;
        match parse_args(&args)? {
            ParsedLine::Empty => Ok(false),
            ParsedLine::Help(text) => {
                write!(out, "{}", text)?;
                Ok(true)
            }
            ParsedLine::Command(command) => {
                self.execute(command, out)?;
                Ok(true)
            }
        }
    }

    /// Execute a parsed command
    pub fn execute<O: Write>(&mut self, command: ScriptCommand, out: &mut O) -> BudgetResult<()> {
        match command {
            ScriptCommand::AddBudget { name, limit } => self.add_budget(name, limit, out),
            ScriptCommand::DeleteBudget { budget } => self.delete_budget(&budget, out),
            ScriptCommand::AddExpense {
                description,
                amount,
                budget,
            } => self.add_expense(description, &amount, budget.as_deref(), out),
            ScriptCommand::DeleteExpense { expense, budget } => {
                self.delete_expense(&expense, &budget, out)
            }
            ScriptCommand::List => {
                write!(out, "{}", format_budget_cards(self.store.state(), &self.currency))?;
                Ok(())
            }
            ScriptCommand::Show { budget } => {
                let state = self.store.state();
                let budget = find_budget(state, &budget)?;
                write!(out, "{}", format_budget_details(budget, state, &self.currency))?;
                Ok(())
            }
            ScriptCommand::Export { format } => export_state(self.store.state(), format, out),
            ScriptCommand::History { all: false } => {
                write!(out, "{}", format_history(self.store.history()))?;
                Ok(())
            }
            ScriptCommand::History { all: true } => {
                let logger = self.store.audit_log().ok_or_else(|| {
                    BudgetError::Config("The audit log is not enabled".to_string())
                })?;
                write!(out, "{}", format_history(&logger.read_all()?))?;
                Ok(())
            }
        }
    }

    fn add_budget<O: Write>(&mut self, name: String, limit: String, out: &mut O) -> BudgetResult<()> {
        validate_fields(&[
            ("name", name.as_str(), budget_name_validator),
            ("limit", limit.as_str(), budget_max_validator),
        ])?;

        self.store.dispatch(BudgetAction::add_budget(name.as_str(), limit.as_str()));

        let created = self
            .store
            .state()
            .user_budgets()
            .filter(|b| b.name == name)
            .last()
            .ok_or_else(|| BudgetError::budget_not_found(name.as_str()))?;
        writeln!(
            out,
            "Created budget '{}' ({}) with limit {}",
            created.name,
            created.id,
            self.currency.amount(created.limit)
        )?;
        Ok(())
    }

    fn delete_budget<O: Write>(&mut self, identifier: &str, out: &mut O) -> BudgetResult<()> {
        let budget = find_budget(self.store.state(), identifier)?;
        let (id, name) = (budget.id, budget.name.clone());

        if !self.store.dispatch(BudgetAction::delete_budget(id)) {
            return Err(BudgetError::Validation(format!(
                "The '{}' budget cannot be deleted",
                name
            )));
        }

        writeln!(out, "Deleted budget '{}' ({})", name, id)?;
        Ok(())
    }

    fn add_expense<O: Write>(
        &mut self,
        description: String,
        amount: &str,
        budget: Option<&str>,
        out: &mut O,
    ) -> BudgetResult<()> {
        validate_fields(&[
            ("description", description.as_str(), string_validator),
            ("amount", amount, expense_amount_validator),
        ])?;
        let amount =
            Money::parse(amount).map_err(|e| BudgetError::Validation(format!("amount: {}", e)))?;

        let target = find_budget(
            self.store.state(),
            budget.unwrap_or(UNCATEGORIZED_BUDGET_NAME),
        )?;
        let (id, name) = (target.id, target.name.clone());

        self.store
            .dispatch(BudgetAction::add_expense(description.as_str(), amount, id));

        writeln!(
            out,
            "Added expense '{}' ({}) to {}",
            description,
            self.currency.amount(amount),
            name
        )?;
        Ok(())
    }

    fn delete_expense<O: Write>(
        &mut self,
        expense: &str,
        budget: &str,
        out: &mut O,
    ) -> BudgetResult<()> {
        let budget = find_budget(self.store.state(), budget)?;
        let expense_id = resolve_expense(budget, expense)?;
        let (budget_id, budget_name) = (budget.id, budget.name.clone());
        let description = budget
            .expense(expense_id)
            .map(|e| e.description.clone())
            .unwrap_or_default();

        self.store
            .dispatch(BudgetAction::delete_expense(expense_id, budget_id));

        writeln!(
            out,
            "Deleted expense '{}' ({}) from {}",
            description, expense_id, budget_name
        )?;
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(BudgetStore::new(), CurrencyFormat::default())
    }
}

fn find_budget<'s>(state: &'s BudgetState, identifier: &str) -> BudgetResult<&'s Budget> {
    state
        .find(identifier)
        .ok_or_else(|| BudgetError::budget_not_found(identifier))
}

/// An expense id, a short `exp-` id, or a 1-based position in the list
fn resolve_expense(budget: &Budget, identifier: &str) -> BudgetResult<ExpenseId> {
    let identifier = identifier.trim();

    let by_position = identifier
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| budget.expenses.get(i));

    by_position
        .or_else(|| budget.expenses.iter().find(|e| e.id.matches(identifier)))
        .map(|e| e.id)
        .ok_or_else(|| {
            BudgetError::expense_not_found(format!("{} in {}", identifier, budget.name))
        })
}

/// Run a form's validators in the bulk regime and collect the messages
fn validate_fields(fields: &[(&'static str, &str, Validator)]) -> BudgetResult<()> {
    let mut coordinator = ValidationCoordinator::new(fields.iter().map(|(label, _, _)| (*label, "")));
    let mut errors: Vec<Option<String>> = vec![None; fields.len()];

    let mut observables: Vec<Observable<'_, &'static str>> = fields
        .iter()
        .zip(errors.iter_mut())
        .map(|((label, value, validator), sink)| Observable::new(*label, value, *validator, sink))
        .collect();

    if coordinator.submit(&mut observables).is_valid() {
        return Ok(());
    }
    drop(observables);

    let messages: Vec<String> = fields
        .iter()
        .zip(&errors)
        .filter_map(|((label, _, _), error)| error.as_ref().map(|m| format!("{}: {}", label, m)))
        .collect();
    Err(BudgetError::Validation(messages.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use std::io::Cursor;

    fn run(script: &str) -> (Runner, RunSummary, String, String) {
        let mut runner = Runner::default();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = runner
            .run_script(Cursor::new(script), &mut out, &mut err)
            .unwrap();
        (
            runner,
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_food_lunch_scenario() {
        let (runner, summary, out, err) = run(
            "add-budget Food 100\n\
             add-expense Lunch 12 --budget Food\n\
             delete-expense 1 --budget Food\n",
        );
        assert!(summary.is_success(), "{}", err);
        assert_eq!(summary.succeeded, 3);
        assert!(out.contains("Created budget 'Food'"));
        assert!(out.contains("Deleted expense 'Lunch'"));

        let state = runner.store().state();
        assert!(state.find("Food").unwrap().expenses.is_empty());
        assert_eq!(state.total().unwrap().expenses.len(), 1);
        assert_eq!(state.total().unwrap().expenses[0].amount, Money::from_units(12));
    }

    #[test]
    fn test_default_budget_is_uncategorized() {
        let (runner, summary, out, _) = run("add-expense Gum 2\n");
        assert!(summary.is_success());
        assert!(out.contains("to Uncategorized"));
        assert_eq!(runner.store().state().uncategorized().unwrap().expenses.len(), 1);
    }

    #[test]
    fn test_validation_failure_leaves_state() {
        let (runner, summary, _, err) = run("add-budget Food 0\nadd-budget \"\" abc\n");
        assert_eq!(summary.failed, 2);
        assert!(err.contains("line 1: Validation error: limit: Must be greater than 0"));
        assert!(err.contains("line 2: Validation error: name: This field is required; limit: Please enter a number"));
        assert_eq!(runner.store().state().budgets().len(), 2);
    }

    #[test]
    fn test_reserved_name_rejected() {
        let (_, summary, _, err) = run("add-budget total 50\n");
        assert_eq!(summary.failed, 1);
        assert!(err.contains("That name is reserved"));
    }

    #[test]
    fn test_sentinel_delete_reported() {
        let (runner, summary, _, err) = run("delete-budget Uncategorized\ndelete-budget Total\n");
        assert_eq!(summary.failed, 2);
        assert!(err.contains("'Uncategorized' budget cannot be deleted"));
        assert_eq!(runner.store().state().budgets().len(), 2);
        assert!(runner.store().history().is_empty());
    }

    #[test]
    fn test_unknown_command_continues() {
        let (runner, summary, _, err) = run("# setup\nfrobnicate\nadd-budget Rent 900\n");
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 1);
        assert!(err.starts_with("line 2: Parse error"));
        assert!(runner.store().state().find("Rent").is_some());
    }

    #[test]
    fn test_missing_budget_and_expense() {
        let (_, summary, _, err) = run(
            "add-expense Lunch 12 --budget Nowhere\n\
             delete-expense 3 --budget Uncategorized\n",
        );
        assert_eq!(summary.failed, 2);
        assert!(err.contains("line 1: Budget not found: Nowhere"));
        assert!(err.contains("line 2: Expense not found: 3 in Uncategorized"));
    }

    #[test]
    fn test_delete_budget_by_name() {
        let (runner, summary, out, _) = run("add-budget Food 100\ndelete-budget food\n");
        assert!(summary.is_success());
        assert!(out.contains("Deleted budget 'Food'"));
        assert!(runner.store().state().find("Food").is_none());
    }

    #[test]
    fn test_list_and_show() {
        let (_, summary, out, _) = run(
            "add-budget Food 100\n\
             add-expense \"Big lunch\" 12.50 --budget Food\n\
             list\n\
             show Food\n",
        );
        assert!(summary.is_success());
        assert!(out.contains("Spent across budgets: $13"));
        assert!(out.contains("1. Big lunch"));
    }

    #[test]
    fn test_huge_amounts_do_not_overflow_totals() {
        let (_, summary, out, err) = run(
            "add-budget A 92233720368547758
             add-budget B 92233720368547758
             add-expense Yacht 92233720368547758 --budget A
             add-expense Jet 92233720368547758 --budget B
             list
             show Total
",
        );
        assert!(summary.is_success(), "{}", err);
        assert_eq!(summary.succeeded, 6);
        assert!(out.contains("Budget: Total"));
        assert!(out.contains("$92,233,720,368,547,758"));
    }

    #[test]
    fn test_history_all_reads_audit_log() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("audit.log");

        let mut earlier = Runner::new(
            BudgetStore::with_audit_log(AuditLogger::new(log.clone())),
            CurrencyFormat::default(),
        );
        earlier
            .run_line("add-budget Food 100", &mut Vec::<u8>::new())
            .unwrap();

        let mut runner = Runner::new(
            BudgetStore::with_audit_log(AuditLogger::new(log)),
            CurrencyFormat::default(),
        );
        let mut out = Vec::new();
        runner.run_line("history", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No changes yet.\n");

        let mut out = Vec::new();
        runner.run_line("history --all", &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("CREATE Budget"));
        assert!(out.contains("(Food)"));
    }

    #[test]
    fn test_history_all_needs_audit_log() {
        let (_, summary, _, err) = run("history --all\n");
        assert_eq!(summary.failed, 1);
        assert!(err.contains("line 1: Configuration error: The audit log is not enabled"));
    }
}
