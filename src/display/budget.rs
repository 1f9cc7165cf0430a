//! Budget display formatting
//!
//! Plain-text renderings of the budget cards, a single budget's expenses and
//! the change history, used by the command runner.

use super::card::{card_summaries, CardSummary};
use super::currency::CurrencyFormat;
use crate::audit::AuditEntry;
use crate::models::Budget;
use crate::store::BudgetState;

/// Format every budget card as a table
pub fn format_budget_cards(state: &BudgetState, fmt: &CurrencyFormat) -> String {
    let cards = card_summaries(state);

    let name_width = cards
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>8}  {:>8}  {}\n",
        "Budget",
        "Spent",
        "Limit",
        "Progress",
        "Expenses",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->8}  {:->8}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for card in &cards {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>8}  {:>8}  {}\n",
            card.name,
            fmt.amount(card.spent),
            ceiling_str(card, fmt),
            progress_str(card),
            card.expense_count,
            card.id,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "\nSpent across budgets: {}\n",
        fmt.amount(state.derived_total())
    ));

    output
}

/// Format one budget with a numbered list of its expenses
pub fn format_budget_details(budget: &Budget, state: &BudgetState, fmt: &CurrencyFormat) -> String {
    let card = CardSummary::for_budget(budget, state);
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:       {}\n", budget.id));
    output.push_str(&format!("  Kind:     {}\n", budget.card_variant));
    if card.ceiling.is_some() {
        output.push_str(&format!("  Limit:    {}\n", ceiling_str(&card, fmt)));
    }
    output.push_str(&format!("  Spent:    {}", fmt.amount(card.spent)));
    if card.progress.is_some() {
        output.push_str(&format!(" ({})", progress_str(&card)));
    }
    output.push('\n');

    output.push_str("  Expenses:\n");
    if budget.expenses.is_empty() {
        output.push_str("    (no expenses)\n");
        return output;
    }

    let desc_width = budget
        .expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(0);
    for (i, expense) in budget.expenses.iter().enumerate() {
        output.push_str(&format!(
            "    {:>3}. {:<width$}  {:>12}  {}\n",
            i + 1,
            expense.description,
            fmt.amount(expense.amount),
            expense.id,
            width = desc_width
        ));
    }

    output
}

/// Format journal entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes yet.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}

fn ceiling_str(card: &CardSummary, fmt: &CurrencyFormat) -> String {
    card.ceiling
        .map(|c| fmt.amount(c))
        .unwrap_or_else(|| "-".to_string())
}

fn progress_str(card: &CardSummary) -> String {
    card.progress
        .map(|p| format!("{:.0}%", p))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::store::{reduce, BudgetAction};

    fn sample_state() -> BudgetState {
        let state = reduce(&BudgetState::new(), &BudgetAction::add_budget("Food", "100"));
        let food = state.find("Food").unwrap().id;
        reduce(&state, &BudgetAction::add_expense("Lunch", Money::from_units(12), food))
    }

    #[test]
    fn test_cards_table() {
        let state = sample_state();
        let output = format_budget_cards(&state, &CurrencyFormat::default());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Budget"));
        assert!(lines[2].starts_with("Food"));
        assert!(lines[2].contains("$12"));
        assert!(lines[2].contains("$100"));
        assert!(lines[2].contains("12%"));
        assert!(lines[3].starts_with("Uncategorized"));
        assert!(lines[4].starts_with("Total"));
        assert!(output.contains("Spent across budgets: $12"));
    }

    #[test]
    fn test_details_lists_expenses() {
        let state = sample_state();
        let food = state.find("Food").unwrap();
        let output = format_budget_details(food, &state, &CurrencyFormat::default());

        assert!(output.contains("Budget: Food"));
        assert!(output.contains("Limit:    $100"));
        assert!(output.contains("Spent:    $12 (12%)"));
        assert!(output.contains("  1. Lunch"));
    }

    #[test]
    fn test_details_uncategorized_has_no_limit() {
        let state = BudgetState::new();
        let uncategorized = state.uncategorized().unwrap();
        let output = format_budget_details(uncategorized, &state, &CurrencyFormat::default());

        assert!(!output.contains("Limit:"));
        assert!(output.contains("(no expenses)"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[]), "No changes yet.\n");
    }
}
