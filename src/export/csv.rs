//! CSV Export functionality
//!
//! One row per expense, grouped by budget in display order. Budgets without
//! expenses get no rows.

use crate::error::BudgetResult;
use crate::store::BudgetState;
use std::io::Write;

/// Export every expense to CSV
pub fn export_expenses_csv<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Budget",
        "Budget ID",
        "Card",
        "Expense ID",
        "Description",
        "Amount",
        "Created",
    ])?;

    for budget in state.budgets() {
        for expense in &budget.expenses {
            csv_writer.write_record([
                budget.name.clone(),
                budget.id.as_uuid().to_string(),
                budget.card_variant.to_string(),
                expense.id.as_uuid().to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.cents() as f64 / 100.0),
                expense.created_at.to_rfc3339(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
