//! Expense model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense attached to a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, generated at creation
    pub id: ExpenseId,

    /// Free-text label
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a freshly generated id
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let a = Expense::new("Lunch", Money::from_units(12));
        let b = Expense::new("Lunch", Money::from_units(12));
        assert_eq!(a.description, "Lunch");
        assert_eq!(a.amount.cents(), 1200);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display() {
        let e = Expense::new("Coffee", Money::from_cents(450));
        assert_eq!(e.to_string(), "Coffee ($4.50)");
    }
}
