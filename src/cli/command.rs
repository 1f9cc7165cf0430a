//! Runner command definitions
//!
//! Each script line is parsed with clap as one of these subcommands.

use clap::{Parser, Subcommand};

use crate::error::{BudgetError, BudgetResult};
use crate::export::ExportFormat;

/// One parsed script line
#[derive(Parser, Debug)]
#[command(name = "budgets run", no_binary_name = true, disable_version_flag = true)]
pub struct ScriptLine {
    #[command(subcommand)]
    pub command: ScriptCommand,
}

/// Commands understood by `budgets run`
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Create a budget
    AddBudget {
        /// Budget name
        name: String,
        /// Spending limit (e.g., "100" or "100.00")
        limit: String,
    },

    /// Delete a budget and its expenses
    DeleteBudget {
        /// Budget name or ID
        budget: String,
    },

    /// Record an expense
    AddExpense {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Budget name or ID (default: Uncategorized)
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Delete an expense from one budget
    DeleteExpense {
        /// Expense ID, or its position in the budget's list (1-based)
        expense: String,
        /// Budget name or ID
        #[arg(short, long)]
        budget: String,
    },

    /// Show all budget cards
    #[command(alias = "ls")]
    List,

    /// Show one budget and its expenses
    Show {
        /// Budget name or ID
        budget: String,
    },

    /// Write a snapshot of the current state
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
    },

    /// Show every change made so far
    History {
        /// Read the audit log instead, including earlier sessions
        #[arg(long)]
        all: bool,
    },
}

/// What a line turned out to be
#[derive(Debug)]
pub enum ParsedLine {
    /// Nothing to run (blank or comment)
    Empty,
    /// Help text requested with `help` or `--help`
    Help(String),
    Command(ScriptCommand),
}

/// Parse tokenized arguments into a command
pub fn parse_args(args: &[String]) -> BudgetResult<ParsedLine> {
    if args.is_empty() {
        return Ok(ParsedLine::Empty);
    }

    match ScriptLine::try_parse_from(args) {
        Ok(line) => Ok(ParsedLine::Command(line.command)),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
            Ok(ParsedLine::Help(e.render().to_string()))
        }
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or("invalid command")
                .trim_start_matches("error: ")
                .to_string();
            Err(BudgetError::Parse(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &[&str]) -> Vec<String> {
        line.iter().map(|s| s.to_string()).collect()
    }

    fn command(line: &[&str]) -> ScriptCommand {
        match parse_args(&args(line)).unwrap() {
            ParsedLine::Command(c) => c,
            other => panic!("expected a command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_budget() {
        assert_eq!(
            command(&["add-budget", "Food", "100"]),
            ScriptCommand::AddBudget {
                name: "Food".into(),
                limit: "100".into()
            }
        );
    }

    #[test]
    fn test_parse_add_expense_with_budget() {
        assert_eq!(
            command(&["add-expense", "Lunch", "12", "--budget", "Food"]),
            ScriptCommand::AddExpense {
                description: "Lunch".into(),
                amount: "12".into(),
                budget: Some("Food".into())
            }
        );
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        assert_eq!(
            command(&["add-expense", "Refund", "-5"]),
            ScriptCommand::AddExpense {
                description: "Refund".into(),
                amount: "-5".into(),
                budget: None
            }
        );
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!(
            command(&["export", "yaml"]),
            ScriptCommand::Export {
                format: ExportFormat::Yaml
            }
        );
    }

    #[test]
    fn test_empty_line() {
        assert!(matches!(parse_args(&[]).unwrap(), ParsedLine::Empty));
    }

    #[test]
    fn test_unknown_command_is_parse_error() {
        let err = parse_args(&args(&["frobnicate"])).unwrap_err();
        assert!(matches!(err, BudgetError::Parse(_)));
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_missing_argument_is_parse_error() {
        let err = parse_args(&args(&["delete-expense", "1"])).unwrap_err();
        assert!(matches!(err, BudgetError::Parse(_)));
    }

    #[test]
    fn test_help() {
        assert!(matches!(
            parse_args(&args(&["help"])).unwrap(),
            ParsedLine::Help(_)
        ));
    }
}
