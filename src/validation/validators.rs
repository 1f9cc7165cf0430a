//! Field validators
//!
//! Each validator takes the raw text of one input and either accepts it or
//! returns the message to show under that input.

use std::fmt;

use crate::models::{Money, RESERVED_BUDGET_NAMES};

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotANumber,
    NotPositive,
    Negative,
    ReservedName,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "This field is required"),
            Self::NotANumber => write!(f, "Please enter a number"),
            Self::NotPositive => write!(f, "Must be greater than 0"),
            Self::Negative => write!(f, "Must not be negative"),
            Self::ReservedName => write!(f, "That name is reserved"),
        }
    }
}

impl std::error::Error for FieldError {}

/// A pure check over one input's text
pub type Validator = fn(&str) -> Result<(), FieldError>;

/// Any non-empty text
pub fn string_validator(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Budget names: non-empty and not one of the sentinel names
pub fn budget_name_validator(input: &str) -> Result<(), FieldError> {
    string_validator(input)?;
    if RESERVED_BUDGET_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(input.trim()))
    {
        return Err(FieldError::ReservedName);
    }
    Ok(())
}

/// Any amount [`Money::parse`] accepts
pub fn number_validator(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }
    Money::parse(input)
        .map(|_| ())
        .map_err(|_| FieldError::NotANumber)
}

/// Budget ceilings: a number greater than zero
pub fn budget_max_validator(input: &str) -> Result<(), FieldError> {
    number_validator(input)?;
    match Money::parse(input) {
        Ok(amount) if amount.is_positive() => Ok(()),
        _ => Err(FieldError::NotPositive),
    }
}

/// Expense amounts: a number that is not negative
pub fn expense_amount_validator(input: &str) -> Result<(), FieldError> {
    number_validator(input)?;
    match Money::parse(input) {
        Ok(amount) if !amount.is_negative() => Ok(()),
        _ => Err(FieldError::Negative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_validator() {
        assert_eq!(string_validator(""), Err(FieldError::Required));
        assert_eq!(string_validator("Lunch"), Ok(()));
    }

    #[test]
    fn test_budget_name_validator() {
        assert_eq!(budget_name_validator(""), Err(FieldError::Required));
        assert_eq!(budget_name_validator("total"), Err(FieldError::ReservedName));
        assert_eq!(
            budget_name_validator("Uncategorized"),
            Err(FieldError::ReservedName)
        );
        assert_eq!(budget_name_validator("Food"), Ok(()));
    }

    #[test]
    fn test_number_validator() {
        assert_eq!(number_validator(""), Err(FieldError::Required));
        assert_eq!(number_validator("abc"), Err(FieldError::NotANumber));
        assert_eq!(number_validator("-4"), Ok(()));
        assert_eq!(number_validator("12.50"), Ok(()));
    }

    #[test]
    fn test_budget_max_validator() {
        assert_eq!(budget_max_validator(""), Err(FieldError::Required));
        assert_eq!(budget_max_validator("ten"), Err(FieldError::NotANumber));
        assert_eq!(budget_max_validator("0"), Err(FieldError::NotPositive));
        assert_eq!(budget_max_validator("-5"), Err(FieldError::NotPositive));
        assert_eq!(budget_max_validator("100"), Ok(()));
    }

    #[test]
    fn test_expense_amount_validator() {
        assert_eq!(expense_amount_validator("0"), Ok(()));
        assert_eq!(expense_amount_validator("-1"), Err(FieldError::Negative));
        assert_eq!(expense_amount_validator("x"), Err(FieldError::NotANumber));
        assert_eq!(expense_amount_validator(""), Err(FieldError::Required));
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::NotANumber.to_string(), "Please enter a number");
        assert_eq!(FieldError::NotPositive.to_string(), "Must be greater than 0");
    }
}
