//! Form validation
//!
//! Validators for individual inputs and the coordinator that decides when
//! they run.

pub mod coordinator;
pub mod validators;

pub use coordinator::{ErrorSink, Evaluation, Observable, Submission, ValidationCoordinator};
pub use validators::{
    budget_max_validator, budget_name_validator, expense_amount_validator, number_validator,
    string_validator, FieldError, Validator,
};
