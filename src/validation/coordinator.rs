//! Field validation coordinator
//!
//! Tracks the validity of a form's inputs. Forms hand it the current inputs
//! as [`Observable`]s after every edit ([`ValidationCoordinator::observe`])
//! and on every submit attempt ([`ValidationCoordinator::submit`]); the
//! coordinator decides which validators run and pushes their messages to the
//! inputs' error sinks.
//!
//! Change detection compares each value with the one seen on the previous
//! evaluation. A single changed field is validated on its own. Several fields
//! changing at once is taken to be a programmatic reset (e.g. the form being
//! cleared) and nothing is validated for that evaluation.

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::validators::Validator;

/// Where a field's error message is displayed
pub trait ErrorSink {
    /// Show `message`, or clear the error when it is `None`
    fn show(&mut self, message: Option<String>);
}

impl ErrorSink for Option<String> {
    fn show(&mut self, message: Option<String>) {
        *self = message;
    }
}

/// One watched input: its id, current text, validator and error sink
pub struct Observable<'a, F> {
    pub id: F,
    pub value: &'a str,
    pub validator: Validator,
    pub sink: &'a mut dyn ErrorSink,
}

impl<'a, F> Observable<'a, F> {
    pub fn new(id: F, value: &'a str, validator: Validator, sink: &'a mut dyn ErrorSink) -> Self {
        Self {
            id,
            value,
            validator,
            sink,
        }
    }

    /// Run the validator, update the sink, and report whether the value passed
    fn validate(&mut self) -> bool {
        let result = (self.validator)(self.value);
        self.sink.show(result.err().map(|e| e.to_string()));
        result.is_ok()
    }
}

/// What an incremental evaluation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation<F> {
    /// No value changed since the last evaluation
    Unchanged,
    /// Exactly one value changed and was validated
    Validated { field: F, valid: bool },
    /// Several values changed at once; treated as a reset, nothing validated
    Reset { changed: usize },
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Every field was already valid; nothing was re-run
    AlreadyValid,
    /// Every field was re-validated
    Revalidated { valid: bool },
}

impl Submission {
    /// Whether the dependent action may go ahead
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::AlreadyValid | Self::Revalidated { valid: true })
    }
}

/// Per-form validity tracker
///
/// Field ids must be unique within one coordinator; a repeated id shares (and
/// overwrites) the same status entry.
#[derive(Debug, Clone)]
pub struct ValidationCoordinator<F> {
    /// Values seen on the last evaluation
    snapshot: BTreeMap<F, String>,
    /// Whether each field last validated successfully
    status: BTreeMap<F, bool>,
}

impl<F: Copy + Ord + Debug> ValidationCoordinator<F> {
    /// Start tracking `fields` with their initial values, all invalid
    pub fn new<'v>(fields: impl IntoIterator<Item = (F, &'v str)>) -> Self {
        let mut coordinator = Self {
            snapshot: BTreeMap::new(),
            status: BTreeMap::new(),
        };
        coordinator.reset(fields);
        coordinator
    }

    /// Forget previous results: take `values` as the new baseline and mark
    /// every field invalid again. Call this when the form is cleared.
    pub fn reset<'v>(&mut self, values: impl IntoIterator<Item = (F, &'v str)>) {
        self.snapshot.clear();
        self.status.clear();
        for (id, value) in values {
            self.snapshot.insert(id, value.to_string());
            self.status.insert(id, false);
        }
    }

    /// Incremental regime: validate the one field that changed, if only one did
    pub fn observe(&mut self, observables: &mut [Observable<'_, F>]) -> Evaluation<F> {
        let changed: Vec<usize> = observables
            .iter()
            .enumerate()
            .filter(|(_, o)| self.snapshot.get(&o.id).map(String::as_str) != Some(o.value))
            .map(|(i, _)| i)
            .collect();

        for observable in observables.iter() {
            self.snapshot.insert(observable.id, observable.value.to_string());
        }

        match changed.as_slice() {
            [] => Evaluation::Unchanged,
            [index] => {
                let observable = &mut observables[*index];
                let valid = observable.validate();
                self.status.insert(observable.id, valid);
                tracing::trace!(field = ?observable.id, valid, "field validated");
                Evaluation::Validated {
                    field: observable.id,
                    valid,
                }
            }
            many => {
                tracing::trace!(changed = many.len(), "several fields changed, skipping validation");
                Evaluation::Reset {
                    changed: many.len(),
                }
            }
        }
    }

    /// Bulk regime: on a submit attempt re-validate every field, unless all of
    /// them are already known to be valid
    pub fn submit(&mut self, observables: &mut [Observable<'_, F>]) -> Submission {
        if self.all_valid() {
            return Submission::AlreadyValid;
        }

        for observable in observables.iter_mut() {
            let valid = observable.validate();
            self.status.insert(observable.id, valid);
            self.snapshot.insert(observable.id, observable.value.to_string());
        }

        let valid = self.all_valid();
        tracing::debug!(valid, "form re-validated on submit");
        Submission::Revalidated { valid }
    }

    /// Validity of every tracked field
    pub fn status(&self) -> &BTreeMap<F, bool> {
        &self.status
    }

    /// Validity of one field; untracked fields are invalid
    pub fn is_valid(&self, field: F) -> bool {
        self.status.get(&field).copied().unwrap_or(false)
    }

    /// The gate for the form's action: every tracked field is valid
    pub fn all_valid(&self) -> bool {
        self.status.values().all(|valid| *valid)
    }
}
