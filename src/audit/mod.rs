//! Audit logging for budget-cards
//!
//! Every effective store transition is recorded as one or more audit entries
//! (budget created, expense deleted, ...). The store always keeps them in an
//! in-memory journal; when auditing is enabled in the settings they are also
//! appended to a JSONL file.
//!
//! - `AuditEntry`: timestamp, operation, entity information, and a JSON
//!   snapshot of the entity.
//! - `AuditLogger`: appends entries to the audit log file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
