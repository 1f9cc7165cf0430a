//! Scripted command runner
//!
//! Reads one command per line, parses it with clap and applies it to a
//! budget store.

pub mod command;
pub mod runner;
pub mod tokenize;

pub use command::{parse_args, ParsedLine, ScriptCommand};
pub use runner::{RunSummary, Runner};
pub use tokenize::split_line;
