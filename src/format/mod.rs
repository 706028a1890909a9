//! Output formatting for `hd`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Diagnostics and prompts go to stderr; stdout carries only results.
//!
//! # JSON Output Types
//!
//! - [`ActionOutput`] - result of a mutating command
//!
//! Lists, single tickets and statistics are emitted as the library types
//! themselves.

mod output;
mod text;

pub use output::ActionOutput;
pub use text::{
    format_statistics, format_status_icon, format_ticket_details, format_ticket_line,
    format_ticket_table,
};
