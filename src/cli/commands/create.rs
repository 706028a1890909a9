//! Create command implementation.

use helpdesk_lib::{NewTicket, Priority, Result};

use crate::cli::CreateArgs;
use crate::config::CliOverrides;

use super::{open, report_change};

/// Execute the create command.
///
/// Missing names or issue are passed through as empty strings so that every
/// problem is reported at once by the validator.
///
/// # Errors
///
/// Returns an error if validation fails, the tickets file cannot be loaded,
/// or the new ticket cannot be saved.
pub fn execute(args: CreateArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (config, mut controller) = open(overrides)?;

    let priority = match args.priority.as_deref() {
        Some(p) => Some(p.parse::<Priority>()?),
        None => config.default_priority,
    };

    let new = NewTicket {
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        issue: args.issue.unwrap_or_default(),
        priority,
    };

    let ticket = controller.create(new)?;
    report_change(&controller, "created", &ticket, json)
}
