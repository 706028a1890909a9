//! Edit command implementation.

use helpdesk_lib::{Priority, Result, TicketEdit};

use crate::cli::EditArgs;
use crate::config::CliOverrides;

use super::{open, report_change};

/// Execute the edit command.
///
/// The edit starts from the ticket's current values and replaces only the
/// fields given on the command line. Values are stored as given.
///
/// # Errors
///
/// Returns `TicketNotFound`, a validation error for an unknown priority, or a
/// storage error.
pub fn execute(args: &EditArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, mut controller) = open(overrides)?;
    let current = controller.show(&args.id)?;
    let edit = apply_args(TicketEdit::from_ticket(current), args)?;

    let ticket = controller.edit(&args.id, edit)?;
    report_change(&controller, "updated", &ticket, json)
}

fn apply_args(mut edit: TicketEdit, args: &EditArgs) -> Result<TicketEdit> {
    if let Some(first_name) = &args.first_name {
        edit.first_name.clone_from(first_name);
    }
    if let Some(last_name) = &args.last_name {
        edit.last_name.clone_from(last_name);
    }
    if let Some(issue) = &args.issue {
        edit.issue.clone_from(issue);
    }
    if let Some(priority) = &args.priority {
        edit.priority = priority.parse::<Priority>()?;
    }
    Ok(edit)
}
