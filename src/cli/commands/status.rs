//! Close and reopen commands.

use helpdesk_lib::Result;

use crate::config::CliOverrides;

use super::{open, report_change};

/// Execute the close command.
///
/// # Errors
///
/// Returns `TicketNotFound`, `InvalidTransition` if the ticket is already
/// closed, or a storage error.
pub fn close(id: &str, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, mut controller) = open(overrides)?;
    let ticket = controller.close(id)?;
    report_change(&controller, "closed", &ticket, json)
}

/// Execute the reopen command.
///
/// # Errors
///
/// Returns `TicketNotFound`, `InvalidTransition` if the ticket is already
/// open, or a storage error.
pub fn reopen(id: &str, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, mut controller) = open(overrides)?;
    let ticket = controller.reopen(id)?;
    report_change(&controller, "reopened", &ticket, json)
}
