//! Show command implementation.

use helpdesk_lib::Result;

use crate::config::CliOverrides;
use crate::format::format_ticket_details;

use super::{open, print_json};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the tickets file cannot be loaded or the ticket is not
/// found.
pub fn execute(id: &str, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, controller) = open(overrides)?;
    let ticket = controller.show(id)?;

    if json {
        print_json(ticket)
    } else {
        println!("{}", format_ticket_details(ticket));
        Ok(())
    }
}
