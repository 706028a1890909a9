//! Search command implementation.

use helpdesk_lib::Result;

use crate::cli::SearchArgs;
use crate::config::CliOverrides;
use crate::format::format_ticket_table;

use super::{open, print_json};

/// Execute the search command.
///
/// Both names are required; matching is exact and ignores case.
///
/// # Errors
///
/// Returns a validation error if either name flag is missing, or an error if
/// the tickets file cannot be loaded.
pub fn execute(args: &SearchArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, controller) = open(overrides)?;
    let found = controller.search(args.first_name.as_deref(), args.last_name.as_deref())?;

    if json {
        print_json(&found)
    } else {
        println!("{}", format_ticket_table(found));
        Ok(())
    }
}
