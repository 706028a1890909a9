//! Stats command implementation.

use helpdesk_lib::Result;

use crate::config::CliOverrides;
use crate::format::format_statistics;

use super::{open, print_json};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the tickets file cannot be loaded.
pub fn execute(json: bool, overrides: &CliOverrides) -> Result<()> {
    let (_, controller) = open(overrides)?;
    let stats = controller.stats();

    if json {
        print_json(&stats)
    } else {
        println!("{}", format_statistics(&stats));
        Ok(())
    }
}
