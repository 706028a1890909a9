//! Delete command implementation.

use std::io::{self, BufRead, Write};

use helpdesk_lib::{Result, Ticket};

use crate::cli::DeleteArgs;
use crate::config::CliOverrides;
use crate::format::{ActionOutput, format_ticket_line};

use super::{open, print_json, report_change};

/// Execute the delete command.
///
/// Asks on stderr and reads the answer from stdin unless `--yes` is given or
/// `confirm_delete` is off in the config.
///
/// # Errors
///
/// Returns `TicketNotFound` (before any prompt) or a storage error.
pub fn execute(args: &DeleteArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let (config, mut controller) = open(overrides)?;
    let ask = config.confirm_delete && !args.yes;

    let removed = controller.delete(&args.id, |ticket| {
        !ask || confirm_with(io::stdin().lock(), io::stderr(), ticket)
    })?;

    match removed {
        Some(ticket) => report_change(&controller, "deleted", &ticket, json),
        None if json => print_json(&ActionOutput::cancelled("deleted", &args.id)),
        None => {
            println!("Delete cancelled.");
            Ok(())
        }
    }
}

/// Prompt for a yes/no answer. Anything other than `y`/`yes` declines,
/// including end of input and read errors.
fn confirm_with(mut input: impl BufRead, mut prompt: impl Write, ticket: &Ticket) -> bool {
    // Prompt write failures do not change the answer.
    let _ = write!(prompt, "Delete {}? [y/N] ", format_ticket_line(ticket));
    let _ = prompt.flush();

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
