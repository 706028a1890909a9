//! Command implementations.
//!
//! Each command resolves the configuration, opens the [`Controller`] on the
//! configured tickets file and renders its result as text or JSON.

pub mod completions;
pub mod create;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod status;
pub mod version;

use helpdesk_lib::{Controller, Result, Ticket};
use serde::Serialize;

use crate::config::{self, CliOverrides, HelpdeskConfig};
use crate::format::{ActionOutput, format_ticket_table};

/// Resolve the configuration and load the tickets file it names.
///
/// A corrupt tickets file fails here, before any command touches it.
pub(crate) fn open(overrides: &CliOverrides) -> Result<(HelpdeskConfig, Controller)> {
    let config = config::resolve(overrides)?;
    let controller = config::open_controller(&config)?;
    Ok((config, controller))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a successful change: the affected record as JSON, or a success
/// line followed by the full ticket table.
pub(crate) fn report_change(
    controller: &Controller,
    action: &str,
    ticket: &Ticket,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&ActionOutput::done(action, ticket));
    }
    println!("Ticket {} {action} successfully.", ticket.id);
    println!();
    println!("{}", format_ticket_table(controller.list()));
    Ok(())
}
