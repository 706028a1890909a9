//! List command implementation.

use helpdesk_lib::{ListFilters, Priority, Result, Status};

use crate::cli::ListArgs;
use crate::config::CliOverrides;
use crate::format::format_ticket_table;

use super::{open, print_json};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a filter value is not a known status or priority, or
/// the tickets file cannot be loaded.
pub fn execute(args: &ListArgs, json: bool, overrides: &CliOverrides) -> Result<()> {
    let filters = build_filters(args)?;
    let (_, controller) = open(overrides)?;
    let tickets = controller.list_filtered(&filters);

    if json {
        print_json(&tickets)
    } else {
        println!("{}", format_ticket_table(tickets));
        Ok(())
    }
}

/// Convert CLI args to list filters.
fn build_filters(args: &ListArgs) -> Result<ListFilters> {
    Ok(ListFilters {
        status: args.status.as_deref().map(str::parse::<Status>).transpose()?,
        priority: args
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filters_empty() {
        assert!(build_filters(&ListArgs::default()).unwrap().is_empty());
    }

    #[test]
    fn test_build_filters_parses_values() {
        let args = ListArgs {
            status: Some("closed".to_string()),
            priority: Some("URGENT".to_string()),
        };
        let filters = build_filters(&args).unwrap();
        assert_eq!(filters.status, Some(Status::Closed));
        assert_eq!(filters.priority, Some(Priority::Urgent));
    }

    #[test]
    fn test_build_filters_rejects_unknown() {
        let args = ListArgs {
            status: Some("pending".to_string()),
            priority: None,
        };
        assert!(build_filters(&args).unwrap_err().is_validation());
    }
}
