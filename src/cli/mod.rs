//! Command-line interface for `hd`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::CliOverrides;
use crate::logging;

/// `hd` - support ticket desk.
#[derive(Parser, Debug)]
#[command(name = "hd")]
#[command(
    author,
    version,
    about = "Support ticket desk (single JSON file)",
    long_about = None,
    after_help = "The tickets file is rewritten in full after every change."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tickets file (overrides `tickets_file` in the config)
    #[arg(long, global = true, env = "HELPDESK_TICKETS_FILE")]
    pub file: Option<PathBuf>,

    /// Config file (default: ./helpdesk.yaml if present)
    #[arg(long, global = true, env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a config template and an empty tickets file
    Init(InitArgs),

    /// Create a new ticket
    Create(CreateArgs),

    /// List tickets
    List(ListArgs),

    /// Show one ticket
    Show(IdArgs),

    /// Find tickets by first and last name
    Search(SearchArgs),

    /// Close an open ticket
    Close(IdArgs),

    /// Reopen a closed ticket
    Reopen(IdArgs),

    /// Edit a ticket's names, issue or priority
    Edit(EditArgs),

    /// Delete a ticket
    Delete(DeleteArgs),

    /// Ticket counts by status and priority
    Stats,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Description of the problem
    #[arg(long)]
    pub issue: Option<String>,

    /// Low, Medium, High or Urgent
    #[arg(long, short = 'p')]
    pub priority: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only tickets with this status (Open, Closed)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Only tickets with this priority
    #[arg(long, short = 'p')]
    pub priority: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct IdArgs {
    /// Ticket ID
    pub id: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,
}

/// Omitted fields keep their current value.
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// Ticket ID
    pub id: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub issue: Option<String>,

    #[arg(long, short = 'p')]
    pub priority: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeleteArgs {
    /// Ticket ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Parse arguments, set up logging and run the selected command.
///
/// # Errors
///
/// Returns an error if logging cannot be initialised or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::env::var_os(logging::LOG_FILE_ENV).map(PathBuf::from);
    logging::init_logging(cli.verbose, cli.quiet, log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let overrides = CliOverrides {
        config: cli.config,
        tickets_file: cli.file,
    };
    let json = cli.json;

    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&args, &overrides)?,
        Some(Commands::Create(args)) => commands::create::execute(args, json, &overrides)?,
        Some(Commands::List(args)) => commands::list::execute(&args, json, &overrides)?,
        Some(Commands::Show(args)) => commands::show::execute(&args.id, json, &overrides)?,
        Some(Commands::Search(args)) => commands::search::execute(&args, json, &overrides)?,
        Some(Commands::Close(args)) => commands::status::close(&args.id, json, &overrides)?,
        Some(Commands::Reopen(args)) => commands::status::reopen(&args.id, json, &overrides)?,
        Some(Commands::Edit(args)) => commands::edit::execute(&args, json, &overrides)?,
        Some(Commands::Delete(args)) => commands::delete::execute(&args, json, &overrides)?,
        Some(Commands::Stats) => commands::stats::execute(json, &overrides)?,
        Some(Commands::Completions { shell }) => commands::completions::execute(shell),
        Some(Commands::Version) => commands::version::execute(json)?,
        None => println!("hd - support ticket desk. Use --help for usage."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "hd",
            "create",
            "--first-name",
            "Alice",
            "--last-name",
            "Smith",
            "--issue",
            "Printer jammed",
            "-p",
            "high",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.first_name.as_deref(), Some("Alice"));
                assert_eq!(args.priority.as_deref(), Some("high"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hd", "list", "--json", "-vv", "--file", "t.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("t.json")));
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["hd", "delete"]).is_err());
        let cli = Cli::try_parse_from(["hd", "delete", "3", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Delete(DeleteArgs { ref id, yes: true })) if id == "3"
        ));
    }
}
