//! Configuration management for `hd`.
//!
//! Configuration is loaded from YAML with support for:
//! - Workspace config (`helpdesk.yaml` in the working directory)
//! - An explicit file (`--config` / `HELPDESK_CONFIG`)
//! - Overrides from flags and environment (`--file` / `HELPDESK_TICKETS_FILE`)
//!
//! Precedence: flag > environment > config file > built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use helpdesk_lib::{Controller, HelpdeskError, Priority, Result};
use serde::Deserialize;
use tracing::debug;

/// Workspace config file name.
pub const CONFIG_FILE: &str = "helpdesk.yaml";

/// Tickets file used when nothing else is configured.
pub const DEFAULT_TICKETS_FILE: &str = "tickets.json";

/// Template written by `hd init`.
pub const CONFIG_TEMPLATE: &str = r"# Helpdesk configuration
tickets_file: tickets.json
# Priority used by `hd create` when --priority is omitted.
# default_priority: Medium
# Ask before deleting a ticket.
confirm_delete: true
";

/// Settings read from `helpdesk.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpdeskConfig {
    /// Path of the tickets file. Relative paths are resolved against the
    /// directory of the config file they came from.
    #[serde(default = "default_tickets_file")]
    pub tickets_file: PathBuf,

    /// Priority for new tickets when none is given on the command line.
    #[serde(default)]
    pub default_priority: Option<Priority>,

    /// Whether `hd delete` asks for confirmation.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

fn default_tickets_file() -> PathBuf {
    PathBuf::from(DEFAULT_TICKETS_FILE)
}

const fn default_true() -> bool {
    true
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        Self {
            tickets_file: default_tickets_file(),
            default_priority: None,
            confirm_delete: true,
        }
    }
}

/// Settings that come from flags (clap also fills these from env vars).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub tickets_file: Option<PathBuf>,
}

/// Parse a config file.
///
/// # Errors
///
/// Returns `Config` if the file cannot be read or is not valid config YAML.
pub fn load_config(path: &Path) -> Result<HelpdeskConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        HelpdeskError::Config(format!("cannot read {}: {e}", path.display()))
    })?;
    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<HelpdeskConfig> {
    if contents.trim().is_empty() {
        return Ok(HelpdeskConfig::default());
    }
    serde_yaml::from_str(contents)
        .map_err(|e| HelpdeskError::Config(format!("invalid {}: {e}", path.display())))
}

/// Resolve the effective configuration relative to the working directory.
///
/// # Errors
///
/// Returns `Config` if an explicit or workspace config file is unreadable.
pub fn resolve(cli: &CliOverrides) -> Result<HelpdeskConfig> {
    resolve_in(Path::new(""), cli)
}

/// Resolve the effective configuration with `base` as the working directory.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_in(base: &Path, cli: &CliOverrides) -> Result<HelpdeskConfig> {
    let source = match &cli.config {
        Some(path) => Some(base.join(path)),
        None => Some(base.join(CONFIG_FILE)).filter(|p| p.is_file()),
    };

    let mut config = match &source {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let mut config = load_config(path)?;
            if config.tickets_file.is_relative() {
                let dir = path.parent().unwrap_or(base);
                config.tickets_file = dir.join(&config.tickets_file);
            }
            config
        }
        None => HelpdeskConfig {
            tickets_file: base.join(DEFAULT_TICKETS_FILE),
            ..HelpdeskConfig::default()
        },
    };

    if let Some(path) = &cli.tickets_file {
        config.tickets_file = base.join(path);
    }

    debug!(tickets_file = %config.tickets_file.display(), "resolved config");
    Ok(config)
}

/// Open the controller for the configured tickets file.
///
/// # Errors
///
/// Returns `StorageCorrupt` or `Io` if the tickets file cannot be loaded.
pub fn open_controller(config: &HelpdeskConfig) -> Result<Controller> {
    Controller::open(&config.tickets_file)
}
