//! Init command implementation.

use std::fs;
use std::path::PathBuf;

use helpdesk_lib::{HelpdeskError, Result, jsonfile};
use tracing::info;

use crate::cli::InitArgs;
use crate::config::{self, CONFIG_FILE, CONFIG_TEMPLATE, CliOverrides};

/// Execute the init command.
///
/// Writes the config template (refusing to replace an existing one without
/// `--force`) and an empty tickets file if none exists yet. Existing tickets
/// are never overwritten.
///
/// # Errors
///
/// Returns an error if the config already exists without `--force`, or a
/// file cannot be written.
pub fn execute(args: &InitArgs, overrides: &CliOverrides) -> Result<()> {
    let config_path = overrides
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if config_path.exists() && !args.force {
        return Err(HelpdeskError::Config(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }
    if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(&config_path, CONFIG_TEMPLATE)?;
    info!(path = %config_path.display(), "wrote config");

    let config = config::resolve(&CliOverrides {
        config: Some(config_path.clone()),
        tickets_file: overrides.tickets_file.clone(),
    })?;
    if config.tickets_file.exists() {
        println!(
            "Keeping existing tickets file {}",
            config.tickets_file.display()
        );
    } else {
        jsonfile::save(&config.tickets_file, &[])?;
    }

    println!(
        "Initialized helpdesk: config {}, tickets {}",
        config_path.display(),
        config.tickets_file.display()
    );
    Ok(())
}
