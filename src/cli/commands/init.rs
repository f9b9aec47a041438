use std::{fs, path::Path};

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json, find_config_file};

/// Write the default `.i18ntagrc.json` into the target directory.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    if !cmd.path.is_dir() {
        bail!("Project root not found: {}", cmd.path.display());
    }

    let config_path = if cmd.path == Path::new(".") {
        Path::new(CONFIG_FILE_NAME).to_path_buf()
    } else {
        cmd.path.join(CONFIG_FILE_NAME)
    };

    if config_path.exists() {
        eprintln!("Error: {} already exists", config_path.display());
        return Ok(ExitStatus::Failure);
    }

    // A parent config stops applying here once this one exists.
    if let Some(inherited) = find_config_file(&cmd.path) {
        tracing::debug!(?inherited, "new config shadows an inherited one");
    }

    fs::write(&config_path, default_config_json()? + "\n")?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );

    Ok(ExitStatus::Success)
}
