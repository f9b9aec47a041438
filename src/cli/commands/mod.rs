pub mod init;
pub mod show;
pub mod update;

use std::{fs, future::Future, path::Path};

use anyhow::{Context, Result};

use crate::config::{ConfigOverrides, Settings, load_settings};

/// Run a command on a single-threaded runtime, like the MCP server does.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn settings_for(path: &Path, overrides: ConfigOverrides) -> Result<Settings> {
    let project_root = fs::canonicalize(path)
        .with_context(|| format!("Project root not found: {}", path.display()))?;
    load_settings(&project_root, overrides)
}
