use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::GenerateRequest;

pub const CONFIG_FILE_NAME: &str = ".i18ntagrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Regex matched against source file paths.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Source root, relative to the project root.
    #[serde(default = "default_src")]
    pub src: String,
    /// Schema output path, relative to the project root.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Command line of the schema generator.
    #[serde(default = "default_generator")]
    pub generator: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_filter() -> String {
    "\\.jsx?".to_string()
}

fn default_src() -> String {
    ".".to_string()
}

fn default_schema() -> String {
    "./translation.schema.json".to_string()
}

fn default_generator() -> Vec<String> {
    vec!["i18n-tag-schema".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            src: default_src(),
            schema: default_schema(),
            generator: default_generator(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the filter is not a valid regex or the generator
    /// command is empty.
    pub fn validate(&self) -> Result<()> {
        Regex::new(&self.filter)
            .with_context(|| format!("Invalid regex in 'filter': \"{}\"", self.filter))?;

        if self.generator.first().is_none_or(|program| program.is_empty()) {
            bail!("'generator' must name a command to run");
        }

        if self.timeout_secs == Some(0) {
            bail!("'timeoutSecs' must be greater than zero");
        }

        Ok(())
    }

    /// Resolve paths against the project root.
    pub fn resolve(&self, project_root: &Path) -> Settings {
        Settings {
            project_root: project_root.to_path_buf(),
            source_root: project_root.join(&self.src),
            filter: self.filter.clone(),
            schema_path: project_root.join(&self.schema),
            generator: self.generator.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Configuration with every path made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_root: PathBuf,
    pub source_root: PathBuf,
    pub filter: String,
    pub schema_path: PathBuf,
    pub generator: Vec<String>,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            source_root: self.source_root.clone(),
            filter: self.filter.clone(),
            schema_path: self.schema_path.clone(),
        }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub filter: Option<String>,
    pub src: Option<String>,
    pub schema: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if let Some(src) = self.src {
            config.src = src;
        }
        if let Some(schema) = self.schema {
            config.schema = schema;
        }
        config
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(?path, "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Load config for `project_root`, apply overrides and resolve paths.
pub fn load_settings(project_root: &Path, overrides: ConfigOverrides) -> Result<Settings> {
    let loaded = load_config(project_root)?;
    let config = overrides.apply(loaded.config);
    config.validate()?;
    Ok(config.resolve(project_root))
}
