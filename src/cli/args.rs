//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `update`: Regenerate the translation schema
//! - `show`: Print the translation schema
//! - `init`: Initialize i18ntag configuration file
//! - `serve`: Start MCP server for editors and AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Show(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Regex of source files to scan (overrides config file)
    #[arg(long)]
    pub filter: Option<String>,

    /// Source root, relative to the project root (overrides config file)
    #[arg(long)]
    pub src: Option<String>,

    /// Schema output path, relative to the project root (overrides config file)
    #[arg(long)]
    pub schema: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            filter: self.filter.clone(),
            src: self.src.clone(),
            schema: self.schema.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Show what changed when the schema is updated
    #[arg(long)]
    pub show_diff: bool,

    /// Print the schema when the generator reports it without changes
    #[arg(long)]
    pub show_file: bool,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the translation schema
    Update(UpdateCommand),
    /// Print the translation schema
    Show(ShowCommand),
    /// Initialize a new .i18ntagrc.json configuration file
    Init(InitCommand),
    /// Start MCP server for editors and AI coding agents
    Serve,
}
