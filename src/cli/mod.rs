//! Command-line interface: argument parsing, the terminal host and output.

mod args;
mod commands;
mod exit_status;
mod host;
pub mod report;

use anyhow::{Result, bail};

pub use args::{Arguments, Command, CommonArgs, InitCommand, ShowCommand, UpdateCommand};
pub use exit_status::ExitStatus;
pub use host::TerminalHost;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Update(cmd)) => commands::update::update(cmd),
        Some(Command::Show(cmd)) => commands::show::show(cmd),
        Some(Command::Init(cmd)) => commands::init::init(cmd),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run_cli()
            bail!("Serve command should be handled before run_cli()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
