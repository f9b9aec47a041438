use anyhow::Result;

use super::super::{args::ShowCommand, exit_status::ExitStatus, host::TerminalHost};
use super::{block_on, settings_for};
use crate::core::RegenerationSession;

/// Print the schema file.
pub fn show(cmd: ShowCommand) -> Result<ExitStatus> {
    let settings = settings_for(&cmd.common.path, cmd.common.overrides())?;
    let host = TerminalHost::new(cmd.common.verbose, Vec::new());
    let session = RegenerationSession::new(settings);

    let shown = block_on(session.show_schema(&host))?;
    Ok(ExitStatus::success_if(shown.is_some()))
}
