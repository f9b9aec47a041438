use anyhow::Result;

use super::super::{args::UpdateCommand, exit_status::ExitStatus, host::TerminalHost};
use super::{block_on, settings_for};
use crate::core::{Affordance, CommandGenerator, RegenerationSession};

/// Regenerate the schema with the configured generator.
///
/// Returns `Failure` when the generator reports an error; the message has
/// already been printed by then.
pub fn update(cmd: UpdateCommand) -> Result<ExitStatus> {
    let settings = settings_for(&cmd.common.path, cmd.common.overrides())?;
    let generator = CommandGenerator::new(&settings.generator)?;

    let mut picks = Vec::new();
    if cmd.show_diff {
        picks.push(Affordance::ShowDiff);
    }
    if cmd.show_file {
        picks.push(Affordance::ShowFile);
    }
    let host = TerminalHost::new(cmd.common.verbose, picks);

    let mut session = RegenerationSession::new(settings);
    let outcome = block_on(session.regenerate(&host, &generator))?;
    tracing::debug!(?outcome, "update finished");

    Ok(ExitStatus::from(&outcome))
}
