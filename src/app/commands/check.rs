//! Fail-fast environment check.

use crate::app::{AppContext, settings};
use crate::domain::AppError;
use crate::ports::{ActionInputs, Environment, HttpProbe, Logger, RunnerFilesystem};

/// Execute the check command.
///
/// Probes Maven Central so a run on a cut-off runner fails before any
/// configuration work is spent.
pub fn execute<I, E, F, H, L>(ctx: &AppContext<I, E, F, H, L>) -> Result<(), AppError>
where
    I: ActionInputs,
    E: Environment,
    F: RunnerFilesystem,
    H: HttpProbe,
    L: Logger,
{
    settings::check_maven_central(ctx)
}
