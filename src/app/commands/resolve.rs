//! Assembly of the full launch settings.

use crate::app::{AppContext, settings};
use crate::domain::{AppError, LaunchSettings};
use crate::ports::{ActionInputs, Environment, HttpProbe, Logger, RunnerFilesystem};

/// Execute the resolve command.
///
/// Runs the five settings resolutions in input order and assembles the
/// result. The first failure aborts the assembly; no partial configuration
/// is ever returned. The Maven Central probe is not part of this command;
/// callers run `check` separately to fail fast.
pub fn execute<I, E, F, H, L>(ctx: &AppContext<I, E, F, H, L>) -> Result<LaunchSettings, AppError>
where
    I: ActionInputs,
    E: Environment,
    F: RunnerFilesystem,
    H: HttpProbe,
    L: Logger,
{
    let github_token = settings::github_token(ctx)?;
    let repo_conf = settings::default_repo_conf(ctx)?;
    let repositories = settings::github_repository(ctx)?;
    let repos_file = settings::repos_file(ctx)?;
    let github_app = settings::github_app_info(ctx)?;

    Ok(LaunchSettings { github_token, repo_conf, repositories, repos_file, github_app })
}
