//! upbot-action: validate the CI environment and resolve launch settings for
//! the Upbot dependency-update bot.
//!
//! The bot itself is launched by the surrounding workflow; this crate only
//! checks preconditions and turns the action's inputs into the normalized
//! values that launch consumes.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{check, resolve},
    output,
};
use services::{
    ConsoleLogger, EnvActionInputs, LocalRunnerFilesystem, ProcessEnvironment, ReqwestProbe,
};

pub use app::output::ResolveReport;
pub use app::settings::{DEFAULT_REPO_CONF, MAVEN_CENTRAL_URL};
pub use domain::{AppError, GitHubAppCredentials, LaunchSettings};

type ProductionContext =
    AppContext<EnvActionInputs, ProcessEnvironment, LocalRunnerFilesystem, ReqwestProbe, ConsoleLogger>;

fn production_context() -> Result<ProductionContext, AppError> {
    Ok(AppContext::new(
        EnvActionInputs::new(),
        ProcessEnvironment::new(),
        LocalRunnerFilesystem::new(),
        ReqwestProbe::new()?,
        ConsoleLogger::new(),
    ))
}

/// Check that Maven Central is reachable before any configuration work.
pub fn check() -> Result<(), AppError> {
    let ctx = production_context()?;

    check::execute(&ctx)?;
    println!("✅ Environment check passed");
    Ok(())
}

/// Resolve the full launch settings from the action's inputs.
///
/// Performs no network I/O; run [`check`] first to fail fast when Maven
/// Central is unreachable.
pub fn resolve() -> Result<LaunchSettings, AppError> {
    let ctx = production_context()?;

    let settings = resolve::execute(&ctx)?;
    println!("✅ Resolved launch settings");
    Ok(settings)
}

/// Resolve the launch settings and publish the machine-readable report.
///
/// The report is written as compact JSON to stdout and, when `GITHUB_OUTPUT`
/// is set, appended there as `settings=<json>` for later workflow steps.
pub fn resolve_with_report() -> Result<LaunchSettings, AppError> {
    let settings = resolve()?;

    output::write_resolve_output(&ResolveReport::from_settings(&settings))?;
    Ok(settings)
}
