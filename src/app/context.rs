use crate::ports::{ActionInputs, Environment, HttpProbe, Logger, RunnerFilesystem};

/// Application context holding dependencies for settings resolution.
pub struct AppContext<I: ActionInputs, E: Environment, F: RunnerFilesystem, H: HttpProbe, L: Logger>
{
    inputs: I,
    env: E,
    files: F,
    probe: H,
    logger: L,
}

impl<I: ActionInputs, E: Environment, F: RunnerFilesystem, H: HttpProbe, L: Logger>
    AppContext<I, E, F, H, L>
{
    /// Create a new application context.
    pub fn new(inputs: I, env: E, files: F, probe: H, logger: L) -> Self {
        Self { inputs, env, files, probe, logger }
    }

    /// Get a reference to the action input provider.
    pub fn inputs(&self) -> &I {
        &self.inputs
    }

    /// Get a reference to the environment store.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the runner filesystem.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a reference to the HTTP probe.
    pub fn probe(&self) -> &H {
        &self.probe
    }

    /// Get a reference to the logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }
}
