mod action_inputs_env;
mod environment_process;
mod http_probe_reqwest;
mod logger_console;
mod runner_filesystem_local;

pub use action_inputs_env::EnvActionInputs;
pub use environment_process::ProcessEnvironment;
pub use http_probe_reqwest::ReqwestProbe;
pub use logger_console::ConsoleLogger;
pub use runner_filesystem_local::LocalRunnerFilesystem;
