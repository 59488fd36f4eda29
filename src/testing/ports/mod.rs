mod in_memory_runner_fs;
mod probe_stub;
mod recording_logger;
mod static_environment;

pub use in_memory_runner_fs::InMemoryRunnerFs;
pub use probe_stub::ProbeStub;
pub use recording_logger::RecordingLogger;
pub use static_environment::StaticEnvironment;
pub use static_inputs::StaticInputs;
