//! Action input adapter over the runner's environment.

use crate::ports::ActionInputs;

/// Reads action inputs from `INPUT_<NAME>` environment variables, the way
/// the Actions runner exposes them (name uppercased, `-` replaced by `_`).
///
/// Values are trimmed of surrounding whitespace, matching the runner's own
/// input handling.
#[derive(Debug, Clone, Default)]
pub struct EnvActionInputs;

impl EnvActionInputs {
    pub fn new() -> Self {
        Self
    }

    fn env_key(name: &str) -> String {
        format!("INPUT_{}", name.to_uppercase().replace('-', "_"))
    }
}

impl ActionInputs for EnvActionInputs {
    fn get(&self, name: &str) -> String {
        std::env::var(Self::env_key(name)).map(|v| v.trim().to_string()).unwrap_or_default()
    }
}
