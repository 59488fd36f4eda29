use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::HttpProbe;

/// HTTP probe double returning a canned outcome and recording requested URLs.
pub struct ProbeStub {
    outcome: Result<bool, String>,
    requests: RefCell<Vec<String>>,
}

impl ProbeStub {
    /// Probe answering every GET with a success status.
    pub fn ok() -> Self {
        Self { outcome: Ok(true), requests: RefCell::new(Vec::new()) }
    }

    /// Probe answering every GET with a non-success status.
    pub fn not_ok() -> Self {
        Self { outcome: Ok(false), requests: RefCell::new(Vec::new()) }
    }

    /// Probe failing every GET at the transport level.
    pub fn failing(details: &str) -> Self {
        Self { outcome: Err(details.to_string()), requests: RefCell::new(Vec::new()) }
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpProbe for ProbeStub {
    fn get_ok(&self, url: &str) -> Result<bool, AppError> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.outcome {
            Ok(flag) => Ok(*flag),
            Err(details) => Err(AppError::Http(details.clone())),
        }
    }
}
