use crate::domain::AppError;

/// Port for issuing a GET request where only the success flag matters.
pub trait HttpProbe {
    /// `true` when the endpoint answered with a success status.
    ///
    /// Transport-level failures (DNS, connect, timeout) surface as errors;
    /// a well-formed non-success response is `Ok(false)`.
    fn get_ok(&self, url: &str) -> Result<bool, AppError>;
}
