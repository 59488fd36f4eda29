/// Port for informational log output. Fire-and-forget plain text.
pub trait Logger {
    /// Emit one informational message.
    fn info(&self, message: &str);
}
