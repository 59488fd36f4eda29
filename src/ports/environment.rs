/// Port for reading process environment variables.
pub trait Environment {
    /// Value of the named variable, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}
