/// Port for reading the named inputs supplied to the action invocation.
///
/// Mirrors the runner contract: an unset input reads as the empty string,
/// values are plain text with surrounding whitespace already trimmed.
pub trait ActionInputs {
    /// Value of the named input, or the empty string when unset.
    fn get(&self, name: &str) -> String;
}
