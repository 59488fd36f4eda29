//! Runner workspace filesystem operations.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for file access on the runner.
///
/// Reads and writes are byte-for-byte. `make_temp_dir` must yield a fresh
/// unique directory on every call; created directories are never removed by
/// this crate.
pub trait RunnerFilesystem {
    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's raw bytes.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Write `contents` to `path`, truncating any existing file.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError>;

    /// Create a unique temporary directory whose name starts with `prefix`.
    fn make_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError>;
}
