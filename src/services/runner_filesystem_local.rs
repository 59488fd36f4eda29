//! Local filesystem adapter for the runner workspace.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RunnerFilesystem;

/// Direct `std::fs` implementation of [`RunnerFilesystem`].
#[derive(Debug, Clone, Default)]
pub struct LocalRunnerFilesystem;

impl LocalRunnerFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl RunnerFilesystem for LocalRunnerFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        Ok(fs::read(path)?)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::write(path, contents)?)
    }

    fn make_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError> {
        // The directory must outlive this process; the runner wipes its temp
        // area between jobs.
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(dir.keep())
    }
}
