use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RunnerFilesystem;

/// In-memory runner filesystem double.
///
/// Temp dirs are unique per call, handed out under a fixed fake root.
#[derive(Default)]
pub struct InMemoryRunnerFs {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    temp_dirs: RefCell<u32>,
}

impl InMemoryRunnerFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, builder style.
    pub fn with_file(self, path: &str, contents: &[u8]) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), contents.to_vec());
        self
    }

    /// Contents of a stored file, if present.
    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// Whether no file has been seeded or written.
    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl RunnerFilesystem for InMemoryRunnerFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn make_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError> {
        let mut count = self.temp_dirs.borrow_mut();
        *count += 1;
        Ok(PathBuf::from(format!("/tmp/{}{:04}", prefix, count)))
    }
}
