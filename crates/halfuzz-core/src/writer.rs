//! Writing generated files.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Destination for generated files.
pub trait FileWriter {
    /// Write `contents` to `path`, creating parent directories and replacing
    /// any existing file.
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes generated files to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl FileWriter for FsWriter {
    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let write_err = |source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, contents).map_err(write_err)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

/// Collects generated files in memory, keyed by path.
///
/// Used for dry runs and tests. A later write to the same path replaces the
/// earlier contents, matching [`FsWriter`].
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// All written paths in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl FileWriter for MemoryWriter {
    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
