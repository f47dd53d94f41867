//! In-memory runtime for tests.
//!
//! Files live in a path-ordered map; directories exist implicitly as the
//! ancestors of stored files. Paths must be absolute.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use path_clean::PathClean;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Virtual filesystem keyed by cleaned absolute path.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    read_only: bool,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Reject every write with an I/O error.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Store `content` at `path`, replacing any previous content.
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.files
            .lock()
            .insert(path.as_ref().clean(), content.into());
    }

    /// Current content of `path`, if it is a stored file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().get(&path.as_ref().clean()).cloned()
    }
}

impl Runtime for MemoryRuntime {
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String> {
        let bytes = self
            .contents(path)
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))?;
        String::from_utf8(bytes).map_err(|_| RuntimeError::InvalidUtf8(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        if self.read_only {
            return Err(RuntimeError::Io(format!(
                "Failed to write {}: read-only filesystem",
                path.display()
            )));
        }
        if self.is_dir(path) {
            return Err(RuntimeError::Io(format!(
                "Failed to write {}: is a directory",
                path.display()
            )));
        }
        self.insert(path, content);
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().contains_key(&path.clean())
    }

    fn is_dir(&self, path: &Path) -> bool {
        let dir = path.clean();
        self.files
            .lock()
            .keys()
            .any(|file| file != &dir && file.starts_with(&dir))
    }

    fn canonicalize(&self, path: &Path) -> RuntimeResult<PathBuf> {
        let cleaned = path.clean();
        if cleaned.is_absolute() && (self.is_file(&cleaned) || self.is_dir(&cleaned)) {
            Ok(cleaned)
        } else {
            Err(RuntimeError::FileNotFound(path.to_path_buf()))
        }
    }

    fn walk_files(&self, root: &Path, _follow_links: bool) -> RuntimeResult<Vec<PathBuf>> {
        let root = root.clean();
        if !self.is_dir(&root) {
            return Err(RuntimeError::FileNotFound(root));
        }

        // BTreeMap order compares component by component, which matches a
        // name-sorted depth-first walk.
        Ok(self
            .files
            .lock()
            .keys()
            .filter(|file| file.starts_with(&root))
            .cloned()
            .collect())
    }
}
