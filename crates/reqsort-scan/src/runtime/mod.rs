//! Filesystem abstraction for the scan stages.
//!
//! The collector, extractor and writer never touch `std::fs` directly; they
//! go through the `Runtime` trait so tests can run the whole pipeline against
//! an in-memory tree.

pub mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use std::path::{Path, PathBuf};

pub use native::NativeRuntime;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryRuntime;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File exists but its content is not valid UTF-8
    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Synchronous filesystem operations used by the scan stages.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> RuntimeResult<String>;

    /// Create or truncate `path` and write `content` to it.
    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()>;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Absolute, normalised form of an existing path.
    fn canonicalize(&self, path: &Path) -> RuntimeResult<PathBuf>;

    /// Every regular file below `root`, recursively.
    ///
    /// Order must be deterministic for a given tree: entries of a directory
    /// are visited sorted by file name, and a subdirectory's files are listed
    /// where the subdirectory sorts. Symbolic links are only followed when
    /// `follow_links` is set.
    fn walk_files(&self, root: &Path, follow_links: bool) -> RuntimeResult<Vec<PathBuf>>;
}
