//! Error types for graph construction and ordering.

use thiserror::Error;

use crate::file_id::FileId;

/// Failures produced by the pure graph layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A cyclic requirement was found.
    ///
    /// `from` is the file whose requirement closes the cycle and `to` is the
    /// file it points back to.
    #[error("Found cycle: {from} -> {to}")]
    CycleDetected { from: FileId, to: FileId },

    /// The same file was handed to [`FileSet::new`](crate::FileSet::new) twice.
    #[error("File appears more than once in the file set: {0}")]
    DuplicateFile(FileId),

    /// A dependency target is not a member of the file set.
    #[error("{file} requires {target}, which is not part of the file set")]
    UnknownDependency { file: FileId, target: FileId },
}

impl GraphError {
    /// Whether this error reports a dependency cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, GraphError::CycleDetected { .. })
    }
}

/// Result type alias for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
