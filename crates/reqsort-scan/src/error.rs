//! Error types for the scan stages.

use std::fmt;
use std::path::PathBuf;

use reqsort_graph::{FileId, FileIdError, GraphError};
use thiserror::Error;

use crate::runtime::RuntimeError;

/// Why a `require` target was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementIssue {
    /// Nothing usable exists at the resolved path.
    Missing,

    /// The path exists but was not collected: the output file, or a file
    /// outside the scanned root.
    OutsideScan,
}

impl fmt::Display for RequirementIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementIssue::Missing => f.write_str("does not exist"),
            RequirementIssue::OutsideScan => f.write_str("is not one of the scanned files"),
        }
    }
}

/// Failures produced by the collector, extractor and writer.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The walk found no regular files besides the output file.
    #[error("No files were found under {}", .root.display())]
    NoFilesFound { root: PathBuf },

    /// A `require` directive names a target that cannot be used.
    #[error("Invalid requirement in file: {file} ('{target}' {reason})")]
    InvalidRequirement {
        file: FileId,
        target: String,
        reason: RequirementIssue,
    },

    /// A collected file could not be read as text.
    #[error("Failed to read {}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// The output file could not be written.
    #[error("Failed to write {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// The directory walk itself failed.
    #[error("Failed to scan {}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: RuntimeError,
    },

    /// A walked path could not be turned into a file id.
    #[error("Unusable path: {0}")]
    InvalidPath(#[from] FileIdError),

    /// The collected files could not form a file set.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for scan operations.
pub type Result<T, E = ScanError> = std::result::Result<T, E>;
