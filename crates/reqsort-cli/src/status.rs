//! Run status reported to the user.
//!
//! Every run ends in exactly one [`AppStatus`]. The first failing stage
//! decides the kind; nothing after it runs.

use std::fmt;
use std::path::Path;

use reqsort_graph::{GraphError, relative_path};
use reqsort_scan::ScanError;
use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineError;

/// Outcome category of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    #[default]
    Ok,
    NoFilesFound,
    InvalidRequirement,
    CycleDetected,
    ReadFailure,
    WriteFailure,
    Unexpected,
}

impl StatusKind {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            StatusKind::Ok => 0,
            StatusKind::Unexpected => 1,
            StatusKind::NoFilesFound => 2,
            StatusKind::InvalidRequirement => 3,
            StatusKind::CycleDetected => 4,
            StatusKind::ReadFailure => 5,
            StatusKind::WriteFailure => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Ok => "OK",
            StatusKind::NoFilesFound => "NO_FILES_FOUND",
            StatusKind::InvalidRequirement => "INVALID_REQUIREMENT",
            StatusKind::CycleDetected => "CYCLE_DETECTED",
            StatusKind::ReadFailure => "READ_FAILURE",
            StatusKind::WriteFailure => "WRITE_FAILURE",
            StatusKind::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::ok()
    }
}

impl AppStatus {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(StatusKind::Ok, "OK")
    }

    pub fn is_ok(&self) -> bool {
        self.kind == StatusKind::Ok
    }

    /// Classify a pipeline failure, rendering file paths relative to `root`.
    pub fn from_error(err: &PipelineError, root: &Path) -> Self {
        match err {
            PipelineError::Scan(scan) => Self::from_scan_error(scan, root),
            PipelineError::Graph(graph) => Self::from_graph_error(graph, root),
        }
    }

    fn from_scan_error(err: &ScanError, root: &Path) -> Self {
        match err {
            ScanError::NoFilesFound { .. } => {
                Self::new(StatusKind::NoFilesFound, "No files were found")
            }
            ScanError::InvalidRequirement {
                file,
                target,
                reason,
            } => Self::new(
                StatusKind::InvalidRequirement,
                format!(
                    "Invalid requirement in file: {} ('{target}' {reason})",
                    file.relative_to(root)
                ),
            ),
            ScanError::ReadFailure { path, source } => Self::new(
                StatusKind::ReadFailure,
                format!("Failed to read {}: {source}", relative_path(path, root)),
            ),
            ScanError::Walk { root: walked, source } => Self::new(
                StatusKind::ReadFailure,
                format!("Failed to scan {}: {source}", walked.display()),
            ),
            ScanError::WriteFailure { path, source } => Self::new(
                StatusKind::WriteFailure,
                format!("Failed to write {}: {source}", relative_path(path, root)),
            ),
            ScanError::Graph(graph) => Self::from_graph_error(graph, root),
            other => Self::new(StatusKind::Unexpected, other.to_string()),
        }
    }

    fn from_graph_error(err: &GraphError, root: &Path) -> Self {
        match err {
            GraphError::CycleDetected { from, to } => Self::new(
                StatusKind::CycleDetected,
                format!(
                    "Found cycle: {} -> {}",
                    from.relative_to(root),
                    to.relative_to(root)
                ),
            ),
            other => Self::new(StatusKind::Unexpected, other.to_string()),
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {} Message: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqsort_graph::FileId;
    use reqsort_scan::{RequirementIssue, RuntimeError};
    use std::path::PathBuf;

    fn id(path: &str) -> FileId {
        FileId::new(path).unwrap()
    }

    #[test]
    fn test_display_format() {
        let status = AppStatus::new(StatusKind::NoFilesFound, "No files were found");
        assert_eq!(
            status.to_string(),
            "Status: NO_FILES_FOUND Message: No files were found"
        );
        assert_eq!(AppStatus::default().to_string(), "Status: OK Message: OK");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let kinds = [
            StatusKind::Ok,
            StatusKind::NoFilesFound,
            StatusKind::InvalidRequirement,
            StatusKind::CycleDetected,
            StatusKind::ReadFailure,
            StatusKind::WriteFailure,
            StatusKind::Unexpected,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
        assert_eq!(StatusKind::Ok.exit_code(), 0);
    }

    #[test]
    fn test_cycle_message_is_root_relative() {
        let err = PipelineError::Graph(GraphError::CycleDetected {
            from: id("/p/lib/y.txt"),
            to: id("/p/x.txt"),
        });
        let status = AppStatus::from_error(&err, Path::new("/p"));
        assert_eq!(status.kind, StatusKind::CycleDetected);
        assert_eq!(status.message, "Found cycle: lib/y.txt -> x.txt");
    }

    #[test]
    fn test_requirement_message_names_file_and_target() {
        let err = PipelineError::Scan(ScanError::InvalidRequirement {
            file: id("/p/b.txt"),
            target: "nope.txt".to_string(),
            reason: RequirementIssue::Missing,
        });
        let status = AppStatus::from_error(&err, Path::new("/p"));
        assert_eq!(status.kind, StatusKind::InvalidRequirement);
        assert_eq!(
            status.message,
            "Invalid requirement in file: b.txt ('nope.txt' does not exist)"
        );
    }

    #[test]
    fn test_io_failures_classified() {
        let read = PipelineError::Scan(ScanError::ReadFailure {
            path: PathBuf::from("/p/a.bin"),
            source: RuntimeError::InvalidUtf8(PathBuf::from("/p/a.bin")),
        });
        assert_eq!(
            AppStatus::from_error(&read, Path::new("/p")).kind,
            StatusKind::ReadFailure
        );

        let write = PipelineError::Scan(ScanError::WriteFailure {
            path: PathBuf::from("/p/sorted.txt"),
            source: RuntimeError::Io("denied".to_string()),
        });
        let status = AppStatus::from_error(&write, Path::new("/p"));
        assert_eq!(status.kind, StatusKind::WriteFailure);
        assert!(status.message.starts_with("Failed to write sorted.txt"));
    }

    #[test]
    fn test_io_messages_use_forward_slashes() {
        let read = PipelineError::Scan(ScanError::ReadFailure {
            path: Path::new("/p").join("lib").join("a.bin"),
            source: RuntimeError::InvalidUtf8(PathBuf::from("/p/lib/a.bin")),
        });
        let status = AppStatus::from_error(&read, Path::new("/p"));
        assert!(status.message.starts_with("Failed to read lib/a.bin"));
    }

    #[test]
    fn test_internal_errors_are_unexpected() {
        let err = PipelineError::Graph(GraphError::DuplicateFile(id("/p/a.txt")));
        assert_eq!(
            AppStatus::from_error(&err, Path::new("/p")).kind,
            StatusKind::Unexpected
        );
    }

    #[test]
    fn test_serializes_kind_in_screaming_case() {
        let json = serde_json::to_value(AppStatus::new(StatusKind::CycleDetected, "x")).unwrap();
        assert_eq!(json["kind"], "CYCLE_DETECTED");
        assert_eq!(json["message"], "x");
    }
}
