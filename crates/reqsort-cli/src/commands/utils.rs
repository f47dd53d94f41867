//! Shared helpers for command implementations.

use std::path::Path;

use tracing::warn;

use crate::cli::{SortMode, SourceArgs};
use crate::config::{ConfigOverrides, ReqsortConfig};
use crate::error::{CliError, Result};
use crate::pipeline::PipelineError;
use crate::status::AppStatus;

/// Load the validated configuration for a command.
///
/// `mode` is the command's own `--mode` flag, if it has one.
pub fn load_config(source: &SourceArgs, mode: Option<SortMode>) -> Result<ReqsortConfig> {
    let overrides = ConfigOverrides::from_args(source, mode);
    ReqsortConfig::load_resolved(&overrides, source.config.as_deref())
}

/// Classify a pipeline failure into the status shown to the user.
pub fn failure_status(err: &PipelineError, root: &Path) -> AppStatus {
    let status = AppStatus::from_error(err, root);
    warn!(kind = %status.kind, "Run failed: {err}");
    status
}

/// Print the status line on stdout and turn it into the command's error.
pub fn report_failure(err: &PipelineError, root: &Path) -> CliError {
    let status = failure_status(err, root);
    println!("{status}");
    CliError::Run(status)
}
