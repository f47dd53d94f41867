//! Concatenated output file.

use std::path::{Path, PathBuf};

use reqsort_graph::SortOrder;
use tracing::info;

use crate::error::{Result, ScanError};
use crate::runtime::Runtime;

/// What a successful write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub bytes: usize,
    pub files: usize,
}

/// Concatenate file contents in `order`, each followed by a newline.
///
/// # Panics
///
/// Panics if `order` holds an index outside `sources`.
pub fn render(sources: &[String], order: &SortOrder) -> String {
    let capacity = order
        .indices()
        .iter()
        .map(|&index| sources[index].len() + 1)
        .sum();

    let mut output = String::with_capacity(capacity);
    for &index in order.indices() {
        output.push_str(&sources[index]);
        output.push('\n');
    }
    output
}

/// Writes the ordered contents to the destination in a single call.
#[derive(Debug)]
pub struct OutputWriter<'r> {
    runtime: &'r dyn Runtime,
}

impl<'r> OutputWriter<'r> {
    pub fn new(runtime: &'r dyn Runtime) -> Self {
        Self { runtime }
    }

    /// Render and write the output. The file is created or truncated.
    pub fn write(&self, path: &Path, sources: &[String], order: &SortOrder) -> Result<WriteSummary> {
        let output = render(sources, order);

        self.runtime
            .write_file(path, output.as_bytes())
            .map_err(|source| ScanError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), bytes = output.len(), "Output written");

        Ok(WriteSummary {
            path: path.to_path_buf(),
            bytes: output.len(),
            files: order.len(),
        })
    }
}
