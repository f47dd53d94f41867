//! `require '<path>'` directive extraction.
//!
//! A line is a directive when its first whitespace-separated token is exactly
//! `require`. Every single-quoted token on such a line is a target, resolved
//! against the scan root. Quotes cannot be escaped.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use reqsort_graph::{DependencyMap, FileId};
use tracing::{debug, trace};

use crate::collector::{Collection, resolve_under};
use crate::error::{RequirementIssue, Result, ScanError};
use crate::runtime::Runtime;

const DIRECTIVE_KEYWORD: &str = "require";

static QUOTED_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([^']*)'").expect("quoted target pattern is valid"));

/// Targets named by `line`, or `None` when the line is not a directive.
///
/// ```
/// use reqsort_scan::directive_targets;
///
/// let targets: Vec<_> = directive_targets("require 'a.txt' and 'lib/b.txt'").unwrap().collect();
/// assert_eq!(targets, vec!["a.txt", "lib/b.txt"]);
/// assert!(directive_targets("  requires 'a.txt'").is_none());
/// ```
pub fn directive_targets(line: &str) -> Option<impl Iterator<Item = &str>> {
    if line.split_whitespace().next() != Some(DIRECTIVE_KEYWORD) {
        return None;
    }

    Some(
        QUOTED_TARGET
            .captures_iter(line)
            .filter_map(|captures| captures.get(1))
            .map(|target| target.as_str()),
    )
}

/// Every target in `content`, in order of appearance.
pub fn parse_directives(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter_map(directive_targets)
        .flatten()
        .collect()
}

/// Result of extraction: the dependency map and every file's text.
///
/// `sources[i]` is the content of `files[i]`, kept so the writer does not
/// read the tree a second time.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub dependencies: DependencyMap,
    pub sources: Vec<String>,
}

/// Reads collected files and resolves their `require` directives.
#[derive(Debug)]
pub struct DependencyExtractor<'r> {
    runtime: &'r dyn Runtime,
}

impl<'r> DependencyExtractor<'r> {
    pub fn new(runtime: &'r dyn Runtime) -> Self {
        Self { runtime }
    }

    /// Read every file of `collection` in discovery order.
    ///
    /// Stops at the first unreadable file or invalid target. A valid target
    /// is one of the collected files; repeats are kept in order.
    pub fn extract(&self, collection: &Collection) -> Result<Extraction> {
        let mut extraction = Extraction {
            dependencies: DependencyMap::new(),
            sources: Vec::with_capacity(collection.files.len()),
        };

        for file in &collection.files {
            let content = self
                .runtime
                .read_to_string(file.as_path())
                .map_err(|source| ScanError::ReadFailure {
                    path: file.as_path().to_path_buf(),
                    source,
                })?;

            let mut count = 0;
            for target in parse_directives(&content) {
                let resolved = self.resolve(collection, file, target)?;
                extraction.dependencies.push(file.clone(), resolved);
                count += 1;
            }
            if count > 0 {
                trace!(file = %file, requirements = count, "Requirements extracted");
            }

            extraction.sources.push(content);
        }

        debug!(
            files = extraction.sources.len(),
            requirements = extraction.dependencies.requirement_count(),
            "Dependencies extracted"
        );

        Ok(extraction)
    }

    fn resolve(&self, collection: &Collection, file: &FileId, target: &str) -> Result<FileId> {
        let path = resolve_under(&collection.root, Path::new(target));
        let invalid = |reason| ScanError::InvalidRequirement {
            file: file.clone(),
            target: target.to_string(),
            reason,
        };

        match FileId::new(&path) {
            Ok(id) if collection.files.contains(&id) => Ok(id),
            _ if self.runtime.is_file(&path) => Err(invalid(RequirementIssue::OutsideScan)),
            _ => Err(invalid(RequirementIssue::Missing)),
        }
    }
}
