//! Recursive file discovery.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use reqsort_graph::{FileId, FileSet};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::runtime::Runtime;

/// Join `path` onto `root` unless it is already absolute, then clean it.
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    root.join(path).clean()
}

/// Resolve the output file to the path that is both excluded and written.
///
/// The parent directory is canonicalized and the file name re-joined, so an
/// output reached through a symlink matches the walked paths under the
/// canonical root. A parent that does not exist keeps the lexical path.
pub fn resolve_output(runtime: &dyn Runtime, root: &Path, path: &Path) -> PathBuf {
    let joined = resolve_under(root, path);
    let canonical = match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => runtime
            .canonicalize(parent)
            .ok()
            .map(|parent| parent.join(name)),
        _ => None,
    };
    canonical.unwrap_or(joined)
}

/// The outcome of a walk: the canonical root and the files found below it.
#[derive(Debug, Clone)]
pub struct Collection {
    pub root: PathBuf,
    pub files: FileSet,
}

/// Enumerates the regular files below a root directory.
///
/// Discovery order is the runtime's walk order, which is deterministic. The
/// excluded path (normally the output file) is compared by equality after
/// resolution against the canonical root; files that merely share its name
/// are kept.
#[derive(Debug)]
pub struct FileCollector<'r> {
    runtime: &'r dyn Runtime,
    follow_links: bool,
    exclude: Option<PathBuf>,
}

impl<'r> FileCollector<'r> {
    pub fn new(runtime: &'r dyn Runtime) -> Self {
        Self {
            runtime,
            follow_links: false,
            exclude: None,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Skip this path. Relative paths are taken relative to the root; the
    /// path is resolved with [`resolve_output`].
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    /// Walk `root` and return its files.
    ///
    /// Fails with [`ScanError::NoFilesFound`] when nothing is left after
    /// exclusion, and with [`ScanError::Walk`] when the root cannot be
    /// resolved or traversed.
    pub fn collect(&self, root: &Path) -> Result<Collection> {
        let root = self
            .runtime
            .canonicalize(root)
            .map_err(|source| ScanError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

        let excluded = self
            .exclude
            .as_deref()
            .map(|path| resolve_output(self.runtime, &root, path));

        let walked = self
            .runtime
            .walk_files(&root, self.follow_links)
            .map_err(|source| ScanError::Walk {
                root: root.clone(),
                source,
            })?;

        let mut seen = FxHashSet::default();
        let mut files = Vec::with_capacity(walked.len());
        for path in walked {
            if excluded.as_deref() == Some(path.as_path()) {
                debug!(path = %path.display(), "Skipping output file");
                continue;
            }
            let id = FileId::new(&path)?;
            if seen.insert(id.clone()) {
                files.push(id);
            }
        }

        if files.is_empty() {
            return Err(ScanError::NoFilesFound { root });
        }

        debug!(root = %root.display(), files = files.len(), "Files collected");

        Ok(Collection {
            files: FileSet::new(files)?,
            root,
        })
    }
}
