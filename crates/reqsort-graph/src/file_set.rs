//! Vertex set and declared requirements.
//!
//! [`FileSet`] assigns every discovered file a stable vertex index (its
//! position in discovery order). [`DependencyMap`] records, per file, the
//! targets of its `require` directives in the order they were written.

use std::collections::hash_map::Entry;
use std::ops::Index;

use rustc_hash::FxHashMap as HashMap;

use crate::error::{GraphError, Result};
use crate::file_id::FileId;

/// Ordered, duplicate-free sequence of files.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<FileId>,
    index: HashMap<FileId, usize>,
}

impl FileSet {
    /// Build a file set, preserving iteration order.
    ///
    /// Fails with [`GraphError::DuplicateFile`] on the first repeated id.
    pub fn new<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = FileId>,
    {
        let mut set = Self::default();
        for file in files {
            match set.index.entry(file) {
                Entry::Occupied(occupied) => {
                    return Err(GraphError::DuplicateFile(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    set.files.push(vacant.key().clone());
                    vacant.insert(set.files.len() - 1);
                }
            }
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Vertex index of `file`, if it belongs to the set.
    pub fn index_of(&self, file: &FileId) -> Option<usize> {
        self.index.get(file).copied()
    }

    pub fn contains(&self, file: &FileId) -> bool {
        self.index.contains_key(file)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileId> {
        self.files.iter()
    }
}

impl Index<usize> for FileSet {
    type Output = FileId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.files[index]
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a FileId;
    type IntoIter = std::slice::Iter<'a, FileId>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Declared requirements per file.
///
/// Targets keep the order in which they were written and may repeat. A file
/// absent from the map has no requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: HashMap<FileId, Vec<FileId>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single requirement to `file`.
    pub fn push(&mut self, file: FileId, target: FileId) {
        self.entries.entry(file).or_default().push(target);
    }

    /// Requirements of `file`; empty when it declares none.
    pub fn get(&self, file: &FileId) -> &[FileId] {
        self.entries.get(file).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of files that declared at least one directive line.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of requirement targets, duplicates included.
    pub fn requirement_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
