//! Dependency graph construction and queries.

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::adjacency::{AdjacencyMatrix, Successors};
use crate::error::{GraphError, Result};
use crate::file_id::FileId;
use crate::file_set::{DependencyMap, FileSet};

/// Directed "requires" graph over a [`FileSet`].
///
/// Vertex `i` is `files[i]`; an edge `i -> j` means file `i` requires file `j`.
/// The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    pub(crate) files: &'a FileSet,
    pub(crate) matrix: AdjacencyMatrix,
}

impl<'a> DependencyGraph<'a> {
    /// Build the adjacency matrix from declared requirements.
    ///
    /// Rows are filled in vertex order. After row `i` is known, its cells are
    /// checked in ascending column order against the mirrored cell; the first
    /// pair with edges in both directions (a file requiring itself included)
    /// fails the build with [`GraphError::CycleDetected`]. Longer cycles are
    /// left to [`sort`](Self::sort).
    ///
    /// Every target must be a member of `files`, otherwise the build fails
    /// with [`GraphError::UnknownDependency`].
    pub fn build(files: &'a FileSet, dependencies: &DependencyMap) -> Result<Self> {
        let mut matrix = AdjacencyMatrix::new(files.len());

        for (row, file) in files.iter().enumerate() {
            for target in dependencies.get(file) {
                let col = files
                    .index_of(target)
                    .ok_or_else(|| GraphError::UnknownDependency {
                        file: file.clone(),
                        target: target.clone(),
                    })?;
                matrix.insert(row, col);
            }

            if let Some(col) = matrix.successors(row).find(|&col| matrix.contains(col, row)) {
                return Err(GraphError::CycleDetected {
                    from: file.clone(),
                    to: files[col].clone(),
                });
            }
        }

        debug!(
            files = files.len(),
            edges = matrix.edge_count(),
            "Dependency graph built"
        );

        Ok(Self { files, matrix })
    }

    /// The vertex set this graph was built over.
    pub fn files(&self) -> &'a FileSet {
        self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of distinct edges. Repeated requirements count once.
    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    /// Vertices required by `index`, ascending.
    pub fn dependencies(&self, index: usize) -> Successors<'_> {
        self.matrix.successors(index)
    }

    /// Vertices that require `index`, ascending.
    pub fn dependents(&self, index: usize) -> Vec<usize> {
        (0..self.len())
            .filter(|&row| self.matrix.contains(row, index))
            .collect()
    }

    /// Vertices with no requirements of their own.
    pub fn leaves(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&row| self.matrix.successors(row).next().is_none())
            .collect()
    }

    /// Copy the graph into a `petgraph` graph, node `i` carrying `files[i]`.
    ///
    /// Node indices match vertex indices.
    pub fn to_petgraph(&self) -> DiGraph<FileId, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .files
            .iter()
            .map(|file| graph.add_node(file.clone()))
            .collect();

        for (row, &from) in nodes.iter().enumerate() {
            for col in self.matrix.successors(row) {
                graph.add_edge(from, nodes[col], ());
            }
        }

        graph
    }
}
