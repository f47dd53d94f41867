//! Topological ordering by depth-first post-order.
//!
//! The outer loop walks vertices in index order and starts a descent from
//! every vertex that is not finished yet. A descent follows unfinished
//! successors depth-first and appends a vertex to the output once all of its
//! successors are finished, so every dependency lands before its dependents.
//!
//! The descent is iterative: each stack frame keeps the vertex and a cursor
//! into its adjacency row. This visits vertices in exactly the order a
//! recursive implementation would, but depth is bounded by heap memory rather
//! than the call stack.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::file_id::FileId;
use crate::file_set::FileSet;
use crate::graph::DependencyGraph;

/// How much of the current descent path is checked for back-edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleCheck {
    /// Any edge into a vertex still on the descent path is a cycle.
    #[default]
    Strict,

    /// Only an edge back to the vertex the descent started from is a cycle.
    ///
    /// Edges into other in-progress vertices are skipped as if the target were
    /// already explored. A cycle that does not pass through the start vertex
    /// of the descent that first enters it is therefore not reported, and the
    /// resulting order may violate those edges.
    Origin,
}

/// A successful ordering: a permutation of vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortOrder(Vec<usize>);

impl SortOrder {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Files in output order.
    ///
    /// # Panics
    ///
    /// Panics if the order was produced for a different, smaller file set.
    pub fn files<'f>(&'f self, files: &'f FileSet) -> impl Iterator<Item = &'f FileId> + 'f {
        self.0.iter().map(move |&index| &files[index])
    }

    /// Whether the order contains every index in `0..size` exactly once.
    pub fn is_permutation_of(&self, size: usize) -> bool {
        if self.0.len() != size {
            return false;
        }
        let mut seen = vec![false; size];
        self.0
            .iter()
            .all(|&index| index < size && !std::mem::replace(&mut seen[index], true))
    }

    /// Whether every edge `i -> j` of `graph` has `j` placed before `i`.
    pub fn respects(&self, graph: &DependencyGraph<'_>) -> bool {
        if !self.is_permutation_of(graph.len()) {
            return false;
        }
        let mut position = vec![0; graph.len()];
        for (pos, &index) in self.0.iter().enumerate() {
            position[index] = pos;
        }
        (0..graph.len()).all(|from| {
            graph
                .dependencies(from)
                .all(|to| position[to] < position[from])
        })
    }
}

impl DependencyGraph<'_> {
    /// Produce a dependency-first ordering of all files.
    ///
    /// Fails with [`GraphError::CycleDetected`] on the first back-edge the
    /// selected [`CycleCheck`] recognises; `from` is the vertex whose edge
    /// closes the cycle and `to` is the in-progress vertex it reaches. No
    /// partial order is returned on failure.
    pub fn sort(&self, check: CycleCheck) -> Result<SortOrder> {
        let mut traversal = Traversal::new(self, check);

        for start in 0..self.len() {
            if !traversal.finished[start] {
                traversal.descend(start)?;
            }
        }

        debug!(files = traversal.order.len(), ?check, "Topological order computed");
        Ok(SortOrder::new(traversal.order))
    }
}

struct Frame {
    vertex: usize,
    cursor: usize,
}

struct Traversal<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
    check: CycleCheck,
    finished: Vec<bool>,
    on_path: Vec<bool>,
    stack: Vec<Frame>,
    order: Vec<usize>,
}

impl<'g, 'a> Traversal<'g, 'a> {
    fn new(graph: &'g DependencyGraph<'a>, check: CycleCheck) -> Self {
        Self {
            graph,
            check,
            finished: vec![false; graph.len()],
            on_path: vec![false; graph.len()],
            stack: Vec::new(),
            order: Vec::with_capacity(graph.len()),
        }
    }

    fn enter(&mut self, vertex: usize) {
        self.on_path[vertex] = true;
        self.stack.push(Frame { vertex, cursor: 0 });
    }

    fn descend(&mut self, start: usize) -> Result<()> {
        self.enter(start);

        while let Some(frame) = self.stack.last_mut() {
            let vertex = frame.vertex;

            let mut next = None;
            while let Some(col) = self.graph.matrix.next_successor(vertex, frame.cursor) {
                frame.cursor = col + 1;
                if !self.finished[col] {
                    next = Some(col);
                    break;
                }
            }

            match next {
                Some(target) if self.on_path[target] => {
                    if target == start || self.check == CycleCheck::Strict {
                        return Err(GraphError::CycleDetected {
                            from: self.graph.files[vertex].clone(),
                            to: self.graph.files[target].clone(),
                        });
                    }
                    trace!(vertex, target, "Skipping edge into in-progress vertex");
                }
                Some(target) => self.enter(target),
                None => {
                    self.stack.pop();
                    self.on_path[vertex] = false;
                    if !self.finished[vertex] {
                        self.finished[vertex] = true;
                        self.order.push(vertex);
                    }
                }
            }
        }

        Ok(())
    }
}
