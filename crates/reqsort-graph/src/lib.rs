//! # reqsort-graph
//!
//! Pure graph data structures and ordering algorithms for files linked by
//! `require '<path>'` directives.
//!
//! This crate performs no I/O. It receives an immutable [`FileSet`] and a
//! [`DependencyMap`] from whatever discovered the files, and answers one
//! question: in which order can the files be emitted so that every dependency
//! comes before the file that requires it?
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐
//! │   FileSet    │    │ DependencyMap  │
//! │ (vertices)   │    │ (declared deps)│
//! └──────┬───────┘    └───────┬────────┘
//!        └─────────┬──────────┘
//!                  ▼
//!        ┌──────────────────┐   two-cycles rejected
//!        │ DependencyGraph  │── while rows are built
//!        │ (AdjacencyMatrix)│
//!        └────────┬─────────┘
//!                 ▼
//!        ┌──────────────────┐   longer cycles rejected
//!        │ sort(CycleCheck) │── during the traversal
//!        └────────┬─────────┘
//!                 ▼
//!            SortOrder
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use reqsort_graph::{CycleCheck, DependencyGraph, DependencyMap, FileId, FileSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = FileId::new("/project/a.txt")?;
//! let z = FileId::new("/project/z.txt")?;
//! let files = FileSet::new([a.clone(), z.clone()])?;
//!
//! let mut deps = DependencyMap::new();
//! deps.push(a.clone(), z.clone());
//!
//! let graph = DependencyGraph::build(&files, &deps)?;
//! let order = graph.sort(CycleCheck::Strict)?;
//!
//! let sorted: Vec<_> = order.files(&files).collect();
//! assert_eq!(sorted, vec![&z, &a]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cycle Checking
//!
//! Direct mutual requirements (including a file requiring itself) are caught
//! while the adjacency matrix is built. Longer cycles are caught by the
//! traversal, whose strictness is selected with [`CycleCheck`].

pub mod adjacency;
pub mod error;
pub mod file_id;
pub mod file_set;
pub mod graph;
pub mod naming;
pub mod topo;

pub use adjacency::{AdjacencyMatrix, Successors};
pub use error::{GraphError, Result};
pub use file_id::{FileId, FileIdError, relative_path};
pub use file_set::{DependencyMap, FileSet};
pub use graph::DependencyGraph;
pub use naming::sort_by_name;
pub use topo::{CycleCheck, SortOrder};
