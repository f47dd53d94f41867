//! # reqsort-scan
//!
//! Filesystem side of reqsort: everything that reads or writes the tree.
//!
//! ```text
//! root dir ──▶ FileCollector ──▶ Collection { root, FileSet }
//!                                      │
//!                                      ▼
//!                          DependencyExtractor ──▶ Extraction { DependencyMap, sources }
//!                                      │
//!              (reqsort-graph orders the files)
//!                                      │
//!                                      ▼
//!                              OutputWriter ──▶ sorted.txt
//! ```
//!
//! All access goes through [`Runtime`]; [`NativeRuntime`] is the real
//! filesystem. With the `test-utils` feature, `MemoryRuntime` provides an
//! in-memory tree.

pub mod collector;
pub mod error;
pub mod extractor;
pub mod runtime;
pub mod writer;

pub use collector::{Collection, FileCollector, resolve_output, resolve_under};
pub use error::{RequirementIssue, Result, ScanError};
pub use extractor::{DependencyExtractor, Extraction, directive_targets, parse_directives};
pub use runtime::{NativeRuntime, Runtime, RuntimeError, RuntimeResult};
pub use writer::{OutputWriter, WriteSummary, render};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::MemoryRuntime;
