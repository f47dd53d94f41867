//! Command implementations.
//!
//! - [`sort`] - Order files and write the concatenation
//! - [`check`] - Validate requirements and detect cycles
//! - [`graph`] - Print the dependency graph
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod graph;
pub mod sort;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use graph::execute as graph_execute;
pub use sort::execute as sort_execute;
