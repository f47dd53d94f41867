//! reqsort CLI - order files by their `require` directives.
//!
//! This crate wires the graph core (`reqsort-graph`) and the filesystem
//! stages (`reqsort-scan`) into the `reqsort` binary.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration: defaults, file, environment, flags
//! - [`pipeline`] - Collect, extract, order and write
//! - [`status`] - The status every run ends in, and its exit code
//! - [`error`] - CLI errors and their miette rendering
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored messages and the ordered file list
//! - `commands` - One module per subcommand
//!
//! # Example
//!
//! ```rust,no_run
//! use reqsort_cli::config::ReqsortConfig;
//! use reqsort_cli::pipeline::{self, RunConfig};
//! use reqsort_scan::NativeRuntime;
//!
//! let config = ReqsortConfig {
//!     root: "project".into(),
//!     ..ReqsortConfig::default_config()
//! };
//! let report = pipeline::run(&NativeRuntime, &RunConfig::from(&config)).unwrap();
//! println!("{:?}", report.files);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod status;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
pub use status::{AppStatus, StatusKind};
