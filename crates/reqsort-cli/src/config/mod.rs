//! Configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and a config file.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use reqsort_graph::CycleCheck;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::{SortMode, SourceArgs};

pub use defaults::*;

/// reqsort configuration - loaded from reqsort.toml, the environment or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReqsortConfig {
    /// Directory to scan
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Ordering applied by `reqsort sort`
    #[serde(default)]
    pub mode: SortMode,

    /// Output file, relative to `root` unless absolute
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Cycle detection policy for the topological sort
    #[serde(default)]
    pub cycle_check: CycleCheck,

    /// Follow symbolic links while scanning
    #[serde(default)]
    pub follow_links: bool,
}

/// Settings given explicitly on the command line.
///
/// Unset fields are skipped when serialized so they do not mask lower
/// configuration layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_check: Option<CycleCheck>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_links: Option<bool>,
}

impl ConfigOverrides {
    pub fn from_args(source: &SourceArgs, mode: Option<SortMode>) -> Self {
        Self {
            root: source.root.clone(),
            mode,
            output: source.output.clone(),
            cycle_check: source.cycle_check.map(Into::into),
            follow_links: source.follow_links.then_some(true),
        }
    }
}
