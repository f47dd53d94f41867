//! Check command implementation.
//!
//! Runs every stage up to the topological sort and reports graph statistics.
//! Nothing is written.

use reqsort_graph::CycleCheck;
use reqsort_scan::NativeRuntime;

use crate::cli::{CheckArgs, SortMode};
use crate::commands::utils;
use crate::error::Result;
use crate::pipeline::{self, RunConfig};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns [`CliError::Run`](crate::error::CliError::Run) for missing files,
/// invalid requirements and cycles, with the same statuses `sort` uses.
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = utils::load_config(&args.source, Some(SortMode::Topology))?;
    ui::info(&format!("Checking {}", config.root.display()));
    if config.cycle_check == CycleCheck::Origin {
        ui::warning("Origin cycle check only reports cycles through the file a descent started from");
    }

    let summary = pipeline::check(&NativeRuntime, &RunConfig::from(&config))
        .map_err(|err| utils::report_failure(&err, &config.root))?;

    ui::success(&format!(
        "{} files, {} requirements, {} edges",
        summary.files, summary.requirements, summary.edges
    ));
    if summary.leaves == summary.files {
        ui::info("No file requires another");
    } else {
        ui::info(&format!("Top-level files: {}", summary.top_level.join(", ")));
    }
    ui::success("No cycles found");
    Ok(())
}
