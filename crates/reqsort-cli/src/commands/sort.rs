//! Sort command implementation.

use std::path::Path;

use reqsort_scan::NativeRuntime;
use serde::Serialize;

use crate::cli::{SortArgs, SortMode};
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::pipeline::{self, RunConfig, RunReport};
use crate::status::AppStatus;
use crate::ui;

/// JSON document printed by `reqsort sort --json`.
#[derive(Debug, Serialize)]
struct SortOutput<'a> {
    status: &'a AppStatus,
    mode: SortMode,
    files: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Path>,
}

/// Execute the sort command.
///
/// On success the ordered list is printed and the concatenation written.
/// On failure the status is printed on stdout and returned as
/// [`CliError::Run`](crate::error::CliError::Run), so the process exits with
/// the status' code.
pub fn execute(args: SortArgs) -> Result<()> {
    let config = utils::load_config(&args.source, args.mode)?;
    let run_config = RunConfig::from(&config);

    match pipeline::run(&NativeRuntime, &run_config) {
        Ok(report) if args.json => print_json(&SortOutput {
            status: &AppStatus::ok(),
            mode: report.mode,
            files: &report.files,
            output: Some(&report.output),
        }),
        Ok(report) => print_report(&report),
        Err(err) => {
            let status = utils::failure_status(&err, &config.root);
            if args.json {
                print_json(&SortOutput {
                    status: &status,
                    mode: config.mode,
                    files: &[],
                    output: None,
                })?;
            } else {
                println!("{status}");
            }
            Err(CliError::Run(status))
        }
    }
}

fn print_report(report: &RunReport) -> Result<()> {
    ui::print_order(report.mode.label(), &report.files).context("Failed to print order")?;
    ui::success(&format!(
        "Wrote {} ({}, {} files)",
        report.output.display(),
        ui::format_size(report.bytes as u64),
        report.files.len()
    ));
    Ok(())
}

fn print_json(output: &SortOutput<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
