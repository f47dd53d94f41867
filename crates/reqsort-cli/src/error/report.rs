//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use crate::status::StatusKind;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Run(status) => {
            let help = match status.kind {
                StatusKind::NoFilesFound => "Point reqsort at a directory that contains files",
                StatusKind::InvalidRequirement => {
                    "Targets are resolved from the scan root, not from the requiring file"
                }
                StatusKind::CycleDetected => {
                    "Remove one of the require lines that close the cycle, or use --mode name"
                }
                StatusKind::ReadFailure => "Every collected file must be readable UTF-8 text",
                StatusKind::WriteFailure => "Check permissions of the output location",
                StatusKind::Ok | StatusKind::Unexpected => "Run again with --verbose for details",
            };
            miette::miette!(help = help, "{}", status)
        }
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::InvalidValue { field, value, hint } => {
            miette::miette!(help = hint, "Invalid value for '{}': {}", field, value)
        }
        _ => miette::miette!("Configuration error: {}", err),
    }
}
