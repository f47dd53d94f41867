//! Command-line interface definition for reqsort.
//!
//! # Command Structure
//!
//! - `reqsort sort` - Order files and write the concatenated output
//! - `reqsort check` - Validate requirements and detect cycles
//! - `reqsort graph` - Print the dependency graph as DOT or JSON

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, GraphArgs, SortArgs, SourceArgs};
pub use enums::*;

/// reqsort - order files by their `require` directives
#[derive(Parser, Debug)]
#[command(
    name = "reqsort",
    version,
    about = "Order files by name or by their require directives and concatenate them",
    long_about = "reqsort scans a directory for files, reads `require '<path>'` lines,\n\
                  and orders the files either by path or so that every file follows the\n\
                  files it requires. The ordered contents are concatenated into one file."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
