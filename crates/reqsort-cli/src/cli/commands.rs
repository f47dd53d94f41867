use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::enums::{CycleCheckArg, GraphFormat, SortMode};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Order the files under a directory and concatenate them
    ///
    /// Collects every regular file below ROOT, validates their `require`
    /// directives, orders them and writes the concatenation to the output
    /// file (sorted.txt by default).
    Sort(SortArgs),

    /// Validate requirements and look for cycles without writing anything
    Check(CheckArgs),

    /// Print the dependency graph
    Graph(GraphArgs),
}

/// Options shared by every command that scans a directory.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory to scan
    ///
    /// Defaults to the `root` setting of the configuration, or the current
    /// directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Path to a configuration file (TOML or JSON)
    ///
    /// Without it, reqsort.toml is looked up in ROOT and then in the
    /// current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file, relative to ROOT unless absolute
    ///
    /// The output file is never collected as an input.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Cycle detection policy for the topological sort
    #[arg(long, value_enum, value_name = "POLICY")]
    pub cycle_check: Option<CycleCheckArg>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,
}

/// Arguments for `reqsort sort`.
#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Ordering to apply
    #[arg(short, long, value_enum)]
    pub mode: Option<SortMode>,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reqsort check`.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for `reqsort graph`.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = GraphFormat::Dot)]
    pub format: GraphFormat,
}
