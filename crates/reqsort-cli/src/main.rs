//! reqsort - order files by name or by their require directives.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! subcommand. The exit code is the one of the status the run ended in.

use std::process::ExitCode;

use clap::Parser;
use reqsort_cli::{cli, commands, error, logger, ui};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    if args.no_color {
        let plain = miette::set_hook(Box::new(|_| {
            Box::new(miette::MietteHandlerOpts::new().color(false).build())
        }));
        if let Err(err) = plain {
            tracing::debug!("Could not install plain error handler: {err}");
        }
    }

    let result = match args.command {
        cli::Command::Sort(sort_args) => commands::sort_execute(sort_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", error::cli_error_to_miette(err));
            ExitCode::from(code)
        }
    }
}
