//! Logging setup using the `tracing` ecosystem.
//!
//! Logs go to stderr so that stdout only carries the ordered file list (or
//! JSON) and can be piped.
//!
//! # Example
//!
//! ```rust,no_run
//! use reqsort_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Scanning");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "reqsort=debug,reqsort_graph=debug,reqsort_scan=debug,reqsort_cli=debug";
const QUIET_FILTER: &str = "reqsort=error";
const DEFAULT_FILTER: &str = "reqsort=info,reqsort_graph=info,reqsort_scan=info,reqsort_cli=info";

/// Pick the filter directives for the given flags.
///
/// The logging level is determined in this order:
/// 1. `--verbose`: DEBUG for reqsort crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for reqsort crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}
