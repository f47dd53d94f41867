//! Terminal UI utilities for status messages and formatted output.
//!
//! Messages go to stderr; the ordered file list goes to stdout.
//!
//! ```no_run
//! use reqsort_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote sorted.txt");
//! ui::warning("Origin cycle check in use");
//! ```

mod format;
mod messages;

pub use format::{format_size, print_order, write_order};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_env_disables_color() {
        unsafe {
            std::env::remove_var("FORCE_COLOR");
            std::env::set_var("NO_COLOR", "1");
        }
        let result = should_use_color();
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(!result);
    }

    #[test]
    #[serial]
    fn test_force_color_enables_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        let result = should_use_color();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(result);
    }
}
