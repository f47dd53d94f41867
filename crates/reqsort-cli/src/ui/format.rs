//! Formatting of sizes and ordered file lists.

use std::io::{self, Write};

/// Format file size in human-readable format.
///
/// ```
/// use reqsort_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Write the order header and one path per line.
///
/// ```
/// let mut out = Vec::new();
/// reqsort_cli::ui::write_order(&mut out, "NAME", &["a.txt".to_string()]).unwrap();
/// assert_eq!(out, b"Sorted by NAME files:\na.txt\n");
/// ```
pub fn write_order(out: &mut impl Write, label: &str, files: &[String]) -> io::Result<()> {
    writeln!(out, "Sorted by {label} files:")?;
    for file in files {
        writeln!(out, "{file}")?;
    }
    Ok(())
}

/// Print the ordered file list to stdout.
pub fn print_order(label: &str, files: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_order(&mut lock, label, files)?;
    lock.flush()
}
