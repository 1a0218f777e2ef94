// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("SALONTA_DOCS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

/// Disclosure marker for an outline line.
pub fn format_panel(open: bool, label: &str, count: usize) -> String {
    let marker = if open { "▾" } else { "▸" };
    format!(
        "{} {} {}",
        marker.cyan().bold(),
        label.bold(),
        format!("({})", count).dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers_keep_message() {
        colored::control::set_override(false);
        assert_eq!(format_success("ok"), "✓ ok");
        assert_eq!(format_error("failed"), "✗ failed");
        assert_eq!(format_warning("skipped"), "⚠ skipped");
        assert_eq!(format_panel(true, "2024", 3), "▾ 2024 (3)");
        assert_eq!(format_panel(false, "2023", 1), "▸ 2023 (1)");
    }
}
