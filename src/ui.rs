//! Terminal output.
//!
//! stdout carries only the two-line report; everything else goes to stderr.

use console::style;

/// Print an error message with a red prefix.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Format the report of a bump.
pub fn format_report(old_tag: &str, new_tag: &str) -> String {
    format!("Old Tag: {}\nNew Tag: {}", old_tag, new_tag)
}

/// Print the report of a bump to stdout.
pub fn display_report(old_tag: &str, new_tag: &str) {
    println!("{}", format_report(old_tag, new_tag));
}
