//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Uncoloured section header.
#[must_use]
pub fn header_text(text: &str) -> String {
    format!("== {text} ==")
}

/// Uncoloured labelled figure, label left-padded to `width`.
#[must_use]
pub fn figure_text(label: &str, value: &str, width: usize) -> String {
    format!("  {label:<width$}  {value}")
}

/// Print a section header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("{}", header_text(text));
    } else {
        println!("{}", style(header_text(text)).bold().cyan());
    }
}

/// Print a labelled figure, label left-padded to `width`.
pub fn print_figure(label: &str, value: &str, width: usize) {
    if is_color_disabled() {
        println!("{}", figure_text(label, value, width));
    } else {
        println!("  {:<width$}  {}", style(label).dim(), style(value).bold());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
