//! Console output helpers
//!
//! Every user-facing line goes through these helpers so that success,
//! failure and warning lines carry the same marks everywhere.

use console::Style;

pub const VALID_MARK: &str = "\u{2705}";
pub const INVALID_MARK: &str = "\u{274C}";
pub const WARNING_MARK: &str = "\u{26A0}";

/// Format a success line
pub fn valid_line(message: impl std::fmt::Display) -> String {
    format!("{VALID_MARK} {message}")
}

/// Format a failure line
pub fn invalid_line(message: impl std::fmt::Display) -> String {
    format!("{INVALID_MARK} {message}")
}

/// Format a warning line
pub fn warning_line(message: impl std::fmt::Display) -> String {
    format!(
        "{} {}",
        Style::new().yellow().apply_to(WARNING_MARK),
        message
    )
}

pub fn valid(message: impl std::fmt::Display) {
    println!("{}", valid_line(message));
}

/// Print a failure line to stderr
pub fn invalid(message: impl std::fmt::Display) {
    eprintln!("{}", invalid_line(message));
}

pub fn warn(message: impl std::fmt::Display) {
    println!("{}", warning_line(message));
}

/// Print a section header, preceded by an empty line
pub fn section(message: impl std::fmt::Display) {
    println!();
    println!("{} {}", Style::new().bold().green().apply_to(">"), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_carry_marks() {
        assert_eq!(valid_line("done"), "\u{2705} done");
        assert_eq!(invalid_line("boom"), "\u{274C} boom");
        assert!(warning_line("careful").ends_with(" careful"));
        assert!(warning_line("careful").contains(WARNING_MARK));
    }
}
