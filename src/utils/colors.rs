/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Wrap a placeholder such as "(List is empty)" in grey.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
