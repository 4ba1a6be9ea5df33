//! Colored status lines for the terminal.
//!
//! Successes go to stdout, failures to stderr. Colors are dropped when the
//! stream is not a terminal.

use std::io::{self, IsTerminal, Write};

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub fn success(message: &str) {
    let color = io::stdout().is_terminal();
    let _ = writeln!(io::stdout(), "{}", paint(color, GREEN, "✓", message));
}

pub fn failure(message: &str) {
    let color = io::stderr().is_terminal();
    let _ = writeln!(io::stderr(), "{}", paint(color, RED, "✗", message));
}

fn paint(color: bool, code: &str, marker: &str, message: &str) -> String {
    if color {
        format!("{code}{BOLD}{marker}{RESET} {code}{message}{RESET}")
    } else {
        format!("{marker} {message}")
    }
}
