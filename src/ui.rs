//! User-facing error surface.
//!
//! The terminal analog of the web frontend's blocking alert: one line on
//! stderr per reported error. Formatting is split out so callers and
//! tests can route the text elsewhere.

use std::io::Write;

/// Format a user-facing error line.
#[must_use]
pub fn error_message(message: &str) -> String {
    format!("Error: {message}.")
}

/// Write exactly one formatted error line to `out`.
pub fn write_error_message(out: &mut impl Write, message: &str) {
    let _ = writeln!(out, "{}", error_message(message));
}

/// Show an error message to the user on stderr.
pub fn show_error_message(message: &str) {
    write_error_message(&mut std::io::stderr(), message);
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
