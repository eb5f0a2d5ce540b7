//! Terminal output helpers.
//!
//! Everything here goes to stderr: stdout is reserved for the CI output
//! binding line.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints, paths
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message (red).
///
/// Example: `✗ missing required variable: AWS_REGION`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ export AWS_REGION`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed).
///
/// Example: `  terraform.tfvars  7 replaced`
pub fn kv(label: impl Display, value: impl Display) {
    if colors_enabled() {
        eprintln!("  {}  {}", style(label).dim().for_stderr(), value);
    } else {
        eprintln!("  {}  {}", label, value);
    }
}
