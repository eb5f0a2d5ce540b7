//! CI output bindings.
//!
//! Subsequent pipeline steps read named values either from a
//! `::set-output` workflow command on stdout or from the file named by
//! `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Format a `::set-output` workflow command.
pub fn set_output_line(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, value)
}

/// Write the `::set-output` line for `name` to `out`.
pub fn write_set_output(out: &mut impl Write, name: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}", set_output_line(name, value))
}

/// Append `name=value` to a `GITHUB_OUTPUT` file, creating it if needed.
pub fn append_output_file(path: &Path, name: &str, value: &str) -> io::Result<()> {
    debug!(path = %path.display(), name, "appending output");
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)
}
