//! In-place rewrite of template files.
//!
//! The substituted content is written to a temporary file next to the
//! target and renamed over it, so readers see either the old or the new
//! file and never a partial write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::core::template::{Replacement, TokenSet};
use crate::error::{Result, RewriteError};

/// Outcome of rewriting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    /// Per-token replacement counts, in application order.
    pub replacements: Vec<Replacement>,
    /// Whether the file content changed.
    pub changed: bool,
}

impl RewriteReport {
    /// Tokens that did not occur in the file.
    pub fn missing_tokens(&self) -> impl Iterator<Item = &str> {
        self.replacements
            .iter()
            .filter(|r| r.count == 0)
            .map(|r| r.token.as_str())
    }

    /// Total number of replaced occurrences.
    pub fn total(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}

/// Substitute `tokens` into the file at `path` and write it back.
///
/// # Errors
///
/// Returns `RewriteError::Read` if the file cannot be read as UTF-8 text and
/// `RewriteError::Write` if the replacement cannot be written. On error the
/// original file is left as it was.
pub fn rewrite(path: &Path, tokens: &TokenSet) -> Result<RewriteReport> {
    process(path, tokens, true)
}

/// Compute what [`rewrite`] would do without touching the file.
pub fn preview(path: &Path, tokens: &TokenSet) -> Result<RewriteReport> {
    process(path, tokens, false)
}

fn process(path: &Path, tokens: &TokenSet, persist: bool) -> Result<RewriteReport> {
    debug!(path = %path.display(), tokens = tokens.len(), "rewriting template");

    let original = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (updated, replacements) = tokens.apply_counted(&original);
    let report = RewriteReport {
        path: path.to_path_buf(),
        changed: updated != original,
        replacements,
    };

    for token in report.missing_tokens() {
        warn!(path = %path.display(), token, "placeholder not found");
    }

    if persist && report.changed {
        replace_contents(path, updated.as_bytes()).map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(
        path = %path.display(),
        replaced = report.total(),
        changed = report.changed,
        written = persist && report.changed,
        "template processed"
    );

    Ok(report)
}

/// Atomically replace the contents of `path`, keeping its permissions.
///
/// Symlinks are resolved first so the link target is replaced and the link
/// itself stays in place.
fn replace_contents(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    // Dropped (and removed) on any early return.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
