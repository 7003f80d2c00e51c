use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Opens `path` for reading, annotating any error with the kind of file
/// (e.g., "project") and its location.
pub fn open(path: &Path, kind: &str) -> Result<File> {
    File::open(path).with_context(|| format!("Opening {} file `{}`", kind, path.display()))
}
