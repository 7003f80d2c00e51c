//! Recursively searches a directory for page sources and builds each one.

use crate::page::{self, build_page, SOURCE_EXTENSION};
use crate::template::Renderer;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` depth-first in directory-listing order and builds a page for
/// every regular file whose name ends in [`SOURCE_EXTENSION`]. Directories
/// that can't be listed are logged and skipped; the first page that fails to
/// build aborts the walk. Returns the output paths in the order they were
/// written.
pub fn walk_directory(renderer: &Renderer, root: &Path) -> page::Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    for result in WalkDir::new(root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(SOURCE_EXTENSION) {
            outputs.push(build_page(renderer, entry.path())?);
        } else {
            debug!("Ignoring '{}'", entry.path().display());
        }
    }
    Ok(outputs)
}
