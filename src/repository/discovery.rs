use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// File extension an extension source must carry.
pub const SOURCE_EXTENSION: &str = "js";

/// Recursively collect all extension source files under a directory.
///
/// Traversal is sorted by file name within each directory, so the discovery
/// order (and therefore the index line order) is deterministic across runs on
/// an unchanged tree.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn discover_extension_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read directory entry under {}", source_dir.display())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
