use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for an extension source file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Formats a path relative to a base directory for progress reporting
///
/// Falls back to the full path when it is not under the base.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use extension_repo_builder::utils::format_relative_path;
///
/// let path = Path::new("/srv/extensions/anime/demo.js");
/// assert_eq!(format_relative_path(path, Path::new("/srv/extensions")), "anime/demo.js");
/// ```
pub fn format_relative_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
