//! Line-delimited JSON index serialization

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::ExtensionMeta;

/// Name of the index file written at the repository root.
pub const INDEX_FILENAME: &str = "index.jsonl";

/// Write the extension index as one JSON object per line.
///
/// A pre-existing index is removed first; the file always reflects exactly
/// the records of the current build, in collection order. Non-ASCII text is
/// written literally (serde_json does not escape it).
///
/// # Errors
///
/// Returns an error if the old index cannot be removed or the new one cannot
/// be written.
pub fn write_index(output_dir: &Path, extensions: &[ExtensionMeta]) -> Result<PathBuf> {
    let index_path = output_dir.join(INDEX_FILENAME);

    if index_path.exists() {
        fs::remove_file(&index_path)
            .with_context(|| format!("Failed to remove stale index: {}", index_path.display()))?;
    }

    let file = File::create(&index_path)
        .with_context(|| format!("Failed to create index file: {}", index_path.display()))?;
    let mut writer = BufWriter::new(file);

    for extension in extensions {
        let line = serde_json::to_string(extension)
            .with_context(|| format!("Failed to serialize index entry for `{}`", extension.key))?;
        writeln!(writer, "{}", line).context("Failed to write index entry")?;
    }

    writer.flush().context("Failed to flush index file")?;
    Ok(index_path)
}
