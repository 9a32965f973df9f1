//! Repository build orchestration.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Fatal precondition**: A missing source directory fails the run before
//!   any output mutation, so a typo never wipes a previously built repository.
//! - **File-level errors**: Headers failing validation, unreadable files, and
//!   failed copies are logged as warnings with the offending file's relative
//!   path, then skipped. The run's status is unaffected by skips.
//! - **User feedback**: Per-file progress goes to stdout, warnings to stderr,
//!   and a summary line shows staged/skipped counts at the end.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::RepositoryConfig;
use crate::models::ExtensionMeta;
use crate::parsers::annotation::{AnnotationError, parse_extension_header};
use crate::repository::discovery::discover_extension_files;
use crate::repository::index::write_index;
use crate::utils::{format_relative_path, validate_file_size};

/// Build the extension repository from annotated source files.
///
/// Discovers every `.js` file under `source_dir`, parses each annotation
/// header, stages successfully parsed files into `output_dir` under their
/// canonical `<key>.js` names, and writes `index.jsonl` describing the
/// collection. The output directory is deleted and recreated first: staging
/// is destructive and non-incremental, so the result always exactly reflects
/// the current input set with no stale leftovers.
///
/// # Arguments
///
/// * `source_dir` - Directory scanned recursively for extension sources
/// * `output_dir` - Repository directory, recreated empty on every build
/// * `config` - Base and cover URLs used for field defaulting
///
/// # Returns
///
/// Returns the staged [`ExtensionMeta`] records in discovery order (the same
/// order as the index lines).
///
/// # Errors
///
/// Returns an error if the source directory does not exist, or if the output
/// directory or index cannot be written. Per-file parse and copy failures are
/// logged and skipped without failing the build.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use extension_repo_builder::{RepositoryConfig, build_repository};
///
/// let config = RepositoryConfig::default();
/// let extensions =
///     build_repository(Path::new("./extensions"), Path::new("./repository/v2"), &config)?;
/// println!("Staged {} extensions", extensions.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_repository(
    source_dir: &Path,
    output_dir: &Path,
    config: &RepositoryConfig,
) -> Result<Vec<ExtensionMeta>> {
    if !source_dir.exists() {
        bail!("Source folder does not exist: {}", source_dir.display());
    }

    // Destructive reset: the staged set must mirror the current scan exactly
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("Failed to clear output directory: {}", output_dir.display())
        })?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let files = discover_extension_files(source_dir)?;
    println!("Found {} files in {}", files.len(), source_dir.display());

    let mut extensions: Vec<ExtensionMeta> = Vec::new();
    let mut skipped = 0;

    for file_path in &files {
        let relative = format_relative_path(file_path, source_dir);
        match stage_extension(file_path, output_dir, config) {
            Ok(meta) => {
                if extensions.iter().any(|existing| existing.key == meta.key) {
                    // Last-processed wins for the staged file; both records stay indexed
                    eprintln!(
                        "Warning: Duplicate key `{}` from {}, staged file overwritten",
                        meta.key, relative
                    );
                }
                println!("Processed {}", relative);
                extensions.push(meta);
            }
            Err(e) => {
                skipped += 1;
                match e.downcast_ref::<AnnotationError>() {
                    Some(annotation_error) => {
                        eprintln!("Warning: Skipping {}: {}", relative, annotation_error);
                    }
                    None => {
                        eprintln!("Warning: Failed to process {}: {:#}", relative, e);
                    }
                }
            }
        }
    }

    write_index(output_dir, &extensions)?;

    println!("Staged {} extensions ({} skipped)", extensions.len(), skipped);

    Ok(extensions)
}

/// Parse one source file and copy it into the output directory.
///
/// The copy uses the original file bytes; only the name changes, to the
/// canonical `<key>.js`.
fn stage_extension(
    file_path: &Path,
    output_dir: &Path,
    config: &RepositoryConfig,
) -> Result<ExtensionMeta> {
    let mut file = fs::File::open(file_path)
        .with_context(|| format!("Failed to open extension file: {}", file_path.display()))?;
    validate_file_size(&file, file_path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read extension file: {}", file_path.display()))?;

    let meta = parse_extension_header(contents.lines(), config)?;

    fs::copy(file_path, output_dir.join(meta.file_name()))
        .with_context(|| format!("Failed to stage extension file: {}", file_path.display()))?;

    Ok(meta)
}
