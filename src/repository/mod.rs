//! Repository building for the extension feed
//!
//! # Error Handling Strategy
//!
//! The builder combines one fatal precondition with per-file graceful
//! degradation:
//!
//! - **Run-level failure**: A missing source directory aborts before any
//!   processing, leaving the output directory untouched.
//!
//! - **File-level failures**: A header that fails validation, an unreadable
//!   or oversized file, or a failed copy is logged with the file's relative
//!   path and skipped. A single bad file never aborts the run, and any number
//!   of skips still counts as a successful build.
//!
//! - **Summary reporting**: A final line shows staged and skipped counts,
//!   giving users visibility into feed completeness.

pub mod builder;
pub mod discovery;
pub mod index;

pub use builder::build_repository;
pub use discovery::discover_extension_files;
pub use index::{INDEX_FILENAME, write_index};
