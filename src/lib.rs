//! Extension Repository Builder - Generate a repository feed from annotated extension sources
//!
//! This library scans a directory of extension source files (`.js`), reads the
//! `// @field value` annotation header at the top of each file, stages every
//! qualifying file into a clean output directory under its canonical
//! `<key>.js` name, and writes a line-delimited JSON index describing the
//! collected extensions. It supports:
//!
//! - Parsing contiguous annotation headers into [`ExtensionMeta`] records
//! - Recursive, deterministically ordered source discovery
//! - Destructive output staging (the output always mirrors the current scan)
//! - Serializing the index as one JSON object per line (`index.jsonl`)
//!
//! # Example
//!
//! ```no_run
//! use extension_repo_builder::{RepositoryConfig, build_repository};
//! use std::path::Path;
//!
//! let config = RepositoryConfig::default();
//! let extensions =
//!     build_repository(Path::new("./extensions"), Path::new("./repository/v2"), &config)?;
//! println!("Staged {} extensions", extensions.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod parsers;
pub mod repository;
pub mod utils;

// Re-export commonly used types
pub use config::RepositoryConfig;
pub use models::ExtensionMeta;
pub use parsers::annotation::parse_extension_header;
pub use repository::builder::build_repository;
