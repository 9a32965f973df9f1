//! Annotation header parser for extension source files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Typed per-file errors**: Parsing one header yields a typed
//!   [`AnnotationError`] so the repository builder can report a missing `key`
//!   (a validation failure) distinctly from a malformed `versionCode` or an
//!   unreadable file. Either way the failure is scoped to that file.
//!
//! - **No run-level failures**: The parser never aborts a build on its own.
//!   The builder catches every per-file error, logs it with the offending
//!   file's relative path, and continues with the remaining files.
//!
//! - **Strict header boundary**: Annotations are only recognized as a
//!   contiguous block at the very top of a file. Scanning stops at the first
//!   non-matching line, so stray `@field` markers in the body are never
//!   picked up.

pub mod annotation;

pub use annotation::{AnnotationError, parse_extension_header, scan_annotations};
