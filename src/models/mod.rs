//! Data models for the extension repository.
//!
//! - [`ExtensionMeta`] - one index record per successfully parsed extension
//!
//! Records are built by the `parsers` module from annotation headers and
//! serialized by the `repository` module into `index.jsonl`. Serde field
//! renames keep the JSON keys (`versionCode`, `versionName`) compatible with
//! repository consumers.

pub mod extension;

pub use extension::ExtensionMeta;
