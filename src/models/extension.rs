use serde::{Deserialize, Serialize};

/// Metadata for one extension, as written to the index.
///
/// Field order matches the serialized object layout of the published feed.
/// All six fields are present on every index line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionMeta {
    pub key: String,
    pub url: String,
    pub label: String,
    #[serde(rename = "versionCode")]
    pub version_code: i64,
    #[serde(rename = "versionName")]
    pub version_name: String,
    pub cover: String,
}

impl ExtensionMeta {
    /// File name the extension is staged under, derived from its key.
    ///
    /// The original filename on disk never leaks into the repository; staging
    /// and URL construction both use `<key>.js`.
    pub fn file_name(&self) -> String {
        format!("{}.js", self.key)
    }
}
