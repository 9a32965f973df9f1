//! Repository configuration and the canonical URL constants.
//!
//! The builder never reads these constants directly; it receives a
//! [`RepositoryConfig`] so tests can substitute alternate values. The
//! constants are the published defaults and must stay byte-identical for
//! URL-derivation compatibility with existing repository consumers.

/// Cover image used when an extension does not declare `@cover`.
pub const DEFAULT_COVER_URL: &str = "https://easybangumi.org/icons/logo-025x.webp";

/// Base URL the published repository is served from.
pub const REPOSITORY_BASE_URL: &str = "https://easybangumi.org/repository/v2";

/// Settings injected into the repository builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Prefix for derived download URLs (no trailing slash).
    pub base_url: String,
    /// Fallback cover image URL.
    pub cover_url: String,
}

impl RepositoryConfig {
    /// Download URL an extension with the given key is served from.
    ///
    /// Always derived from the key, never from the source filename, so two
    /// records with the same key yield the same URL.
    pub fn download_url(&self, key: &str) -> String {
        format!("{}/{}.js", self.base_url, key)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: REPOSITORY_BASE_URL.to_string(),
            cover_url: DEFAULT_COVER_URL.to_string(),
        }
    }
}
