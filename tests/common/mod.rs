//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test extension source directories
pub struct SourceDirBuilder {
    temp_dir: TempDir,
}

impl SourceDirBuilder {
    /// Create a new builder with an empty source directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the source directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw contents at the given relative path
    pub fn with_file(self, relative_path: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(path, contents).expect("Failed to write source file");
        self
    }

    /// Add an extension source built from an [`ExtensionFileBuilder`]
    pub fn with_extension(self, extension: ExtensionFileBuilder) -> Self {
        extension.create_in(self.temp_dir.path());
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SourceDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one annotated extension source file
pub struct ExtensionFileBuilder {
    relative_path: String,
    annotations: Vec<(String, String)>,
    body: String,
}

impl ExtensionFileBuilder {
    /// Create a new builder for a file at the given relative path
    pub fn new(relative_path: &str) -> Self {
        Self {
            relative_path: relative_path.to_string(),
            annotations: Vec::new(),
            body: "export default {};\n".to_string(),
        }
    }

    /// Append one `// @field value` annotation line
    pub fn annotation(mut self, field: &str, value: &str) -> Self {
        self.annotations.push((field.to_string(), value.to_string()));
        self
    }

    /// Set the script body following the header
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Render the full source text
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        for (field, value) in &self.annotations {
            source.push_str(&format!("// @{} {}\n", field, value));
        }
        source.push_str(&self.body);
        source
    }

    /// Create the file under the given directory
    pub fn create_in(&self, dir: &Path) {
        let path = dir.join(&self.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(path, self.to_source()).expect("Failed to write extension file");
    }
}

/// Helper to create a source directory with a single minimal extension
pub fn minimal_source_dir() -> TempDir {
    SourceDirBuilder::new()
        .with_extension(ExtensionFileBuilder::new("demo.js").annotation("key", "demo"))
        .build()
}

/// Helper to create a realistic source directory with several extensions
pub fn realistic_source_dir() -> TempDir {
    SourceDirBuilder::new()
        .with_extension(
            ExtensionFileBuilder::new("anime-garden.js")
                .annotation("key", "anime-garden")
                .annotation("label", "Anime Garden")
                .annotation("versionCode", "4")
                .annotation("versionName", "1.3"),
        )
        .with_extension(
            ExtensionFileBuilder::new("nested/bangumi-tv.js")
                .annotation("key", "bangumi-tv")
                .annotation("label", "番组计划")
                .annotation("cover", "https://example.org/bangumi.png"),
        )
        .with_extension(ExtensionFileBuilder::new("minimal.js").annotation("key", "minimal"))
        .with_file("notes.md", "not an extension\n")
        .build()
}
