use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::RepositoryConfig;
use crate::models::ExtensionMeta;

/// Pattern for one annotation line: `// @<field> <value>`
///
/// Must match bit-exactly for feed compatibility: comment marker, optional
/// whitespace, `@`, an identifier of word characters, at least one whitespace
/// character, then free text to end of line.
static ANNOTATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//\s*@(\w+)\s+(.*)$").expect("annotation pattern is valid"));

const FIELD_KEY: &str = "key";
const FIELD_LABEL: &str = "label";
const FIELD_VERSION_CODE: &str = "versionCode";
const FIELD_VERSION_NAME: &str = "versionName";
const FIELD_URL: &str = "url";
const FIELD_COVER: &str = "cover";

const DEFAULT_VERSION_NAME: &str = "0.0";

/// Per-file failures while parsing an annotation header.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The header declared no non-empty `key` field. Covers files with no
    /// annotations at all, since those produce an empty field map.
    #[error("missing required `key` annotation")]
    MissingKey,
    /// `versionCode` was declared but is not an integer.
    #[error("invalid versionCode `{value}`: not an integer")]
    InvalidVersionCode { value: String },
}

/// Scan the contiguous annotation block at the top of a file.
///
/// Each matching line contributes one field; a duplicate field overwrites the
/// earlier value. Scanning stops at the first line that does not match the
/// annotation pattern, so only the leading header is ever read.
pub fn scan_annotations<'a, I>(lines: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fields = HashMap::new();
    for line in lines {
        let Some(captures) = ANNOTATION_PATTERN.captures(line) else {
            break;
        };
        fields.insert(captures[1].to_string(), captures[2].trim().to_string());
    }
    fields
}

/// Parse the annotation header of one extension source into [`ExtensionMeta`].
///
/// Applies the field defaults of the repository feed: `label` falls back to
/// `key`, `versionCode` to 0, `versionName` to "0.0", `cover` to the
/// configured cover URL, and `url` to `<base_url>/<key>.js` unless the header
/// declares its own. Unrecognized fields are silently dropped.
///
/// # Errors
///
/// Returns [`AnnotationError::MissingKey`] if the header has no non-empty
/// `key` field, and [`AnnotationError::InvalidVersionCode`] if `versionCode`
/// is present but not an integer.
pub fn parse_extension_header<'a, I>(
    lines: I,
    config: &RepositoryConfig,
) -> Result<ExtensionMeta, AnnotationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields = scan_annotations(lines);

    let key = fields
        .get(FIELD_KEY)
        .map(String::as_str)
        .filter(|key| !key.is_empty())
        .ok_or(AnnotationError::MissingKey)?;

    let version_code = match fields.get(FIELD_VERSION_CODE) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AnnotationError::InvalidVersionCode { value: raw.clone() })?,
        None => 0,
    };

    Ok(ExtensionMeta {
        key: key.to_string(),
        url: fields.get(FIELD_URL).cloned().unwrap_or_else(|| config.download_url(key)),
        label: fields.get(FIELD_LABEL).cloned().unwrap_or_else(|| key.to_string()),
        version_code,
        version_name: fields
            .get(FIELD_VERSION_NAME)
            .cloned()
            .unwrap_or_else(|| DEFAULT_VERSION_NAME.to_string()),
        cover: fields.get(FIELD_COVER).cloned().unwrap_or_else(|| config.cover_url.clone()),
    })
}
