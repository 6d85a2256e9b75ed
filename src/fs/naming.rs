//! Filename parsing and manipulation.

use regex::Regex;

use crate::error::{Error, Result};

/// Canonical 8-4-4-4-12 hex UUID, matched anywhere in a name.
const UUID_PATTERN: &str =
    r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// Strip every character outside `[A-Za-z0-9._-]`.
///
/// Returns an error if nothing usable is left.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let sanitized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        return Err(Error::InvalidFilename(format!(
            "'{}' has no usable characters",
            name
        )));
    }

    Ok(sanitized)
}

/// Split a filename into stem and extension (with leading dot).
///
/// A leading dot does not start an extension, so `.png` has none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], &name[pos..]),
        _ => (name, ""),
    }
}

/// Check whether `name` has one of `extensions`, ignoring case.
pub fn has_extension(name: &str, extensions: &[String]) -> bool {
    let (_, ext) = split_extension(name);
    !ext.is_empty() && extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Derives the ordering key for vendor filenames.
///
/// Near-duplicate names such as `Default_Hero_<uuid>_7` and `Default_Hero_2`
/// both reduce to `hero`.
#[derive(Debug)]
pub struct KeyNormalizer {
    prefix: String,
    uuid: Regex,
    counter_suffix: Regex,
    underscores: Regex,
}

impl KeyNormalizer {
    /// Create a normalizer that strips `prefix` from the start of each stem.
    pub fn new(prefix: &str) -> Result<Self> {
        Ok(Self {
            prefix: prefix.to_string(),
            uuid: Regex::new(UUID_PATTERN)?,
            counter_suffix: Regex::new(r"_[0-9]+$")?,
            underscores: Regex::new(r"_+")?,
        })
    }

    /// Normalize a file stem into its sort key.
    pub fn normalize(&self, stem: &str) -> String {
        let s = stem.strip_prefix(self.prefix.as_str()).unwrap_or(stem);
        let s = self.uuid.replace_all(s, "");
        let s = self.counter_suffix.replace(&s, "");
        let s = self.underscores.replace_all(&s, "_");
        s.trim_matches('_').to_lowercase()
    }
}
