//! In-memory view of a manifest and its `version_code` field.
//!
//! The field is located textually, never by parsing the surrounding format,
//! so every byte outside the digits survives a bump untouched.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::FormatError;

/// Literal key, one or more ASCII digits, then a mandatory trailing space.
const VERSION_CODE_PATTERN: &str = r"version_code: ([0-9]+) ";

fn version_code_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(VERSION_CODE_PATTERN).expect("version_code regex should be valid")
    })
}

/// Old and new values of a single bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bump {
    pub old: u64,
    pub new: u64,
}

/// Full textual contents of a manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestText {
    raw: String,
}

/// Position and value of the first `version_code` match.
struct VersionField {
    digits: Range<usize>,
    value: u64,
}

impl ManifestText {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }

    /// Current value of the first `version_code` field.
    pub fn version_code(&self) -> Result<u64, FormatError> {
        self.locate().map(|field| field.value)
    }

    /// Number of `version_code: <n> ` matches in the text.
    ///
    /// Only the first one is ever rewritten.
    pub fn version_code_count(&self) -> usize {
        version_code_regex().find_iter(&self.raw).count()
    }

    /// Returns the text with the first `version_code` incremented by one.
    ///
    /// Zero-padded values keep their width (`007` becomes `008`) and grow
    /// naturally when the successor needs more digits.
    pub fn bumped(&self) -> Result<(Bump, ManifestText), FormatError> {
        let field = self.locate()?;
        let old = field.value;
        let new = old.checked_add(1).ok_or(FormatError::Overflow(old))?;

        let width = field.digits.len();
        let mut raw = String::with_capacity(self.raw.len() + 1);
        raw.push_str(&self.raw[..field.digits.start]);
        raw.push_str(&format!("{new:0width$}"));
        raw.push_str(&self.raw[field.digits.end..]);

        Ok((Bump { old, new }, ManifestText { raw }))
    }

    fn locate(&self) -> Result<VersionField, FormatError> {
        let digits = version_code_regex()
            .captures(&self.raw)
            .and_then(|caps| caps.get(1))
            .ok_or(FormatError::MissingField)?;

        let value = digits
            .as_str()
            .parse::<u64>()
            .map_err(|source| FormatError::InvalidNumber {
                digits: digits.as_str().to_string(),
                source,
            })?;

        Ok(VersionField {
            digits: digits.range(),
            value,
        })
    }
}

impl From<String> for ManifestText {
    fn from(raw: String) -> Self {
        Self { raw }
    }
}

impl From<&str> for ManifestText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
