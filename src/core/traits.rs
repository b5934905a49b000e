use regex::Regex;
use std::path::Path;

use super::error::Result;
use super::results::KeyType;
use crate::utils::patterns::DEFAULT_SEPARATORS;

/// Checks and canonicalizes candidate keys of one type
pub trait KeyValidator: Send + Sync {
    /// The key type this validator handles
    fn key_type(&self) -> KeyType;

    /// The precompiled pattern a normalized key must match
    fn pattern(&self) -> &Regex;

    /// Characters that split a record into candidates, besides whitespace
    fn separators(&self) -> &[char] {
        DEFAULT_SEPARATORS
    }

    /// Canonical form of a candidate (trimmed, lowercased where case-insensitive)
    fn normalize(&self, candidate: &str) -> String;

    /// Whether an already-normalized candidate is a valid key.
    /// Override for checks a regex cannot express.
    fn matches(&self, candidate: &str) -> bool {
        self.pattern().is_match(candidate)
    }

    /// Normalize, then validate. Returns the key to store, if any.
    fn validate(&self, candidate: &str) -> Option<String> {
        let normalized = self.normalize(candidate);
        if !normalized.is_empty() && self.matches(&normalized) {
            Some(normalized)
        } else {
            None
        }
    }
}

/// Reads raw records from, and renders a key column into, one file format
pub trait FormatHandler: Send + Sync {
    /// Name of the format ("csv", "spreadsheet", "text")
    fn name(&self) -> &str;

    /// Load raw records in file order.
    /// `column` is a 1-based column filter for tabular formats.
    fn read(&self, path: &Path, column: Option<usize>) -> Result<Vec<String>>;

    /// Render a single labelled column into the file's bytes
    fn render(&self, header: &str, rows: &[String]) -> Result<Vec<u8>>;
}
