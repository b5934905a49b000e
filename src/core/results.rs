use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

/// Kind of key being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Ip,
    Domain,
    Url,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ip => "ip",
            KeyType::Domain => "domain",
            KeyType::Url => "url",
        }
    }

    /// Capitalized name used in output headers ("Ip", "Domain", "Url")
    pub fn title(&self) -> &'static str {
        match self {
            KeyType::Ip => "Ip",
            KeyType::Domain => "Domain",
            KeyType::Url => "Url",
        }
    }

    /// Header of the single output column
    pub fn column_header(&self) -> String {
        format!("Non-Matching {}", self.title())
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of normalized keys that remembers first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning false if it was already present
    pub fn insert(&mut self, key: String) -> bool {
        if self.members.contains(&key) {
            return false;
        }
        self.members.insert(key.clone());
        self.order.push(key);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Add every key of `other`; returns how many were new
    pub fn union_with(&mut self, other: KeySet) -> usize {
        other
            .order
            .into_iter()
            .filter(|key| self.insert(key.clone()))
            .count()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl FromIterator<String> for KeySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for KeySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Origin keys missing from every target file, in origin order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonMatchResult {
    pub key_type: KeyType,
    pub keys: Vec<String>,
}

impl NonMatchResult {
    pub fn header(&self) -> String {
        self.key_type.column_header()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Counters collected while the pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub origin_records: usize,
    pub origin_keys: usize,
    pub origin_rejected: usize,
    pub target_files_found: usize,
    pub target_files_processed: usize,
    pub target_files_skipped: usize,
    pub target_records: usize,
    pub target_rejected: usize,
    pub target_keys: usize,
    pub non_matching: usize,
}

/// Everything a run produced, as written to the JSON summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub key_type: KeyType,
    pub origin: PathBuf,
    pub target_folder: PathBuf,
    pub output: PathBuf,
    pub skipped_files: Vec<PathBuf>,
    pub statistics: RunContext,
    pub non_matching: Vec<String>,
}

impl RunSummary {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
