use crate::core::results::KeyType;
use crate::core::traits::KeyValidator;
use lazy_static::lazy_static;
use regex::Regex;

/// Longest hostname allowed in DNS presentation format
const MAX_DOMAIN_LEN: usize = 253;

lazy_static! {
    /// Hyphenated alphanumeric labels ending in an alphabetic TLD
    static ref DOMAIN_PATTERN: Regex =
        Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").unwrap();
}

pub struct DomainValidator {
    pattern: Regex,
}

impl DomainValidator {
    pub fn new() -> Self {
        Self {
            pattern: DOMAIN_PATTERN.clone(),
        }
    }
}

impl Default for DomainValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValidator for DomainValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Domain
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn normalize(&self, candidate: &str) -> String {
        let lowered = candidate.trim().to_lowercase();
        match lowered.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => lowered,
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        candidate.len() <= MAX_DOMAIN_LEN && self.pattern.is_match(candidate)
    }
}
