use crate::core::results::KeyType;
use crate::core::traits::KeyValidator;
use crate::utils::PatternUtils;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dotted quad; octet ranges are checked numerically in `matches`
    static ref IPV4_PATTERN: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").unwrap();
}

pub struct IpValidator {
    pattern: Regex,
}

impl IpValidator {
    pub fn new() -> Self {
        Self {
            pattern: IPV4_PATTERN.clone(),
        }
    }

    fn octets_in_range(&self, candidate: &str) -> bool {
        match self.pattern.captures(candidate) {
            Some(caps) => caps
                .iter()
                .skip(1)
                .flatten()
                .all(|octet| octet.as_str().parse::<u16>().map_or(false, |n| n <= 255)),
            None => false,
        }
    }
}

impl Default for IpValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValidator for IpValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Ip
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// "010.001.000.255" becomes "10.1.0.255"; anything not shaped like
    /// four digit groups is only trimmed.
    fn normalize(&self, candidate: &str) -> String {
        let trimmed = candidate.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        let dotted_digits = parts.len() == 4
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));

        if !dotted_digits {
            return trimmed.to_string();
        }

        parts
            .iter()
            .map(|part| PatternUtils::strip_leading_zeros(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn matches(&self, candidate: &str) -> bool {
        self.octets_in_range(candidate)
    }
}
