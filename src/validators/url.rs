use crate::core::results::KeyType;
use crate::core::traits::KeyValidator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional http/https/ftp scheme, a host (domain, IPv4 or localhost),
    /// optional port, optional path, query or fragment
    static ref URL_PATTERN: Regex = Regex::new(
        r"^(?:(?:https?|ftp)://)?(?P<host>(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}|(?:\d{1,3}\.){3}\d{1,3}|localhost)(?::(?P<port>\d{1,5}))?(?:[/?#]\S*)?$"
    )
    .unwrap();
}

pub struct UrlValidator {
    pattern: Regex,
}

impl UrlValidator {
    pub fn new() -> Self {
        Self {
            pattern: URL_PATTERN.clone(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValidator for UrlValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Url
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// `,` `;` and `|` are legal inside a URL
    fn separators(&self) -> &[char] {
        &[]
    }

    fn normalize(&self, candidate: &str) -> String {
        candidate.trim().to_lowercase()
    }

    fn matches(&self, candidate: &str) -> bool {
        let caps = match self.pattern.captures(candidate) {
            Some(caps) => caps,
            None => return false,
        };

        if let Some(port) = caps.name("port") {
            if port.as_str().parse::<u16>().is_err() {
                return false;
            }
        }

        // A numeric host must be a real IPv4 address
        match caps.name("host") {
            Some(host) if host.as_str().chars().all(|c| c.is_ascii_digit() || c == '.') => host
                .as_str()
                .split('.')
                .all(|octet| octet.parse::<u16>().map_or(false, |n| n <= 255)),
            Some(_) => true,
            None => false,
        }
    }
}
