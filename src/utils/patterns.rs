/// Helpers for pulling candidate keys out of noisy records
pub struct PatternUtils;

/// Characters that separate candidates inside one record, besides whitespace
pub const DEFAULT_SEPARATORS: &[char] = &[',', ';', '|'];

/// Quotes stripped from both ends of a candidate
const QUOTES: &[char] = &['"', '\'', '`'];

/// Bracket pairs stripped from the ends of a candidate
const BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

impl PatternUtils {
    /// Split a record into candidate tokens.
    ///
    /// Splits on whitespace and on any of `separators`, then strips quotes,
    /// brackets and a leading byte-order mark. Empty tokens are dropped.
    pub fn candidates<'a>(record: &'a str, separators: &'a [char]) -> impl Iterator<Item = &'a str> {
        record
            .split(move |c: char| c.is_whitespace() || separators.contains(&c))
            .map(Self::strip_wrapping)
            .filter(|token| !token.is_empty())
    }

    /// Remove a BOM, surrounding whitespace, quotes and brackets.
    ///
    /// A closing bracket is only removed when the token holds more of it than
    /// of its opening bracket, so `wiki/Rust_(language)` keeps its `)`.
    pub fn strip_wrapping(token: &str) -> &str {
        let mut token = token.trim_start_matches('\u{feff}').trim();
        loop {
            let before = token.len();
            token = token
                .trim_matches(|c: char| QUOTES.contains(&c))
                .trim_start_matches(|c: char| BRACKETS.iter().any(|(open, _)| *open == c));
            token = Self::strip_unbalanced_close(token);
            if token.len() == before {
                return token;
            }
        }
    }

    fn strip_unbalanced_close(mut token: &str) -> &str {
        while let Some(last) = token.chars().last() {
            let open = match BRACKETS.iter().find(|(_, close)| *close == last) {
                Some((open, _)) => *open,
                None => break,
            };
            if token.matches(last).count() <= token.matches(open).count() {
                break;
            }
            token = &token[..token.len() - last.len_utf8()];
        }
        token
    }

    /// Drop leading zeros from a decimal number, keeping a single "0"
    pub fn strip_leading_zeros(digits: &str) -> &str {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() && !digits.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_split_on_separators() {
        let tokens: Vec<_> =
            PatternUtils::candidates("a.com, b.com;c.com | d.com\te.com", DEFAULT_SEPARATORS).collect();
        assert_eq!(tokens, vec!["a.com", "b.com", "c.com", "d.com", "e.com"]);
    }

    #[test]
    fn test_candidates_strip_quotes_and_brackets() {
        let tokens: Vec<_> =
            PatternUtils::candidates("\"example.com\" [10.0.0.1] <https://x.org> [\"b.org\"]", DEFAULT_SEPARATORS)
                .collect();
        assert_eq!(tokens, vec!["example.com", "10.0.0.1", "https://x.org", "b.org"]);
    }

    #[test]
    fn test_whitespace_only_split_keeps_separators() {
        let tokens: Vec<_> = PatternUtils::candidates("https://x.com/search?a=1;b=2 https://x.com/tags/a,b", &[]).collect();
        assert_eq!(tokens, vec!["https://x.com/search?a=1;b=2", "https://x.com/tags/a,b"]);
    }

    #[test]
    fn test_balanced_brackets_are_kept() {
        assert_eq!(
            PatternUtils::strip_wrapping("https://en.wikipedia.org/wiki/Rust_(programming_language)"),
            "https://en.wikipedia.org/wiki/Rust_(programming_language)"
        );
        assert_eq!(
            PatternUtils::strip_wrapping("(https://en.wikipedia.org/wiki/Rust_(language))"),
            "https://en.wikipedia.org/wiki/Rust_(language)"
        );
        assert_eq!(PatternUtils::strip_wrapping("http://a.org/q?x[0]=1"), "http://a.org/q?x[0]=1");
    }

    #[test]
    fn test_candidates_skip_blank_records() {
        assert_eq!(PatternUtils::candidates("   ", DEFAULT_SEPARATORS).count(), 0);
        assert_eq!(PatternUtils::candidates("", DEFAULT_SEPARATORS).count(), 0);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(PatternUtils::strip_wrapping("\u{feff}example.com"), "example.com");
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(PatternUtils::strip_leading_zeros("001"), "1");
        assert_eq!(PatternUtils::strip_leading_zeros("000"), "0");
        assert_eq!(PatternUtils::strip_leading_zeros("120"), "120");
        assert_eq!(PatternUtils::strip_leading_zeros(""), "");
    }
}
