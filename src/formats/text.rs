use crate::core::error::{DataCompareError, Result};
use crate::core::traits::FormatHandler;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Plain text, one record per non-empty line
pub struct TextHandler;

impl TextHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatHandler for TextHandler {
    fn name(&self) -> &str {
        "text"
    }

    /// Lines have no columns, so `column` is ignored
    fn read(&self, path: &Path, column: Option<usize>) -> Result<Vec<String>> {
        if let Some(column) = column {
            debug!("Column {} does not apply to text file {}; reading whole lines", column, path.display());
        }
        let bytes = fs::read(path)?;
        let contents = String::from_utf8(bytes).map_err(|_| DataCompareError::Encoding(path.to_path_buf()))?;

        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn render(&self, header: &str, rows: &[String]) -> Result<Vec<u8>> {
        let mut out = String::with_capacity(header.len() + 1 + rows.iter().map(|r| r.len() + 1).sum::<usize>());
        out.push_str(header);
        out.push('\n');
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_non_empty_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.txt");
        fs::write(&path, "example.com\r\n\n   \n# comment\ngoogle.com").unwrap();

        let records = TextHandler::new().read(&path, None).unwrap();
        assert_eq!(records, vec!["example.com", "# comment", "google.com"]);
    }

    #[test]
    fn test_column_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.txt");
        fs::write(&path, "a.com,b.com
").unwrap();

        let records = TextHandler::new().read(&path, Some(2)).unwrap();
        assert_eq!(records, vec!["a.com,b.com"]);
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keys.txt");
        fs::write(&path, b"10.0.0.1\n\xc3\x28\n").unwrap();

        let err = TextHandler::new().read(&path, None).unwrap_err();
        assert!(matches!(err, DataCompareError::Encoding(_)));
    }

    #[test]
    fn test_render_header_then_lines() {
        let bytes = TextHandler::new()
            .render("Non-Matching Ip", &["10.0.0.1".to_string(), "10.0.0.2".to_string()])
            .unwrap();
        assert_eq!(bytes, b"Non-Matching Ip\n10.0.0.1\n10.0.0.2\n");
    }

    #[test]
    fn test_render_empty_is_header_only() {
        let bytes = TextHandler::new().render("Non-Matching Ip", &[]).unwrap();
        assert_eq!(bytes, b"Non-Matching Ip\n");
    }
}
