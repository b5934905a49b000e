//! File format dispatch.
//!
//! The extension of a path picks a [`FileFormat`]; each format has a
//! [`FormatHandler`] that reads raw records and renders the result column.

pub mod csv_format;
pub mod spreadsheet;
pub mod text;

pub use csv_format::CsvHandler;
pub use spreadsheet::SpreadsheetHandler;
pub use text::TextHandler;

use crate::core::error::{DataCompareError, Result};
use crate::core::traits::FormatHandler;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Supported file families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Spreadsheet,
    PlainText,
}

/// Extensions accepted for writing
pub const OUTPUT_EXTENSIONS: &[&str] = &["csv", "xlsx", "txt"];

impl FileFormat {
    /// Look up a format by extension (case-insensitive, without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(FileFormat::Spreadsheet),
            "txt" => Some(FileFormat::PlainText),
            _ => None,
        }
    }

    /// Format of a file to be read
    pub fn for_input(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        Self::from_extension(&extension).ok_or_else(|| DataCompareError::unsupported(path, extension))
    }

    /// Format of a file to be written. Only `.xlsx` spreadsheets can be written.
    pub fn for_output(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        if !OUTPUT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(DataCompareError::unsupported(path, extension));
        }
        Self::from_extension(&extension).ok_or_else(|| DataCompareError::unsupported(path, extension))
    }

    pub fn handler(&self) -> Box<dyn FormatHandler> {
        match self {
            FileFormat::Csv => Box::new(CsvHandler::new()),
            FileFormat::Spreadsheet => Box::new(SpreadsheetHandler::new()),
            FileFormat::PlainText => Box::new(TextHandler::new()),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Csv => "csv",
            FileFormat::Spreadsheet => "spreadsheet",
            FileFormat::PlainText => "text",
        };
        f.write_str(name)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default()
}

/// Read the raw records of a file, dispatching on its extension.
///
/// A zero-byte file yields no records whatever its format.
pub fn read_records(path: &Path, column: Option<usize>) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(DataCompareError::InputNotFound(path.to_path_buf()));
    }
    let format = FileFormat::for_input(path)?;

    if fs::metadata(path)?.len() == 0 {
        debug!("{} is empty", path.display());
        return Ok(Vec::new());
    }

    let handler = format.handler();
    let records = handler.read(path, column)?;
    debug!("Read {} records from {} ({})", records.len(), path.display(), handler.name());
    Ok(records)
}

/// Check that `path` names a writable format inside an existing directory
pub fn check_output_path(path: &Path) -> Result<FileFormat> {
    let format = FileFormat::for_output(path)?;
    let dir = parent_dir(path);
    if !dir.is_dir() {
        return Err(DataCompareError::output(path, format!("directory {} does not exist", dir.display())));
    }
    if path.is_dir() {
        return Err(DataCompareError::output(path, "path is a directory"));
    }
    Ok(format)
}

/// Render `rows` under `header` and write them to `path` in one step.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so a failure never leaves a partial file.
pub fn write_rows(path: &Path, header: &str, rows: &[String]) -> Result<()> {
    let format = check_output_path(path)?;
    let bytes = format
        .handler()
        .render(header, rows)
        .map_err(|e| DataCompareError::output(path, e))?;

    let mut tmp = NamedTempFile::new_in(parent_dir(path)).map_err(|e| DataCompareError::output(path, e))?;
    tmp.write_all(&bytes).map_err(|e| DataCompareError::output(path, e))?;
    tmp.flush().map_err(|e| DataCompareError::output(path, e))?;
    tmp.persist(path).map_err(|e| DataCompareError::output(path, e.error))?;

    debug!("Wrote {} rows to {} ({})", rows.len(), path.display(), format);
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
