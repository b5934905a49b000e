use crate::core::error::{DataCompareError, Result};
use crate::core::traits::FormatHandler;
use std::fs::File;
use std::path::Path;

/// Comma-delimited UTF-8 files. Every non-empty cell is a record.
pub struct CsvHandler;

impl CsvHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatHandler for CsvHandler {
    fn name(&self) -> &str {
        "csv"
    }

    fn read(&self, path: &Path, column: Option<usize>) -> Result<Vec<String>> {
        let file = File::open(path)?;
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| {
                if matches!(e.kind(), ::csv::ErrorKind::Utf8 { .. }) {
                    DataCompareError::Encoding(path.to_path_buf())
                } else {
                    DataCompareError::Csv(e)
                }
            })?;

            let cells: Box<dyn Iterator<Item = &str> + '_> = match column {
                Some(index) => Box::new(row.get(index.saturating_sub(1)).into_iter()),
                None => Box::new(row.iter()),
            };
            records.extend(
                cells
                    .filter(|cell| !cell.trim().is_empty())
                    .map(str::to_string),
            );
        }

        Ok(records)
    }

    fn render(&self, header: &str, rows: &[String]) -> Result<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record([header])?;
        for row in rows {
            writer.write_record([row])?;
        }
        writer
            .into_inner()
            .map_err(|e| DataCompareError::Render(e.to_string()))
    }
}
