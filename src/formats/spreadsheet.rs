use crate::core::error::{DataCompareError, Result};
use crate::core::traits::FormatHandler;
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Width of the result column in written workbooks
const COLUMN_WIDTH: f64 = 48.0;

/// Name of the worksheet holding the result column
const SHEET_NAME: &str = "Non-Matching";

/// Workbooks (xlsx, xlsm, xls, ods). Only the first worksheet is read.
pub struct SpreadsheetHandler;

impl SpreadsheetHandler {
    pub fn new() -> Self {
        Self
    }

    fn cell_text(cell: &Data) -> Option<String> {
        let text = match cell {
            Data::Empty => return None,
            Data::String(s) => s.clone(),
            other => other.to_string(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Default for SpreadsheetHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatHandler for SpreadsheetHandler {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    fn read(&self, path: &Path, column: Option<usize>) -> Result<Vec<String>> {
        let spreadsheet_error = |message: String| DataCompareError::Spreadsheet {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| spreadsheet_error(e.to_string()))?,
            None => return Ok(Vec::new()),
        };

        // Ranges start at the first used cell, not necessarily column A
        let first_col = range.start().map_or(0, |(_, col)| col as usize);

        let mut records = Vec::new();
        for row in range.rows() {
            match column {
                Some(index) => {
                    let cell = index
                        .saturating_sub(1)
                        .checked_sub(first_col)
                        .and_then(|offset| row.get(offset));
                    if let Some(text) = cell.and_then(Self::cell_text) {
                        records.push(text);
                    }
                }
                None => records.extend(row.iter().filter_map(Self::cell_text)),
            }
        }

        Ok(records)
    }

    fn render(&self, header: &str, rows: &[String]) -> Result<Vec<u8>> {
        let render_error = |e: rust_xlsxwriter::XlsxError| DataCompareError::Render(e.to_string());

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(render_error)?;
        worksheet.set_column_width(0, COLUMN_WIDTH).map_err(render_error)?;
        worksheet
            .write_string_with_format(0, 0, header, &bold)
            .map_err(render_error)?;

        for (index, key) in rows.iter().enumerate() {
            let row = u32::try_from(index + 1)
                .map_err(|_| DataCompareError::Render(format!("too many rows: {}", rows.len())))?;
            worksheet.write_string(row, 0, key).map_err(render_error)?;
        }

        workbook.save_to_buffer().map_err(render_error)
    }
}
