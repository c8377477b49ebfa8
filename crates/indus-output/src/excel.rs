//! Spreadsheet serialization for industry tables.
//!
//! Produces a single-sheet xlsx workbook fully in memory: a header row
//! followed by one row per record, in table order. Column order and header
//! casing are fixed, so identical input yields identical sheet content.

use indus_data::fetcher::IndustryRecord;
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Industry Data";

/// Header row, in column order.
pub const HEADER: [&str; 3] = ["Company Name", "Symbol", "Industry"];

/// MIME type for the produced workbook.
pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook serialization error.
    #[error("Spreadsheet serialization error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// The sheet content as rows of cells: header first, then one row per
/// record, in table order.
pub fn table_rows(records: &[IndustryRecord]) -> Vec<[String; 3]> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(HEADER.map(String::from));
    for record in records {
        rows.push([
            record.company_name.clone(),
            record.symbol.clone(),
            record.industry.clone(),
        ]);
    }
    rows
}

/// Serialize `records` to xlsx workbook bytes.
///
/// # Errors
/// Returns `ExportError::Xlsx` if workbook serialization fails; there is no
/// recovery path, callers should treat this as fatal.
pub fn write_workbook(records: &[IndustryRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, row) in table_rows(records).iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32, col_idx as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Suggested download filename for a universe's export.
pub fn export_filename(universe_label: &str) -> String {
    format!("{universe_label}_Industry_Data.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<IndustryRecord> {
        vec![
            IndustryRecord {
                company_name: "Reliance Industries".to_string(),
                symbol: "RELIANCE.NS".to_string(),
                industry: "Oil & Gas".to_string(),
            },
            IndustryRecord {
                company_name: "Error".to_string(),
                symbol: "TCS.NS".to_string(),
                industry: "timeout".to_string(),
            },
        ]
    }

    #[test]
    fn test_table_rows_header_and_order() {
        let rows = table_rows(&sample_table());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Company Name", "Symbol", "Industry"]);
        assert_eq!(rows[1], ["Reliance Industries", "RELIANCE.NS", "Oil & Gas"]);
        assert_eq!(rows[2], ["Error", "TCS.NS", "timeout"]);
    }

    #[test]
    fn test_table_rows_empty_table() {
        let rows = table_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], HEADER.map(String::from));
    }

    #[test]
    fn test_write_workbook_produces_xlsx_bytes() {
        let bytes = write_workbook(&sample_table()).unwrap();

        // xlsx is a zip container.
        assert!(bytes.starts_with(b"PK"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Nifty50"), "Nifty50_Industry_Data.xlsx");
        assert_eq!(export_filename("AllNSE"), "AllNSE_Industry_Data.xlsx");
    }
}
