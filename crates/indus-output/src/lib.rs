#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod excel;

pub use excel::{ExportError, SPREADSHEET_MIME, export_filename, write_workbook};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
