//! Spreadsheet I/O
//!
//! - Import: one sheet of the source ledger (.xlsx, .xls, .ods) → typed cells
//! - Export: the two-sided "Total Account" summary sheet (.xlsx)

pub mod column;
pub mod exporter;
pub mod importer;

pub use exporter::{build_output_workbook, OutputSheet, Side, StyleBundle};
pub use importer::{InputRow, InputSheet};
