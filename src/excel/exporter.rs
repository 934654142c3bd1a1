//! Output workbook builder
//!
//! Lays out the fixed "Total Account" sheet:
//!
//! ```text
//! row 0 | title (A:F merged)                          |
//! row 1 | 차변 debit (A:C merged) | 대변 credit (D:F)  |
//! row 2 | 순번 | 날짜 | 금액 | 금액 | 날짜 | 순번       |
//! row 3.. ledger pairs
//! ```
//!
//! Every header cell, merged range and data cell carries a thin border.

use crate::config::RunConfiguration;
use crate::error::{LedgerError, LedgerResult};
use crate::types::LedgerSide;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

pub const SHEET_NAME: &str = "Total Account";

/// Title, side and label rows above the first ledger pair
pub const HEADER_ROWS: u32 = 3;

pub const NUMBER_FORMAT: &str = "0,000";

/// Width of the two date columns in 1/256 character units
const DATE_COLUMN_WIDTH: u16 = 3000;

const DEBIT_LABEL: &str = "차변";
const CREDIT_LABEL: &str = "대변";
const SEQUENCE_LABEL: &str = "순번";
const DATE_LABEL: &str = "날짜";
const AMOUNT_LABEL: &str = "금액";

/// Cell formats created once per output workbook
#[derive(Debug, Clone)]
pub struct StyleBundle {
    pub header: Format,
    pub sequence: Format,
    pub number: Format,
    pub date: Format,
}

impl StyleBundle {
    pub fn new(date_format: &str) -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Self {
            header: bordered.clone().set_align(FormatAlign::Center),
            sequence: bordered.clone(),
            number: bordered.clone().set_num_format(NUMBER_FORMAT),
            date: bordered.set_num_format(date_format),
        }
    }
}

/// Which half of an output row a ledger side occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    /// Columns for (sequence, date, amount); the credit half mirrors the debit half
    fn columns(self) -> (u16, u16, u16) {
        match self {
            Side::Debit => (0, 1, 2),
            Side::Credit => (5, 4, 3),
        }
    }
}

/// The destination workbook with its single ledger sheet
pub struct OutputSheet {
    workbook: Workbook,
    last_row: u32,
}

impl OutputSheet {
    /// Index of the last written row (header rows included)
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    /// Whether any ledger pair has been appended below the header
    pub fn has_data_rows(&self) -> bool {
        self.last_row >= HEADER_ROWS
    }

    /// Number of ledger pairs appended so far
    pub fn data_rows(&self) -> u32 {
        (self.last_row + 1).saturating_sub(HEADER_ROWS)
    }

    /// Reserve the next row and return its index
    pub fn append_row(&mut self) -> u32 {
        self.last_row += 1;
        self.last_row
    }

    /// Write one side of a ledger pair into `row`
    pub fn write_side(
        &mut self,
        row: u32,
        side: Side,
        values: &LedgerSide,
        styles: &StyleBundle,
    ) -> LedgerResult<()> {
        let (sequence_col, date_col, amount_col) = side.columns();
        let worksheet = self.worksheet()?;

        worksheet
            .write_number_with_format(row, sequence_col, values.sequence, &styles.sequence)
            .map_err(|e| LedgerError::Export(format!("Failed to write sequence: {}", e)))?;
        worksheet
            .write_datetime_with_format(row, date_col, &values.date, &styles.date)
            .map_err(|e| LedgerError::Export(format!("Failed to write date: {}", e)))?;
        worksheet
            .write_number_with_format(row, amount_col, values.amount, &styles.number)
            .map_err(|e| LedgerError::Export(format!("Failed to write amount: {}", e)))?;

        Ok(())
    }

    /// Serialize the workbook to `path`
    pub fn save(&mut self, path: &Path) -> LedgerResult<()> {
        self.workbook
            .save(path)
            .map_err(|e| LedgerError::Export(format!("Failed to save Excel file: {}", e)))
    }

    fn worksheet(&mut self) -> LedgerResult<&mut Worksheet> {
        self.workbook
            .worksheet_from_index(0)
            .map_err(|e| LedgerError::Export(format!("Missing output worksheet: {}", e)))
    }
}

/// Create the output workbook with its header layout and the styles for data cells
pub fn build_output_workbook(config: &RunConfiguration) -> LedgerResult<(OutputSheet, StyleBundle)> {
    let styles = StyleBundle::new(&config.date_format);
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| LedgerError::Export(format!("Failed to set worksheet name: {}", e)))?;

    write_header(worksheet, &config.title, &styles.header)?;

    Ok((
        OutputSheet {
            workbook,
            last_row: HEADER_ROWS - 1,
        },
        styles,
    ))
}

fn write_header(worksheet: &mut Worksheet, title: &str, format: &Format) -> LedgerResult<()> {
    let merge = |worksheet: &mut Worksheet, row: u32, first: u16, last: u16, text: &str| {
        worksheet
            .merge_range(row, first, row, last, text, format)
            .map(|_| ())
            .map_err(|e| LedgerError::Export(format!("Failed to merge header cells: {}", e)))
    };

    merge(worksheet, 0, 0, 5, title)?;
    merge(worksheet, 1, 0, 2, DEBIT_LABEL)?;
    merge(worksheet, 1, 3, 5, CREDIT_LABEL)?;

    let labels = [
        SEQUENCE_LABEL,
        DATE_LABEL,
        AMOUNT_LABEL,
        AMOUNT_LABEL,
        DATE_LABEL,
        SEQUENCE_LABEL,
    ];
    for (col, label) in (0u16..).zip(labels) {
        worksheet
            .write_string_with_format(2, col, label, format)
            .map_err(|e| LedgerError::Export(format!("Failed to write header: {}", e)))?;
    }

    let width = f64::from(DATE_COLUMN_WIDTH) / 256.0;
    for col in [Side::Debit.columns().1, Side::Credit.columns().1] {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| LedgerError::Export(format!("Failed to set column width: {}", e)))?;
    }

    Ok(())
}
