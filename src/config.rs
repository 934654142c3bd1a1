//! Run configuration shared by the builder, the row scanner and the driver

use crate::excel::column;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_SHEET: usize = 1;
pub const DEFAULT_HEADER_ROW: u32 = 2;
pub const DEFAULT_DEBIT_COLUMN: &str = "D";
pub const DEFAULT_CREDIT_COLUMN: &str = "F";
pub const DEFAULT_ACCOUNT: &str = "현금";
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";
pub const DEFAULT_TITLE: &str = "현금계정";

/// How a credit match finds the output row it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Credit cells overwrite whatever output row was appended last
    #[default]
    LastRow,
    /// Credit cells join the last row only if the same input row appended it,
    /// otherwise they start a new row
    SourceRow,
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingMode::LastRow => f.write_str("last-row"),
            PairingMode::SourceRow => f.write_str("source-row"),
        }
    }
}

/// Immutable settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    pub input: PathBuf,
    pub output: PathBuf,
    /// 1-based sheet index
    pub sheet: usize,
    /// 0-based first data row; rows above it are ignored
    pub header_row: u32,
    pub debit_column: usize,
    pub credit_column: usize,
    pub target_accounts: Vec<String>,
    /// Excel number format applied to date cells
    pub date_format: String,
    pub title: String,
    pub pairing: PairingMode,
}

impl RunConfiguration {
    /// Configuration with every optional setting at its default
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sheet: DEFAULT_SHEET,
            header_row: DEFAULT_HEADER_ROW,
            debit_column: column::to_index(DEFAULT_DEBIT_COLUMN),
            credit_column: column::to_index(DEFAULT_CREDIT_COLUMN),
            target_accounts: vec![DEFAULT_ACCOUNT.to_string()],
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            pairing: PairingMode::default(),
        }
    }

    /// Log the effective settings
    pub fn log(&self) {
        tracing::info!("Input: {}", self.input.display());
        tracing::info!("Output: {}", self.output.display());
        tracing::info!("Sheet index: {}", self.sheet);
        tracing::info!("Header row: {}", self.header_row);
        tracing::info!("Debit column: {}", column::to_excel_index(self.debit_column));
        tracing::info!("Credit column: {}", column::to_excel_index(self.credit_column));
        tracing::info!("Target accounts: {}", self.target_accounts.join(","));
        tracing::info!("Date format: {}", self.date_format);
        tracing::info!("Pairing: {}", self.pairing);
    }
}

/// Parse a column option: ASCII letters, case-normalised, decoded to an index
pub fn parse_column(value: &str) -> Result<usize, String> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("'{}' is not a column letter", value));
    }
    Ok(column::to_index(&value.to_ascii_uppercase()))
}
