use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open input workbook: {0}")]
    Open(String),

    #[error("Sheet {index} not found (workbook has {count} sheets)")]
    SheetNotFound { index: usize, count: usize },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Row {row}, column {column}: expected {expected}, found {found}")]
    CellType {
        row: u32,
        column: char,
        expected: &'static str,
        found: String,
    },

    #[error("Row {row}: credit match has no ledger row to pair with")]
    OrphanCredit { row: u32 },

    #[error("Failed to open viewer: {0}")]
    Viewer(String),
}

impl From<calamine::Error> for LedgerError {
    fn from(err: calamine::Error) -> Self {
        LedgerError::Open(err.to_string())
    }
}
