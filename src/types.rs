use chrono::NaiveDateTime;
use std::fmt;

//==============================================================================
// Input Cell Values
//==============================================================================

/// A spreadsheet cell coerced to a typed value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent, blank or unsupported cell
    Empty,
    /// Shared or inline string
    Text(String),
    /// Plain numeric cell
    Number(f64),
    /// Numeric cell carrying a date/time number format
    Date(NaiveDateTime),
    /// Boolean cell
    Boolean(bool),
    /// Formula source text (not its evaluated result)
    FormulaText(String),
}

impl CellValue {
    /// String form used for account matching.
    ///
    /// Only text-like values have one; numbers, dates and booleans never
    /// equal an account name.
    pub fn as_match_str(&self) -> Option<&str> {
        match self {
            CellValue::Empty => Some(""),
            CellValue::Text(s) | CellValue::FormulaText(s) => Some(s),
            CellValue::Number(_) | CellValue::Date(_) | CellValue::Boolean(_) => None,
        }
    }

    /// Exact, case-sensitive membership test against the target accounts
    pub fn matches_any(&self, accounts: &[String]) -> bool {
        self.as_match_str()
            .is_some_and(|value| accounts.iter().any(|account| account == value))
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Date(_) => "date",
            CellValue::Boolean(_) => "boolean",
            CellValue::FormulaText(_) => "formula",
        }
    }

    /// Type name plus value, for error messages
    pub fn describe(&self) -> String {
        match self {
            CellValue::Empty => self.type_name().to_string(),
            _ => format!("{} {:?}", self.type_name(), self.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::FormulaText(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

//==============================================================================
// Output Ledger Rows
//==============================================================================

/// One side (debit or credit) of an output row
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSide {
    pub sequence: f64,
    pub date: NaiveDateTime,
    pub amount: f64,
}

/// One output data row: `[debitSeq, debitDate, debitAmount, creditAmount, creditDate, creditSeq]`
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerPair {
    /// 0-based input row that appended this output row
    pub source_row: u32,
    pub debit: Option<LedgerSide>,
    pub credit: Option<LedgerSide>,
}

impl LedgerPair {
    pub fn with_debit(source_row: u32, side: LedgerSide) -> Self {
        Self {
            source_row,
            debit: Some(side),
            credit: None,
        }
    }

    pub fn with_credit(source_row: u32, side: LedgerSide) -> Self {
        Self {
            source_row,
            debit: None,
            credit: Some(side),
        }
    }
}
