//! Total Account - two-sided account summaries from ledger spreadsheets
//!
//! This library reads one sheet of a ledger workbook, picks the rows whose
//! debit or credit account is one of a set of target accounts, and writes a
//! "Total Account" workbook with the matched entries laid out side by side.
//!
//! # Features
//!
//! - Typed cell coercion (text, number, date, boolean, formula)
//! - Exact account matching on configurable debit/credit columns
//! - Styled output: merged headers, thin borders, `0,000` amounts,
//!   configurable date format
//! - Best-effort scanning: a bad row stops the scan but never the output
//!
//! # Example
//!
//! ```no_run
//! use total_account::cli::create;
//! use total_account::config::RunConfiguration;
//!
//! let mut config = RunConfiguration::new("journal.xlsx", "cash.xlsx");
//! config.target_accounts = vec!["현금".to_string(), "보통예금".to_string()];
//!
//! let report = create(&config)?;
//! println!("Ledger rows: {}", report.pairs.len());
//! # Ok::<(), total_account::error::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod ledger;
pub mod types;

// Re-export commonly used types
pub use config::{PairingMode, RunConfiguration};
pub use error::{LedgerError, LedgerResult};
pub use types::{CellValue, LedgerPair, LedgerSide};
