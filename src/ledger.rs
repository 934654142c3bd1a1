//! Row classifier and ledger writer
//!
//! Rows above the configured header row are skipped. Every row from the
//! header row on is scanned once: the debit column is tested first and, on
//! a match, a new output row gets the debit half. The credit column is then
//! tested independently and, on a match, the credit half is written into
//! the most recently appended output row (or, in `source-row` pairing, into
//! a fresh row when that last row came from another input row).
//!
//! Any error while scanning stops the scan; rows already written stay in
//! the output.

use crate::config::{PairingMode, RunConfiguration};
use crate::error::{LedgerError, LedgerResult};
use crate::excel::column::to_excel_index;
use crate::excel::exporter::{OutputSheet, Side, StyleBundle};
use crate::excel::importer::{InputRow, InputSheet};
use crate::types::{CellValue, LedgerPair, LedgerSide};
use chrono::NaiveDateTime;
use tracing::{debug, error, trace};

const SEQUENCE_COLUMN: usize = 0;
const DATE_COLUMN: usize = 1;
const DEBIT_AMOUNT_COLUMN: usize = 4;
const CREDIT_AMOUNT_COLUMN: usize = 6;

/// Outcome of one scan over the input sheet
#[derive(Debug, Default)]
pub struct ScanReport {
    pub scanned_rows: usize,
    pub debit_matches: usize,
    pub credit_matches: usize,
    /// Mirror of the output data rows, in sheet order
    pub pairs: Vec<LedgerPair>,
    /// Error that stopped the scan early
    pub halted: Option<LedgerError>,
}

/// Scans input rows and writes matching ledger sides into the output sheet
pub struct RowClassifier<'a> {
    config: &'a RunConfiguration,
    styles: &'a StyleBundle,
}

impl<'a> RowClassifier<'a> {
    pub fn new(config: &'a RunConfiguration, styles: &'a StyleBundle) -> Self {
        Self { config, styles }
    }

    /// Scan every row at or below the header row.
    ///
    /// Never fails: the first error is logged, stored in
    /// [`ScanReport::halted`] and ends the scan.
    pub fn scan(&self, input: &InputSheet, output: &mut OutputSheet) -> ScanReport {
        let mut report = ScanReport::default();

        for row in input.rows() {
            if row.index() < self.config.header_row {
                continue;
            }

            trace!("row: {}", row.index());
            report.scanned_rows += 1;

            if let Err(e) = self.process_row(&row, output, &mut report) {
                error!("{}", e);
                report.halted = Some(e);
                break;
            }
        }

        report
    }

    fn process_row(
        &self,
        row: &InputRow<'_>,
        output: &mut OutputSheet,
        report: &mut ScanReport,
    ) -> LedgerResult<()> {
        let accounts = &self.config.target_accounts;

        if row.cell(self.config.debit_column).matches_any(accounts) {
            self.write_debit(row, output, report)?;
        }

        if row.cell(self.config.credit_column).matches_any(accounts) {
            self.write_credit(row, output, report)?;
        }

        Ok(())
    }

    fn write_debit(
        &self,
        row: &InputRow<'_>,
        output: &mut OutputSheet,
        report: &mut ScanReport,
    ) -> LedgerResult<()> {
        debug!("debit: {}", row.dump());

        let side = LedgerSide {
            sequence: number_at(row, SEQUENCE_COLUMN)?,
            date: date_at(row, DATE_COLUMN)?,
            amount: number_at(row, DEBIT_AMOUNT_COLUMN)?,
        };

        let target = output.append_row();
        output.write_side(target, Side::Debit, &side, self.styles)?;

        report.pairs.push(LedgerPair::with_debit(row.index(), side));
        report.debit_matches += 1;
        Ok(())
    }

    fn write_credit(
        &self,
        row: &InputRow<'_>,
        output: &mut OutputSheet,
        report: &mut ScanReport,
    ) -> LedgerResult<()> {
        debug!("credit: {}", row.dump());

        let amount = number_at(row, CREDIT_AMOUNT_COLUMN)?;
        let date = date_at(row, DATE_COLUMN)?;
        let sequence = number_at(row, SEQUENCE_COLUMN)?;
        let side = LedgerSide {
            sequence,
            date,
            amount,
        };

        let joins_last = match self.config.pairing {
            PairingMode::LastRow => {
                if !output.has_data_rows() {
                    return Err(LedgerError::OrphanCredit { row: row.index() });
                }
                true
            }
            PairingMode::SourceRow => report
                .pairs
                .last()
                .is_some_and(|pair| pair.source_row == row.index() && pair.credit.is_none()),
        };

        if joins_last {
            output.write_side(output.last_row(), Side::Credit, &side, self.styles)?;
            if let Some(pair) = report.pairs.last_mut() {
                pair.credit = Some(side);
            }
        } else {
            let target = output.append_row();
            output.write_side(target, Side::Credit, &side, self.styles)?;
            report.pairs.push(LedgerPair::with_credit(row.index(), side));
        }

        report.credit_matches += 1;
        Ok(())
    }
}

fn number_at(row: &InputRow<'_>, column: usize) -> LedgerResult<f64> {
    match row.cell(column) {
        CellValue::Number(n) => Ok(n),
        other => Err(type_error(row, column, "number", &other)),
    }
}

fn date_at(row: &InputRow<'_>, column: usize) -> LedgerResult<NaiveDateTime> {
    match row.cell(column) {
        CellValue::Date(d) => Ok(d),
        other => Err(type_error(row, column, "date", &other)),
    }
}

fn type_error(
    row: &InputRow<'_>,
    column: usize,
    expected: &'static str,
    found: &CellValue,
) -> LedgerError {
    LedgerError::CellType {
        row: row.index(),
        column: to_excel_index(column),
        expected,
        found: found.describe(),
    }
}
