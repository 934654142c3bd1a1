use crate::config::RunConfiguration;
use crate::error::{LedgerError, LedgerResult};
use crate::excel::{build_output_workbook, InputSheet};
use crate::ledger::{RowClassifier, ScanReport};
use std::path::Path;
use tracing::info;

/// Execute a full conversion: build the output sheet, scan the input, save.
///
/// A failing input row only truncates the scan; the output file is still
/// written with every pair collected before it.
pub fn create(config: &RunConfiguration) -> LedgerResult<ScanReport> {
    let (mut output, styles) = build_output_workbook(config)?;
    let input = InputSheet::open(&config.input, config.sheet)?;

    let report = RowClassifier::new(config, &styles).scan(&input, &mut output);
    info!(
        "Scanned {} rows: {} debit matches, {} credit matches, {} ledger rows",
        report.scanned_rows,
        report.debit_matches,
        report.credit_matches,
        output.data_rows()
    );

    output.save(&config.output)?;
    info!("Result file created: {}", config.output.display());

    Ok(report)
}

/// Open the result file in the platform's default viewer
pub fn open_file(path: &Path) -> LedgerResult<()> {
    open::that(path).map_err(|e| LedgerError::Viewer(format!("{}: {}", path.display(), e)))
}

/// Execute the command-line run: convert, then optionally launch the viewer
pub fn run(config: &RunConfiguration, open_viewer: bool) -> LedgerResult<ScanReport> {
    config.log();

    let report = create(config)?;

    if open_viewer {
        open_file(&config.output)?;
    }

    Ok(report)
}
