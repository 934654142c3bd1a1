//! Input workbook reader - one sheet, typed cell access

use crate::error::{LedgerError, LedgerResult};
use crate::types::CellValue;
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// The selected source sheet: cached values plus formula sources
pub struct InputSheet {
    values: Range<Data>,
    formulas: Option<Range<String>>,
}

impl InputSheet {
    /// Open `path` and load the sheet at 1-based `sheet` index.
    ///
    /// The workbook handle is released before this returns; only the
    /// loaded ranges are kept.
    pub fn open<P: AsRef<Path>>(path: P, sheet: usize) -> LedgerResult<Self> {
        let mut workbook = open_workbook_auto(path.as_ref())?;

        let sheet_names = workbook.sheet_names();
        let name = sheet
            .checked_sub(1)
            .and_then(|i| sheet_names.get(i))
            .cloned()
            .ok_or(LedgerError::SheetNotFound {
                index: sheet,
                count: sheet_names.len(),
            })?;

        let values = workbook.worksheet_range(&name)?;
        // Formula parsing is not supported by every format; values alone still work.
        let formulas = workbook.worksheet_formula(&name).ok();

        Ok(Self::new(values, formulas))
    }

    pub fn new(values: Range<Data>, formulas: Option<Range<String>>) -> Self {
        Self { values, formulas }
    }

    /// Every physical row of the sheet, in order, with its absolute 0-based index
    pub fn rows(&self) -> impl Iterator<Item = InputRow<'_>> + '_ {
        self.values
            .start()
            .zip(self.values.end())
            .into_iter()
            .flat_map(|(start, end)| start.0..=end.0)
            .map(move |index| InputRow { sheet: self, index })
    }

    fn cell_at(&self, row: u32, column: usize) -> CellValue {
        let Ok(column) = u32::try_from(column) else {
            return CellValue::Empty;
        };
        let position = (row, column);
        let formula = self
            .formulas
            .as_ref()
            .and_then(|f| f.get_value(position))
            .map(String::as_str);
        coerce(self.values.get_value(position), formula)
    }

    fn width(&self) -> usize {
        self.values.end().map_or(0, |(_, col)| col as usize + 1)
    }
}

/// Read-only view of one source row
#[derive(Clone, Copy)]
pub struct InputRow<'a> {
    sheet: &'a InputSheet,
    index: u32,
}

impl InputRow<'_> {
    /// Absolute 0-based row index in the sheet
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn cell(&self, column: usize) -> CellValue {
        self.sheet.cell_at(self.index, column)
    }

    /// All cells of the row joined with ` | `
    pub fn dump(&self) -> String {
        (0..self.sheet.width())
            .map(|column| self.cell(column).to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Coerce a raw cell into a [`CellValue`].
///
/// A non-empty formula wins over the cached value. Anything without a
/// handled type degrades to `Empty`.
pub fn coerce(value: Option<&Data>, formula: Option<&str>) -> CellValue {
    if let Some(formula) = formula.filter(|f| !f.is_empty()) {
        return CellValue::FormulaText(formula.to_string());
    }

    match value {
        None | Some(Data::Empty) => CellValue::Empty,
        Some(Data::String(s)) => CellValue::Text(s.clone()),
        Some(Data::Float(f)) => CellValue::Number(*f),
        Some(Data::Int(i)) => CellValue::Number(*i as f64),
        Some(Data::Bool(b)) => CellValue::Boolean(*b),
        // calamine applies the workbook's 1900/1904 date system
        Some(Data::DateTime(dt)) => dt
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Some(Data::DateTimeIso(s)) => parse_iso_datetime(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        // Error values, ISO durations
        Some(_) => CellValue::Empty,
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
