//! Journal workbook fixtures shared by the integration tests

#![allow(dead_code)]

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Formula, Workbook, Worksheet};
use std::io::Read;
use std::path::Path;

pub const CASH: &str = "현금";
pub const CARD: &str = "카드";

/// One journal line: seq | date | memo | debit account | debit amount | credit account | credit amount
pub struct Entry {
    pub seq: f64,
    pub day: u32,
    pub debit: &'static str,
    pub debit_amount: f64,
    pub credit: &'static str,
    pub credit_amount: f64,
}

pub fn entry(seq: f64, day: u32, debit: &'static str, credit: &'static str) -> Entry {
    Entry {
        seq,
        day,
        debit,
        debit_amount: 1000.0 * seq,
        credit,
        credit_amount: 10.0 * seq,
    }
}

pub fn jan(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Excel serial of 2024-01-`day`
pub fn jan_serial(day: u32) -> f64 {
    45291.0 + f64::from(day)
}

/// Write the title and column label rows; entries start at row 2
pub fn write_header(worksheet: &mut Worksheet) {
    worksheet.write_string(0, 0, "분개장").unwrap();
    let labels = ["순번", "날짜", "적요", "차변", "금액", "대변", "금액"];
    for (col, label) in (0u16..).zip(labels) {
        worksheet.write_string(1, col, label).unwrap();
    }
}

pub fn write_entries(worksheet: &mut Worksheet, first_row: u32, entries: &[Entry]) {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    for (row, e) in (first_row..).zip(entries) {
        worksheet.write_number(row, 0, e.seq).unwrap();
        worksheet
            .write_datetime_with_format(row, 1, &jan(e.day), &date_format)
            .unwrap();
        worksheet.write_string(row, 2, format!("memo {}", e.seq)).unwrap();
        worksheet.write_string(row, 3, e.debit).unwrap();
        worksheet.write_number(row, 4, e.debit_amount).unwrap();
        worksheet.write_string(row, 5, e.credit).unwrap();
        worksheet.write_number(row, 6, e.credit_amount).unwrap();
    }
}

/// Single-sheet journal workbook
pub fn write_journal(path: &Path, entries: &[Entry]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("분개장").unwrap();
    write_header(worksheet);
    write_entries(worksheet, 2, entries);
    workbook.save(path).unwrap();
}

/// Formula cell with a cached result
pub fn formula(source: &str, result: &str) -> Formula {
    Formula::new(source).set_result(result)
}

/// Load the summary sheet of an output workbook
pub fn read_total_account(path: &Path) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Total Account".to_string()]);
    workbook.worksheet_range("Total Account").unwrap()
}

pub fn text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text at ({}, {}), found {:?}", row, col, other),
    }
}

/// Numeric payload of a number or date cell
pub fn number(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        Some(Data::DateTime(dt)) => dt.as_f64(),
        other => panic!("expected number at ({}, {}), found {:?}", row, col, other),
    }
}

pub fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

/// Last used row index of the summary sheet
pub fn last_row(range: &Range<Data>) -> u32 {
    range.end().map(|(row, _)| row).unwrap()
}

/// Merged ranges of the summary sheet as ((first_row, first_col), (last_row, last_col)), sorted
pub fn merged_regions(path: &Path) -> Vec<((u32, u32), (u32, u32))> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.load_merged_regions().unwrap();
    let mut regions: Vec<_> = workbook
        .merged_regions_by_sheet("Total Account")
        .into_iter()
        .map(|(_, _, dimensions)| (dimensions.start, dimensions.end))
        .collect();
    regions.sort();
    regions
}

/// Raw XML of one part of a written xlsx package, e.g. `xl/styles.xml`
pub fn xlsx_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}
