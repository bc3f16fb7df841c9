use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

use super::tabular::ExportSheet;

const DATE_FORMAT: &str = "yyyy-mm-dd";
const SERIAL_YEARS: std::ops::RangeInclusive<u16> = 1900..=9999;

/// Cell-addressed sink that spreadsheet rows are written into.
pub trait Sheet {
    type Error;

    fn put_text(&mut self, row: u32, col: u16, value: &str) -> Result<(), Self::Error>;
    fn put_number(&mut self, row: u32, col: u16, value: f64) -> Result<(), Self::Error>;
    fn put_date(&mut self, row: u32, col: u16, value: NaiveDate) -> Result<(), Self::Error>;
}

/// Worksheet plus the number format its date cells are shown with.
struct XlsxSheet<'a> {
    worksheet: &'a mut Worksheet,
    date_format: Format,
}

impl<'a> XlsxSheet<'a> {
    fn new(worksheet: &'a mut Worksheet) -> Self {
        Self {
            worksheet,
            date_format: Format::new().set_num_format(DATE_FORMAT),
        }
    }
}

impl Sheet for XlsxSheet<'_> {
    type Error = XlsxError;

    fn put_text(&mut self, row: u32, col: u16, value: &str) -> Result<(), XlsxError> {
        self.worksheet.write_string(row, col, value).map(|_| ())
    }

    fn put_number(&mut self, row: u32, col: u16, value: f64) -> Result<(), XlsxError> {
        self.worksheet.write_number(row, col, value).map(|_| ())
    }

    /// Dates become serial date cells. Serial dates start in 1900, so earlier matches are
    /// written as text.
    fn put_date(&mut self, row: u32, col: u16, value: NaiveDate) -> Result<(), XlsxError> {
        let Some(year) = u16::try_from(value.year())
            .ok()
            .filter(|year| SERIAL_YEARS.contains(year))
        else {
            return self.put_text(row, col, &value.format("%Y-%m-%d").to_string());
        };
        // month and day always fit a u8
        let date = ExcelDateTime::from_ymd(year, value.month() as u8, value.day() as u8)?;
        self.worksheet
            .write_datetime_with_format(row, col, &date, &self.date_format)
            .map(|_| ())
    }
}

/// Render a page as an xlsx workbook with a single sheet.
///
/// The header comes from the first item and sits in row 0; items follow from row 1. An empty
/// page yields a workbook with an empty sheet.
pub fn encode_workbook<T: ExportSheet>(items: &[T]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let mut sheet = XlsxSheet::new(workbook.add_worksheet());
    if let Some(first) = items.first() {
        first.write_header(&mut sheet)?;
        for (row, item) in (1u32..).zip(items) {
            item.write_row(&mut sheet, row)?;
        }
    }
    workbook.save_to_buffer()
}
