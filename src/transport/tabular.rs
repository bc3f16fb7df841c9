use chrono::NaiveDate;

use super::sheet::Sheet;

/// One exported value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Decimal(f64),
    Date(NaiveDate),
    Empty,
}

impl Cell {
    /// Text as it appears in a CSV field, before quoting.
    fn plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Decimal(value) => format!("{value:.2}"),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Empty => String::new(),
        }
    }

    fn write_to<S: Sheet>(&self, sheet: &mut S, row: u32, col: u16) -> Result<(), S::Error> {
        match self {
            Self::Text(text) => sheet.put_text(row, col, text),
            Self::Int(value) => sheet.put_number(row, col, *value as f64),
            Self::Decimal(value) => sheet.put_number(row, col, *value),
            Self::Date(date) => sheet.put_date(row, col, *date),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// A row type with a fixed column layout.
pub trait Tabular {
    fn columns() -> &'static [&'static str];

    /// One cell per entry of [`Tabular::columns`].
    fn cells(&self) -> Vec<Cell>;
}

/// Delimited-text export capability.
pub trait ExportCsv {
    fn header(&self, separator: char) -> String;
    fn row(&self, separator: char) -> String;
}

/// Spreadsheet export capability.
pub trait ExportSheet {
    fn write_header<S: Sheet>(&self, sheet: &mut S) -> Result<(), S::Error>;
    fn write_row<S: Sheet>(&self, sheet: &mut S, row: u32) -> Result<(), S::Error>;
}

impl<T: Tabular> ExportCsv for T {
    fn header(&self, separator: char) -> String {
        join(T::columns().iter().map(|name| quote(name, separator)), separator)
    }

    fn row(&self, separator: char) -> String {
        join(
            self.cells()
                .iter()
                .map(|cell| quote(&cell.plain(), separator)),
            separator,
        )
    }
}

impl<T: Tabular> ExportSheet for T {
    fn write_header<S: Sheet>(&self, sheet: &mut S) -> Result<(), S::Error> {
        for (col, name) in (0u16..).zip(T::columns()) {
            sheet.put_text(0, col, name)?;
        }
        Ok(())
    }

    fn write_row<S: Sheet>(&self, sheet: &mut S, row: u32) -> Result<(), S::Error> {
        for (col, cell) in (0u16..).zip(self.cells()) {
            cell.write_to(sheet, row, col)?;
        }
        Ok(())
    }
}

fn join(fields: impl Iterator<Item = String>, separator: char) -> String {
    let mut line = String::new();
    for (index, field) in fields.enumerate() {
        if index > 0 {
            line.push(separator);
        }
        line.push_str(&field);
    }
    line
}

/// Quote a field containing the separator, a quote or a line break; quotes are doubled.
fn quote(field: &str, separator: char) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == separator || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::sheet::tests::GridSheet;

    struct Pair {
        name: &'static str,
        runs: u32,
        average: Option<f64>,
    }

    impl Tabular for Pair {
        fn columns() -> &'static [&'static str] {
            &["Name", "Runs", "Average"]
        }

        fn cells(&self) -> Vec<Cell> {
            vec![self.name.into(), self.runs.into(), self.average.into()]
        }
    }

    #[test]
    fn csv_fields_are_quoted_only_when_needed() {
        let row = Pair {
            name: "Smith, \"Steve\"",
            runs: 239,
            average: Some(61.8),
        };
        assert_eq!(row.header(','), "Name,Runs,Average");
        assert_eq!(row.row(','), "\"Smith, \"\"Steve\"\"\",239,61.80");
        assert_eq!(row.row(';'), "\"Smith, \"\"Steve\"\"\";239;61.80");

        let plain = Pair {
            name: "Smith, S",
            ..row
        };
        assert_eq!(plain.row(';'), "Smith, S;239;61.80");
    }

    #[test]
    fn missing_values_are_empty_fields() {
        let row = Pair {
            name: "Bradman",
            runs: 0,
            average: None,
        };
        assert_eq!(row.row(','), "Bradman,0,");
    }

    #[test]
    fn sheet_rows_keep_numbers_numeric() {
        let row = Pair {
            name: "Lara",
            runs: 400,
            average: None,
        };
        let mut sheet = GridSheet::default();
        row.write_header(&mut sheet).unwrap();
        row.write_row(&mut sheet, 1).unwrap();
        assert_eq!(sheet.text(0, 1), Some("Runs"));
        assert_eq!(sheet.text(1, 0), Some("Lara"));
        assert_eq!(sheet.number(1, 1), Some(400.0));
        assert_eq!(sheet.number(1, 2), None);
    }
}
