//! Transport layer: raw request parameters and export wire formats.

mod columns;
mod csv;
mod params;
mod sheet;
mod tabular;

pub use csv::encode_csv;
pub use params::{RecordParams, SearchParams, SummaryParams};
pub use sheet::{Sheet, encode_workbook};
pub use tabular::{Cell, ExportCsv, ExportSheet, Tabular};
