//! Export column layouts for every record row.

mod batting;
mod bowling;
mod fielding;
mod partnership;
mod team;

use super::tabular::Cell;

fn innings_cell(innings_number: Option<u8>) -> Cell {
    innings_number.into()
}

fn flag(set: bool) -> Cell {
    if set { "Yes".into() } else { "No".into() }
}
