use super::innings_cell;
use crate::domain::{FieldingInnings, FieldingSummary};
use crate::transport::tabular::{Cell, Tabular};

impl Tabular for FieldingSummary {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Group", "Matches", "Innings", "Dismissals",
            "Catches", "Stumpings", "Keeper Catches", "Fielder Catches", "Best Dismissals",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.group.clone().into(),
            self.matches.into(),
            self.innings.into(),
            self.dismissals().into(),
            self.catches.into(),
            self.stumpings.into(),
            self.wicket_keeper_catches.into(),
            self.fielder_catches().into(),
            self.best_dismissals.into(),
        ]
    }
}

impl Tabular for FieldingInnings {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Ground", "Date", "Innings", "Dismissals", "Catches",
            "Stumpings", "Keeper Catches",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            innings_cell(self.innings_number),
            self.dismissals().into(),
            self.catches.into(),
            self.stumpings.into(),
            self.wicket_keeper_catches.into(),
        ]
    }
}
