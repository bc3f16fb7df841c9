use super::{flag, innings_cell};
use crate::domain::{PartnershipInnings, PartnershipSummary};
use crate::transport::tabular::{Cell, Tabular};

impl Tabular for PartnershipSummary {
    fn columns() -> &'static [&'static str] {
        &[
            "Players", "Team", "Opponents", "Group", "Innings", "Unbroken", "Runs", "Highest",
            "Average", "Fifties", "Hundreds",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.players.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.group.clone().into(),
            self.innings.into(),
            self.unbroken.into(),
            self.runs.into(),
            self.highest.into(),
            self.average().into(),
            self.fifties.into(),
            self.hundreds.into(),
        ]
    }
}

impl Tabular for PartnershipInnings {
    fn columns() -> &'static [&'static str] {
        &[
            "Players", "Team", "Opponents", "Ground", "Date", "Innings", "Wicket", "Runs",
            "Unbroken",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.players.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            innings_cell(self.innings_number),
            self.wicket.into(),
            self.runs.into(),
            flag(self.unbroken),
        ]
    }
}
