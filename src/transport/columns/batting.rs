use super::innings_cell;
use crate::domain::{BattingInnings, BattingSummary};
use crate::transport::tabular::{Cell, Tabular};

impl Tabular for BattingSummary {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Group", "Matches", "Innings", "Not Outs", "Runs",
            "Highest Score", "Average", "Hundreds", "Fifties", "Ducks", "Fours", "Sixes",
            "Balls", "Strike Rate",
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
            self.not_outs.into(),
            self.runs.into(),
            self.high_score_label().into(),
            self.average().into(),
            self.hundreds.into(),
            self.fifties.into(),
            self.ducks.into(),
            self.fours.into(),
            self.sixes.into(),
            self.balls.into(),
            self.strike_rate().into(),
        ]
    }
}

impl Tabular for BattingInnings {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Ground", "Date", "Innings", "Runs", "Balls",
            "Minutes", "Fours", "Sixes", "Strike Rate",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        let runs = if self.not_out {
            format!("{}*", self.runs)
        } else {
            self.runs.to_string()
        };
        vec![
            self.name.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            innings_cell(self.innings_number),
            runs.into(),
            self.balls.into(),
            self.minutes.into(),
            self.fours.into(),
            self.sixes.into(),
            self.strike_rate().into(),
        ]
    }
}
