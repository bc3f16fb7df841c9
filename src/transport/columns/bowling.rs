use super::innings_cell;
use crate::domain::{BowlingInnings, BowlingSummary};
use crate::transport::tabular::{Cell, Tabular};

impl Tabular for BowlingSummary {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Group", "Matches", "Innings", "Balls", "Maidens",
            "Runs", "Wickets", "Best Innings", "Best Match", "Average", "Economy",
            "Strike Rate", "4w", "5w", "10w",
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
            self.balls.into(),
            self.maidens.into(),
            self.runs_conceded.into(),
            self.wickets.into(),
            self.best_innings.clone().into(),
            self.best_match.clone().into(),
            self.average().into(),
            self.economy().into(),
            self.strike_rate().into(),
            self.four_wicket_innings.into(),
            self.five_wicket_innings.into(),
            self.ten_wicket_matches.into(),
        ]
    }
}

impl Tabular for BowlingInnings {
    fn columns() -> &'static [&'static str] {
        &[
            "Name", "Team", "Opponents", "Ground", "Date", "Innings", "Overs", "Maidens",
            "Runs", "Wickets", "Economy",
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
            self.overs().into(),
            self.maidens.into(),
            self.runs_conceded.into(),
            self.wickets.into(),
            self.economy().into(),
        ]
    }
}
