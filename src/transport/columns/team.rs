use super::{flag, innings_cell};
use crate::domain::{TeamExtras, TeamInnings, TeamMatchResult, TeamSummary, TeamTarget};
use crate::transport::tabular::{Cell, Tabular};

impl Tabular for TeamSummary {
    fn columns() -> &'static [&'static str] {
        &[
            "Team", "Opponents", "Group", "Matches", "Won", "Lost", "Drawn", "Tied",
            "No Result", "W/L", "Runs", "Wickets", "Run Rate", "Highest", "Lowest",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.group.clone().into(),
            self.matches.into(),
            self.won.into(),
            self.lost.into(),
            self.drawn.into(),
            self.tied.into(),
            self.no_result.into(),
            self.win_loss_ratio().into(),
            self.runs.into(),
            self.wickets_lost.into(),
            self.run_rate().into(),
            self.highest_score.into(),
            self.lowest_score.into(),
        ]
    }
}

impl Tabular for TeamInnings {
    fn columns() -> &'static [&'static str] {
        &[
            "Team", "Opponents", "Ground", "Date", "Innings", "Score", "Balls", "Result",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            innings_cell(self.innings_number),
            self.score_label().into(),
            self.balls.into(),
            self.result.clone().into(),
        ]
    }
}

impl Tabular for TeamMatchResult {
    fn columns() -> &'static [&'static str] {
        &["Match", "Team", "Opponents", "Ground", "Date", "Result", "Margin"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.ca_id.clone().into(),
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            self.result.clone().into(),
            self.margin.clone().into(),
        ]
    }
}

impl Tabular for TeamExtras {
    fn columns() -> &'static [&'static str] {
        &[
            "Team", "Opponents", "Ground", "Date", "Innings", "Byes", "Leg Byes", "Wides",
            "No Balls", "Penalties", "Extras", "Total", "Percentage",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            innings_cell(self.innings_number),
            self.byes.into(),
            self.leg_byes.into(),
            self.wides.into(),
            self.no_balls.into(),
            self.penalties.into(),
            self.total().into(),
            self.total_runs.into(),
            self.percentage().into(),
        ]
    }
}

impl Tabular for TeamTarget {
    fn columns() -> &'static [&'static str] {
        &[
            "Team", "Opponents", "Ground", "Date", "Target", "Score", "Wickets", "Balls",
            "Reduced",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.team.clone().into(),
            self.opponents.clone().into(),
            self.ground.clone().into(),
            self.match_date.into(),
            self.target.into(),
            self.score.into(),
            self.wickets.into(),
            self.balls.into(),
            flag(self.reduced),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::tabular::ExportCsv;

    #[test]
    fn aggregate_extras_leave_match_columns_empty() {
        let row = TeamExtras {
            team: "India".to_owned(),
            opponents: "All Teams".to_owned(),
            ground: None,
            match_date: None,
            innings_number: None,
            byes: 4,
            leg_byes: 6,
            wides: 8,
            no_balls: 2,
            penalties: 0,
            total_runs: 250,
        };
        assert_eq!(row.cells().len(), TeamExtras::columns().len());
        assert_eq!(row.row(','), "India,All Teams,,,,4,6,8,2,0,20,250,8.00");
    }
}
