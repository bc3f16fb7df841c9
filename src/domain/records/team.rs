use chrono::NaiveDate;
use serde::Serialize;

use super::ratio;

/// Aggregated team results within one grouping of a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team: String,
    pub opponents: String,
    pub group: Option<String>,
    pub matches: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub tied: u32,
    pub no_result: u32,
    pub runs: u32,
    pub wickets_lost: u32,
    pub balls: u32,
    pub highest_score: u32,
    pub lowest_score: Option<u32>,
}

impl TeamSummary {
    pub fn win_loss_ratio(&self) -> Option<f64> {
        ratio(self.won, self.lost)
    }

    /// Runs per six balls.
    pub fn run_rate(&self) -> Option<f64> {
        ratio(self.runs, self.balls).map(|rate| rate * 6.0)
    }
}

/// One team innings, or a team's match aggregate when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInnings {
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub innings_number: Option<u8>,
    pub score: u32,
    pub wickets: u8,
    pub declared: bool,
    pub balls: Option<u32>,
    pub result: String,
}

impl TeamInnings {
    /// Score as written on scorecards, e.g. `903/7d` or `36`.
    pub fn score_label(&self) -> String {
        let mut label = if self.wickets >= 10 {
            self.score.to_string()
        } else {
            format!("{}/{}", self.score, self.wickets)
        };
        if self.declared {
            label.push('d');
        }
        label
    }
}

/// Outcome of one match from one team's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchResult {
    pub ca_id: String,
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub result: String,
    /// Victory margin, e.g. `an innings and 579 runs`; empty when not decided.
    pub margin: String,
}

/// Extras conceded, per innings or aggregated when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamExtras {
    pub team: String,
    pub opponents: String,
    pub ground: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub innings_number: Option<u8>,
    pub byes: u32,
    pub leg_byes: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub penalties: u32,
    /// Total runs in the innings or aggregate the extras belong to.
    pub total_runs: u32,
}

impl TeamExtras {
    pub fn total(&self) -> u32 {
        [self.leg_byes, self.wides, self.no_balls, self.penalties]
            .into_iter()
            .fold(self.byes, u32::saturating_add)
    }

    /// Share of total runs that came from extras, as a percentage.
    pub fn percentage(&self) -> Option<f64> {
        ratio(self.total(), self.total_runs).map(|share| share * 100.0)
    }
}

/// A successful chase or a defended total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTarget {
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub target: u32,
    pub score: u32,
    pub wickets: u8,
    pub balls: Option<u32>,
    /// The target was revised by a rain rule.
    pub reduced: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_labels() {
        let innings = TeamInnings {
            team: "Sri Lanka".to_owned(),
            opponents: "India".to_owned(),
            ground: "Colombo (RPS)".to_owned(),
            match_date: NaiveDate::from_ymd_opt(1997, 8, 2).unwrap(),
            innings_number: Some(2),
            score: 952,
            wickets: 6,
            declared: true,
            balls: None,
            result: "Drawn".to_owned(),
        };
        assert_eq!(innings.score_label(), "952/6d");

        let all_out = TeamInnings {
            score: 36,
            wickets: 10,
            declared: false,
            ..innings
        };
        assert_eq!(all_out.score_label(), "36");
    }

    #[test]
    fn extras_total_and_share() {
        let extras = TeamExtras {
            team: "Pakistan".to_owned(),
            opponents: "West Indies".to_owned(),
            ground: None,
            match_date: None,
            innings_number: None,
            byes: 10,
            leg_byes: 5,
            wides: 3,
            no_balls: 2,
            penalties: 0,
            total_runs: 400,
        };
        assert_eq!(extras.total(), 20);
        assert_eq!(extras.percentage(), Some(5.0));
    }

    #[test]
    fn extras_total_saturates_instead_of_overflowing() {
        let extras = TeamExtras {
            team: "Kenya".to_owned(),
            opponents: "Canada".to_owned(),
            ground: None,
            match_date: None,
            innings_number: None,
            byes: u32::MAX,
            leg_byes: 7,
            wides: 1,
            no_balls: 0,
            penalties: 5,
            total_runs: 200,
        };
        assert_eq!(extras.total(), u32::MAX);
    }
}
