use chrono::NaiveDate;
use serde::Serialize;

use super::ratio;

/// Aggregated bowling figures for one player within one grouping of a slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingSummary {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub group: Option<String>,
    pub matches: u32,
    pub innings: u32,
    pub balls: u32,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    /// Best innings figures, e.g. `7/43`.
    pub best_innings: Option<String>,
    /// Best match figures, e.g. `12/110`.
    pub best_match: Option<String>,
    pub four_wicket_innings: u32,
    pub five_wicket_innings: u32,
    pub ten_wicket_matches: u32,
}

impl BowlingSummary {
    /// Runs conceded per wicket.
    pub fn average(&self) -> Option<f64> {
        ratio(self.runs_conceded, self.wickets)
    }

    /// Runs conceded per six balls.
    pub fn economy(&self) -> Option<f64> {
        ratio(self.runs_conceded, self.balls).map(|rate| rate * 6.0)
    }

    /// Balls per wicket.
    pub fn strike_rate(&self) -> Option<f64> {
        ratio(self.balls, self.wickets)
    }
}

/// One bowling innings, or one player's match figures when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingInnings {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub innings_number: Option<u8>,
    pub balls: u32,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

impl BowlingInnings {
    /// Overs in `overs.balls` notation for six-ball overs.
    pub fn overs(&self) -> String {
        format!("{}.{}", self.balls / 6, self.balls % 6)
    }

    pub fn economy(&self) -> Option<f64> {
        ratio(self.runs_conceded, self.balls).map(|rate| rate * 6.0)
    }
}
