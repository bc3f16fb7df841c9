use chrono::NaiveDate;
use serde::Serialize;

use super::ratio;

/// Aggregated batting figures for one player within one grouping of a slice.
///
/// `group` is the slice dimension (series, season, year, ground, country or opponents) and is
/// `None` for the overall slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingSummary {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub group: Option<String>,
    pub matches: u32,
    pub innings: u32,
    pub not_outs: u32,
    pub runs: u32,
    pub high_score: u32,
    pub high_score_not_out: bool,
    pub hundreds: u32,
    pub fifties: u32,
    pub ducks: u32,
    pub fours: u32,
    pub sixes: u32,
    pub balls: Option<u32>,
}

impl BattingSummary {
    /// Runs per dismissal; `None` when never dismissed.
    pub fn average(&self) -> Option<f64> {
        ratio(self.runs, self.innings.saturating_sub(self.not_outs))
    }

    /// Runs per hundred balls, when balls faced are recorded.
    pub fn strike_rate(&self) -> Option<f64> {
        self.balls
            .and_then(|balls| ratio(self.runs, balls))
            .map(|rate| rate * 100.0)
    }

    /// High score as shown on scorecards, e.g. `183*`.
    pub fn high_score_label(&self) -> String {
        if self.high_score_not_out {
            format!("{}*", self.high_score)
        } else {
            self.high_score.to_string()
        }
    }
}

/// One batting innings, or one player's match total when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingInnings {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub innings_number: Option<u8>,
    pub runs: u32,
    pub not_out: bool,
    pub balls: Option<u32>,
    pub minutes: Option<u32>,
    pub fours: u32,
    pub sixes: u32,
}

impl BattingInnings {
    pub fn strike_rate(&self) -> Option<f64> {
        self.balls
            .and_then(|balls| ratio(self.runs, balls))
            .map(|rate| rate * 100.0)
    }
}
