use chrono::NaiveDate;
use serde::Serialize;

use super::ratio;

/// Aggregated partnership figures for one pair within one grouping of a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipSummary {
    /// Both batters, e.g. `JB Hobbs & H Sutcliffe`.
    pub players: String,
    pub team: String,
    pub opponents: String,
    pub group: Option<String>,
    pub innings: u32,
    pub unbroken: u32,
    pub runs: u32,
    pub highest: u32,
    pub fifties: u32,
    pub hundreds: u32,
}

impl PartnershipSummary {
    /// Runs per completed partnership.
    pub fn average(&self) -> Option<f64> {
        ratio(self.runs, self.innings.saturating_sub(self.unbroken))
    }
}

/// One partnership, or a pair's match total when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipInnings {
    pub players: String,
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub innings_number: Option<u8>,
    pub wicket: u8,
    pub runs: u32,
    pub unbroken: bool,
}
