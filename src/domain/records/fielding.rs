use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated fielding figures for one player within one grouping of a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldingSummary {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub group: Option<String>,
    pub matches: u32,
    pub innings: u32,
    pub catches: u32,
    pub stumpings: u32,
    pub wicket_keeper_catches: u32,
    /// Most dismissals in a single innings.
    pub best_dismissals: u32,
}

impl FieldingSummary {
    pub fn dismissals(&self) -> u32 {
        self.catches + self.stumpings
    }

    /// Catches taken while not keeping wicket.
    pub fn fielder_catches(&self) -> u32 {
        self.catches.saturating_sub(self.wicket_keeper_catches)
    }
}

/// Fielding in one innings, or one player's match total when `innings_number` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldingInnings {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub opponents: String,
    pub ground: String,
    pub match_date: NaiveDate,
    pub innings_number: Option<u8>,
    pub catches: u32,
    pub stumpings: u32,
    pub wicket_keeper_catches: u32,
}

impl FieldingInnings {
    pub fn dismissals(&self) -> u32 {
        self.catches + self.stumpings
    }
}
