use chrono::NaiveDate;
use serde::Serialize;

/// Display names for the filters of a record request, shown above a record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySummary {
    pub match_type: String,
    pub team: String,
    pub opponents: String,
    pub host_country: String,
    pub ground: String,
}

/// Header of a single match, addressed by its scorecard id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub ca_id: String,
    pub match_type: String,
    pub home_team: String,
    pub away_team: String,
    pub ground: String,
    pub start_date: NaiveDate,
    pub result: String,
}

/// One player found by a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub player_id: u32,
    pub name: String,
    pub teams: String,
    pub first_year: u16,
    pub last_year: u16,
    pub matches: u32,
}

/// One team found by a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub team_id: u32,
    pub name: String,
    pub match_type: String,
    pub matches: u32,
}
