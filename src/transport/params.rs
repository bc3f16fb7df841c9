use serde::Deserialize;

use crate::domain::{RawRecordQuery, RawSummaryQuery};

/// Query string of a record endpoint. Every value stays raw until the domain parsers see it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordParams {
    pub match_type: Option<String>,
    pub team_id: Option<String>,
    pub opponents_id: Option<String>,
    pub ground_id: Option<String>,
    pub host_country_id: Option<String>,
    pub player_id: Option<String>,
    pub home_or_away: Option<String>,
    pub result: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub season: Option<String>,
    pub sort_order: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub wicket: Option<String>,
    pub format: Option<String>,
}

impl RecordParams {
    pub fn as_raw(&self) -> RawRecordQuery<'_> {
        RawRecordQuery {
            match_type: self.match_type.as_deref(),
            team_id: self.team_id.as_deref(),
            opponents_id: self.opponents_id.as_deref(),
            ground_id: self.ground_id.as_deref(),
            host_country_id: self.host_country_id.as_deref(),
            player_id: self.player_id.as_deref(),
            venue: self.home_or_away.as_deref(),
            result: self.result.as_deref(),
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            season: self.season.as_deref(),
            sort_order: self.sort_order.as_deref(),
            sort_direction: self.sort_direction.as_deref(),
            page: self.page.as_deref(),
            page_size: self.page_size.as_deref(),
        }
    }
}

/// Query string of the summary lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    pub match_type: Option<String>,
    pub team_id: Option<String>,
    pub opponents_id: Option<String>,
    pub host_country_id: Option<String>,
    pub ground_id: Option<String>,
    pub format: Option<String>,
}

impl SummaryParams {
    pub fn as_raw(&self) -> RawSummaryQuery<'_> {
        RawSummaryQuery {
            match_type: self.match_type.as_deref(),
            team_id: self.team_id.as_deref(),
            opponents_id: self.opponents_id.as_deref(),
            host_country_id: self.host_country_id.as_deref(),
            ground_id: self.ground_id.as_deref(),
        }
    }
}

/// Query string of the player and team name searches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: Option<String>,
    pub match_type: Option<String>,
    pub years: Option<String>,
    pub format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_keys_map_onto_raw_query() {
        let params: RecordParams = serde_json::from_value(serde_json::json!({
            "matchType": "t",
            "homeOrAway": "3",
            "sortOrder": "4",
            "pageSize": "50",
            "format": "csv",
        }))
        .unwrap();
        let raw = params.as_raw();
        assert_eq!(raw.match_type, Some("t"));
        assert_eq!(raw.venue, Some("3"));
        assert_eq!(raw.sort_order, Some("4"));
        assert_eq!(raw.page_size, Some("50"));
        assert_eq!(raw.team_id, None);
        assert_eq!(params.format.as_deref(), Some("csv"));
    }
}
