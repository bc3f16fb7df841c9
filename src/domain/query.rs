use crate::domain::accumulate::{ValidationErrors, validate_all};
use crate::domain::sort::SortKey;
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CountryId, DateRange, GroundId, MatchType, PageLimits, PageWindow, PlayerId, ResultFilter,
    Season, SortDirection, TeamId, VenueFilter, parse_integer,
};

/// Untyped record-query parameters, borrowed from the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRecordQuery<'a> {
    pub match_type: Option<&'a str>,
    pub team_id: Option<&'a str>,
    pub opponents_id: Option<&'a str>,
    pub ground_id: Option<&'a str>,
    pub host_country_id: Option<&'a str>,
    pub player_id: Option<&'a str>,
    pub venue: Option<&'a str>,
    pub result: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub season: Option<&'a str>,
    pub sort_order: Option<&'a str>,
    pub sort_direction: Option<&'a str>,
    pub page: Option<&'a str>,
    pub page_size: Option<&'a str>,
}

/// A fully validated record request.
///
/// Either every field parsed or the request was rejected with the complete list of failures;
/// there is no partially-valid query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    match_type: MatchType,
    team: TeamId,
    opponents: TeamId,
    ground: GroundId,
    host_country: CountryId,
    player: PlayerId,
    venue: VenueFilter,
    result: ResultFilter,
    dates: DateRange,
    season: Season,
    sort: SortKey,
    direction: SortDirection,
    window: PageWindow,
}

impl RecordQuery {
    /// Validate every parameter, collecting all failures in parameter order.
    pub fn parse(raw: RawRecordQuery<'_>, limits: PageLimits) -> Result<Self, ValidationErrors> {
        let (
            match_type,
            team,
            opponents,
            ground,
            host_country,
            player,
            venue,
            result,
            dates,
            season,
            sort,
            direction,
            window,
        ) = validate_all((
            MatchType::parse(raw.match_type),
            TeamId::from_param(TeamId::FIELD, raw.team_id),
            TeamId::from_param(TeamId::OPPONENTS_FIELD, raw.opponents_id),
            GroundId::from_param(raw.ground_id),
            CountryId::from_param(raw.host_country_id),
            PlayerId::from_param(raw.player_id),
            VenueFilter::from_param(raw.venue),
            ResultFilter::from_param(raw.result),
            DateRange::from_params(raw.start_date, raw.end_date),
            Season::parse(raw.season),
            parse_sort_key(raw.sort_order),
            SortDirection::parse(raw.sort_direction),
            PageWindow::from_params(raw.page, raw.page_size, limits),
        ))?;

        Ok(Self {
            match_type,
            team,
            opponents,
            ground,
            host_country,
            player,
            venue,
            result,
            dates,
            season,
            sort,
            direction,
            window,
        })
    }

    /// Same query with `sort` substituted when the requested key was unknown.
    pub fn or_default_sort(&self, sort: SortKey) -> Self {
        if self.sort.is_unknown() {
            Self {
                sort,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn opponents(&self) -> TeamId {
        self.opponents
    }

    pub fn ground(&self) -> GroundId {
        self.ground
    }

    pub fn host_country(&self) -> CountryId {
        self.host_country
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn venue(&self) -> VenueFilter {
        self.venue
    }

    pub fn result(&self) -> ResultFilter {
        self.result
    }

    pub fn dates(&self) -> DateRange {
        self.dates
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }
}

/// Untyped summary-lookup parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSummaryQuery<'a> {
    pub match_type: Option<&'a str>,
    pub team_id: Option<&'a str>,
    pub opponents_id: Option<&'a str>,
    pub host_country_id: Option<&'a str>,
    pub ground_id: Option<&'a str>,
}

/// Validated filters whose display names the summary lookup resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryQuery {
    pub match_type: MatchType,
    pub team: TeamId,
    pub opponents: TeamId,
    pub host_country: CountryId,
    pub ground: GroundId,
}

impl SummaryQuery {
    pub fn parse(raw: RawSummaryQuery<'_>) -> Result<Self, ValidationErrors> {
        let (match_type, team, opponents, host_country, ground) = validate_all((
            MatchType::parse(raw.match_type),
            TeamId::from_param(TeamId::FIELD, raw.team_id),
            TeamId::from_param(TeamId::OPPONENTS_FIELD, raw.opponents_id),
            CountryId::from_param(raw.host_country_id),
            GroundId::from_param(raw.ground_id),
        ))?;
        Ok(Self {
            match_type,
            team,
            opponents,
            host_country,
            ground,
        })
    }
}

/// The code must be an integer; which attribute it names is resolved totally.
fn parse_sort_key(raw: Option<&str>) -> Result<SortKey, ValidationError> {
    Ok(parse_integer(SortKey::FIELD, raw, "an integer sort code")?
        .map_or(SortKey::Unknown, SortKey::resolve))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overall_request() -> RawRecordQuery<'static> {
        RawRecordQuery {
            match_type: Some("t"),
            team_id: Some("0"),
            opponents_id: Some("0"),
            ground_id: Some("0"),
            host_country_id: Some("0"),
            sort_order: Some("4"),
            sort_direction: Some("DESC"),
            page: Some("1"),
            page_size: Some("50"),
            ..Default::default()
        }
    }

    #[test]
    fn well_formed_request_validates() {
        let query = RecordQuery::parse(overall_request(), PageLimits::default()).unwrap();
        assert_eq!(query.match_type(), MatchType::Test);
        assert!(query.team().is_all());
        assert!(query.opponents().is_all());
        assert_eq!(query.sort(), SortKey::Runs);
        assert_eq!(query.direction(), SortDirection::Desc);
        assert_eq!(query.window().size(), 50);
        assert_eq!(query.venue(), VenueFilter::all());
    }

    #[test]
    fn success_matches_independent_parsing() {
        let raw = overall_request();
        let query = RecordQuery::parse(raw, PageLimits::default()).unwrap();
        assert_eq!(Ok(query.match_type()), MatchType::parse(raw.match_type));
        assert_eq!(
            Ok(query.team()),
            TeamId::from_param(TeamId::FIELD, raw.team_id)
        );
        assert_eq!(
            Ok(query.direction()),
            SortDirection::parse(raw.sort_direction)
        );
    }

    #[test]
    fn every_malformed_field_is_reported_in_order() {
        let raw = RawRecordQuery {
            team_id: Some("-1"),
            start_date: Some("01/02/2020"),
            sort_direction: Some("SIDEWAYS"),
            ..overall_request()
        };
        let errors = RecordQuery::parse(raw, PageLimits::default()).unwrap_err();
        let fields = errors.iter().map(ValidationError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["teamId", "startDate", "sortDirection"]);
    }

    #[test]
    fn unknown_sort_code_is_not_an_error() {
        let raw = RawRecordQuery {
            sort_order: Some("999999"),
            ..overall_request()
        };
        let query = RecordQuery::parse(raw, PageLimits::default()).unwrap();
        assert!(query.sort().is_unknown());
        assert_eq!(query.or_default_sort(SortKey::Wickets).sort(), SortKey::Wickets);
    }

    #[test]
    fn non_numeric_sort_code_is_an_integer_error() {
        let raw = RawRecordQuery {
            sort_order: Some("runs"),
            ..overall_request()
        };
        let errors = RecordQuery::parse(raw, PageLimits::default()).unwrap_err();
        assert!(matches!(
            errors.first(),
            ValidationError::Integer {
                field: "sortOrder",
                ..
            }
        ));
    }

    #[test]
    fn known_sort_is_kept_over_default() {
        let query = RecordQuery::parse(overall_request(), PageLimits::default()).unwrap();
        assert_eq!(query.or_default_sort(SortKey::Wickets).sort(), SortKey::Runs);
    }

    #[test]
    fn summary_query_accumulates_id_failures() {
        let raw = RawSummaryQuery {
            team_id: Some("-3"),
            ground_id: Some("x"),
            ..Default::default()
        };
        let errors = SummaryQuery::parse(raw).unwrap_err();
        let fields = errors.iter().map(ValidationError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["teamId", "groundId"]);

        let query = SummaryQuery::parse(RawSummaryQuery::default()).unwrap();
        assert!(query.match_type.is_all());
        assert!(query.team.is_all());
    }
}
