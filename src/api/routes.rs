use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde::Serialize;
use tracing::{debug, warn};

use super::AppState;
use super::negotiate::Format;
use super::render::{ExportTarget, Renderer, failure, rejected, service_error};
use crate::domain::{
    PageLimits, PagedResult, RecordQuery, ValidationError, ValidationErrors, Wicket,
    validate_all,
};
use crate::service::{
    Category, CategoryRecords, RecordsError, SliceRepository, SummarySlice, TeamRepository,
};
use crate::transport::{ExportCsv, ExportSheet, RecordParams, SearchParams, SummaryParams};

/// Slices every category offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Summary(SummarySlice),
    InningsByInnings,
    MatchTotals,
}

impl Slice {
    fn parse(raw: &str) -> Option<Self> {
        let summary = match raw {
            "overall" => SummarySlice::Overall,
            "by-series" => SummarySlice::BySeries,
            "by-season" => SummarySlice::BySeason,
            "by-year" => SummarySlice::ByYear,
            "by-ground" => SummarySlice::ByGround,
            "by-host-country" => SummarySlice::ByHostCountry,
            "by-opponent" => SummarySlice::ByOpponent,
            "innings-by-innings" => return Some(Self::InningsByInnings),
            "match-totals" => return Some(Self::MatchTotals),
            _ => return None,
        };
        Some(Self::Summary(summary))
    }
}

/// Slices only the team category offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSlice {
    MatchResults,
    OverallExtras,
    ByInningsExtras,
    HighestChased,
    LowestDefended,
    LowestDefendedUnreduced,
}

impl TeamSlice {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "match-results" => Some(Self::MatchResults),
            "overall-extras" => Some(Self::OverallExtras),
            "by-innings-extras" => Some(Self::ByInningsExtras),
            "highest-chased" => Some(Self::HighestChased),
            "lowest-defended" => Some(Self::LowestDefended),
            "lowest-defended-unreduced" => Some(Self::LowestDefendedUnreduced),
            _ => None,
        }
    }
}

/// A `/api/records/{category}/{slice}` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRoute {
    Standard(Category, Slice),
    Team(TeamSlice),
    PartnershipByWicket,
}

impl RecordRoute {
    pub fn parse(category: &str, slice: &str) -> Option<Self> {
        let category = Category::parse(category)?;
        if let Some(standard) = Slice::parse(slice) {
            return Some(Self::Standard(category, standard));
        }
        match category {
            Category::Team => TeamSlice::parse(slice).map(Self::Team),
            Category::Partnership if slice == "innings-by-wicket" => {
                Some(Self::PartnershipByWicket)
            }
            _ => None,
        }
    }

    /// Validate the shared record parameters together with the wicket this route needs.
    fn parse_request(
        self,
        params: &RecordParams,
        limits: PageLimits,
    ) -> Result<(RecordQuery, Option<Wicket>), ValidationErrors> {
        let wicket = if self == Self::PartnershipByWicket {
            Wicket::required(params.wicket.as_deref()).map(Some)
        } else {
            Ok(None)
        };
        validate_all((RecordQuery::parse(params.as_raw(), limits), wicket))
    }
}

/// A query string axum could not decode still gets a failure envelope.
fn malformed_query(rejection: &QueryRejection) -> Response {
    let message = rejection.body_text();
    warn!(target: "cricrecords::api", error = %message, "malformed query string");
    failure(rejection.status(), message)
}

struct Reply<'a> {
    format: Format,
    target: &'a ExportTarget,
}

impl Reply<'_> {
    fn page<T>(&self, result: Result<PagedResult<T>, RecordsError>) -> Response
    where
        T: Serialize + ExportCsv + ExportSheet,
    {
        match result {
            Ok(page) => Renderer::exportable().render_page(self.format, page, self.target),
            Err(err) => service_error(err),
        }
    }

    fn value<T: Serialize>(&self, result: Result<T, RecordsError>) -> Response {
        match result {
            Ok(value) => Renderer::json_only().render_value(self.format, value, self.target),
            Err(err) => service_error(err),
        }
    }
}

pub(super) async fn records(
    State(state): State<Arc<AppState>>,
    Path((category, slice)): Path<(String, String)>,
    params: Result<Query<RecordParams>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return malformed_query(&rejection),
    };
    let Some(route) = RecordRoute::parse(&category, &slice) else {
        debug!(target: "cricrecords::api", %category, %slice, "unknown record slice");
        return failure(
            StatusCode::NOT_FOUND,
            format!("unknown record slice '{category}/{slice}'"),
        );
    };

    let (query, wicket) = match route.parse_request(&params, state.config().page_limits()) {
        Ok(parsed) => parsed,
        Err(errors) => return rejected(&errors),
    };

    let target = state.export_target(&format!("{category}-{slice}"));
    let reply = Reply {
        format: Format::negotiate(params.format.as_deref(), &headers),
        target: &target,
    };
    let service = state.service();

    match route {
        RecordRoute::Standard(Category::Batting, slice) => {
            standard(service.batting(), slice, &query, &reply).await
        }
        RecordRoute::Standard(Category::Bowling, slice) => {
            standard(service.bowling(), slice, &query, &reply).await
        }
        RecordRoute::Standard(Category::Fielding, slice) => {
            standard(service.fielding(), slice, &query, &reply).await
        }
        RecordRoute::Standard(Category::Team, slice) => {
            standard(service.team(), slice, &query, &reply).await
        }
        RecordRoute::Standard(Category::Partnership, slice) => {
            standard(service.partnership(), slice, &query, &reply).await
        }
        RecordRoute::Team(slice) => team(service.team(), slice, &query, &reply).await,
        RecordRoute::PartnershipByWicket => match wicket {
            Some(wicket) => reply.page(
                service
                    .partnership()
                    .innings_by_innings_for_wicket(&query, wicket)
                    .await,
            ),
            None => rejected(&ValidationErrors::one(ValidationError::Null {
                field: Wicket::FIELD,
            })),
        },
    }
}

async fn standard<R>(
    records: &CategoryRecords<R>,
    slice: Slice,
    query: &RecordQuery,
    reply: &Reply<'_>,
) -> Response
where
    R: SliceRepository + ?Sized,
    R::Summary: Serialize + ExportCsv + ExportSheet,
    R::Innings: Serialize + ExportCsv + ExportSheet,
{
    match slice {
        Slice::Summary(slice) => reply.page(records.summary(slice, query).await),
        Slice::InningsByInnings => reply.page(records.innings_by_innings(query).await),
        Slice::MatchTotals => reply.page(records.match_totals(query).await),
    }
}

async fn team<R: TeamRepository + ?Sized>(
    records: &CategoryRecords<R>,
    slice: TeamSlice,
    query: &RecordQuery,
    reply: &Reply<'_>,
) -> Response {
    match slice {
        TeamSlice::MatchResults => reply.page(records.match_results(query).await),
        TeamSlice::OverallExtras => reply.page(records.overall_extras(query).await),
        TeamSlice::ByInningsExtras => reply.page(records.by_innings_extras(query).await),
        TeamSlice::HighestChased => reply.page(records.highest_chased(query).await),
        TeamSlice::LowestDefended => reply.page(records.lowest_defended(query).await),
        TeamSlice::LowestDefendedUnreduced => {
            reply.page(records.lowest_defended_unreduced(query).await)
        }
    }
}

pub(super) async fn summary(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SummaryParams>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return malformed_query(&rejection),
    };
    let target = state.export_target("summary");
    let reply = Reply {
        format: Format::negotiate(params.format.as_deref(), &headers),
        target: &target,
    };
    reply.value(state.service().summary().summarise(params.as_raw()).await)
}

pub(super) async fn match_summary(
    State(state): State<Arc<AppState>>,
    Path(ca_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let target = state.export_target("match");
    let reply = Reply {
        format: Format::negotiate(None, &headers),
        target: &target,
    };
    reply.value(state.service().summary().match_summary(&ca_id).await)
}

pub(super) async fn players(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return malformed_query(&rejection),
    };
    let target = state.export_target("players");
    let reply = Reply {
        format: Format::negotiate(params.format.as_deref(), &headers),
        target: &target,
    };
    let found = state
        .service()
        .summary()
        .find_players(
            params.name.as_deref(),
            params.match_type.as_deref(),
            params.years.as_deref(),
        )
        .await;
    reply.value(found)
}

pub(super) async fn teams(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
    headers: HeaderMap,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return malformed_query(&rejection),
    };
    let target = state.export_target("teams");
    let reply = Reply {
        format: Format::negotiate(params.format.as_deref(), &headers),
        target: &target,
    };
    let found = state
        .service()
        .summary()
        .find_teams(params.name.as_deref(), params.match_type.as_deref())
        .await;
    reply.value(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_cover_every_category_and_slice() {
        assert_eq!(
            RecordRoute::parse("batting", "overall"),
            Some(RecordRoute::Standard(
                Category::Batting,
                Slice::Summary(SummarySlice::Overall)
            ))
        );
        assert_eq!(
            RecordRoute::parse("fielding", "match-totals"),
            Some(RecordRoute::Standard(Category::Fielding, Slice::MatchTotals))
        );
        assert_eq!(
            RecordRoute::parse("team", "lowest-defended-unreduced"),
            Some(RecordRoute::Team(TeamSlice::LowestDefendedUnreduced))
        );
        assert_eq!(
            RecordRoute::parse("partnership", "innings-by-wicket"),
            Some(RecordRoute::PartnershipByWicket)
        );
    }

    #[test]
    fn category_specific_slices_stay_in_their_category() {
        assert_eq!(RecordRoute::parse("batting", "highest-chased"), None);
        assert_eq!(RecordRoute::parse("team", "innings-by-wicket"), None);
        assert_eq!(RecordRoute::parse("umpiring", "overall"), None);
        assert_eq!(RecordRoute::parse("batting", "by-planet"), None);
    }

    #[test]
    fn wicket_is_validated_alongside_the_query() {
        let params = RecordParams {
            team_id: Some("-1".to_owned()),
            ..Default::default()
        };
        let errors = RecordRoute::PartnershipByWicket
            .parse_request(&params, PageLimits::default())
            .unwrap_err();
        let fields = errors.iter().map(ValidationError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["teamId", "wicket"]);

        let params = RecordParams {
            wicket: Some("3".to_owned()),
            ..Default::default()
        };
        let (_, wicket) = RecordRoute::PartnershipByWicket
            .parse_request(&params, PageLimits::default())
            .unwrap();
        assert_eq!(wicket.map(Wicket::value), Some(3));
    }
}
