use std::sync::Arc;

use tracing::{debug, error};

use super::{LookupRepository, RecordsError, SourceError};
use crate::domain::{
    CaId, CountryId, GroundId, IdProblem, MatchSummary, MatchType, PlayerEntry, PlayerSearch,
    QuerySummary, RawSummaryQuery, SummaryQuery, TeamEntry, TeamId, TeamSearch,
    ValidationError, ValidationErrors, YearSpan, validate_all,
};

const ALL_TEAMS: &str = "All Teams";
const ALL_GROUNDS: &str = "All Grounds";
const ALL_COUNTRIES: &str = "All Countries";

/// Outcome of one name lookup: the collaborator may fail, or the id may not exist.
type Lookup = Result<Result<String, ValidationError>, SourceError>;

/// Display-name resolution and name searches.
pub struct SummaryService {
    lookups: Arc<dyn LookupRepository>,
}

impl SummaryService {
    pub fn new(lookups: Arc<dyn LookupRepository>) -> Self {
        Self { lookups }
    }

    /// Resolve display names for the filters of a record request.
    ///
    /// "All" sentinels get fixed names without a lookup. Ids that do not resolve are reported
    /// together, each as its id kind with [`IdProblem::NotFound`].
    pub async fn summarise(&self, raw: RawSummaryQuery<'_>) -> Result<QuerySummary, RecordsError> {
        let query = SummaryQuery::parse(raw)?;

        let (team, opponents, host_country, ground) = tokio::join!(
            self.team_name(TeamId::FIELD, query.team),
            self.team_name(TeamId::OPPONENTS_FIELD, query.opponents),
            self.country_name(query.host_country),
            self.ground_name(query.ground),
        );

        let (team, opponents, host_country, ground) = validate_all((
            data_access(team)?,
            data_access(opponents)?,
            data_access(host_country)?,
            data_access(ground)?,
        ))?;

        Ok(QuerySummary {
            match_type: query.match_type.display_name().to_owned(),
            team,
            opponents,
            host_country,
            ground,
        })
    }

    /// Header of the match addressed by a scorecard id.
    pub async fn match_summary(&self, raw: &str) -> Result<MatchSummary, RecordsError> {
        let id = CaId::new(raw).map_err(ValidationErrors::from)?;
        debug!(target: "cricrecords::service", ca_id = id.as_str(), "looking up match");

        let found = data_access(self.lookups.match_summary(&id).await)?;
        found.ok_or_else(|| {
            ValidationErrors::from(ValidationError::CaId {
                input: id.as_str().to_owned(),
                problem: IdProblem::NotFound,
            })
            .into()
        })
    }

    pub async fn find_players(
        &self,
        name: Option<&str>,
        match_type: Option<&str>,
        years: Option<&str>,
    ) -> Result<Vec<PlayerEntry>, RecordsError> {
        let (name, match_type, years) = validate_all((
            PlayerSearch::parse(name),
            MatchType::parse(match_type),
            YearSpan::parse(years),
        ))?;
        debug!(
            target: "cricrecords::service",
            name = name.as_str(),
            match_type = match_type.code(),
            "searching players"
        );
        data_access(self.lookups.find_players(&name, match_type, years).await)
    }

    pub async fn find_teams(
        &self,
        name: Option<&str>,
        match_type: Option<&str>,
    ) -> Result<Vec<TeamEntry>, RecordsError> {
        let (name, match_type) =
            validate_all((TeamSearch::parse(name), MatchType::parse(match_type)))?;
        debug!(
            target: "cricrecords::service",
            name = name.as_str(),
            match_type = match_type.code(),
            "searching teams"
        );
        data_access(self.lookups.find_teams(&name, match_type).await)
    }

    async fn team_name(&self, field: &'static str, id: TeamId) -> Lookup {
        if id.is_all() {
            return Ok(Ok(ALL_TEAMS.to_owned()));
        }
        Ok(self
            .lookups
            .team_name(id)
            .await?
            .ok_or_else(|| ValidationError::TeamId {
                field,
                input: id.value().to_string(),
                problem: IdProblem::NotFound,
            }))
    }

    async fn ground_name(&self, id: GroundId) -> Lookup {
        if id.is_all() {
            return Ok(Ok(ALL_GROUNDS.to_owned()));
        }
        Ok(self
            .lookups
            .ground_name(id)
            .await?
            .ok_or_else(|| ValidationError::GroundId {
                input: id.value().to_string(),
                problem: IdProblem::NotFound,
            }))
    }

    async fn country_name(&self, id: CountryId) -> Lookup {
        if id.is_all() {
            return Ok(Ok(ALL_COUNTRIES.to_owned()));
        }
        Ok(self
            .lookups
            .country_name(id)
            .await?
            .ok_or_else(|| ValidationError::CountryId {
                input: id.value().to_string(),
                problem: IdProblem::NotFound,
            }))
    }
}

fn data_access<T>(result: Result<T, SourceError>) -> Result<T, RecordsError> {
    result.map_err(|source| {
        error!(target: "cricrecords::service", error = %source, "lookup failed");
        RecordsError::DataAccess(source)
    })
}
