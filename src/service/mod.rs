//! Service layer: dispatches validated queries to the data-access collaborators.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::domain::{
    BattingInnings, BattingSummary, BowlingInnings, BowlingSummary, CaId, CountryId,
    FieldingInnings, FieldingSummary, GroundId, MatchSummary, MatchType, PagedResult,
    PartnershipInnings, PartnershipSummary, PlayerEntry, PlayerSearch, RecordQuery, SortKey,
    TeamEntry, TeamExtras, TeamId, TeamInnings, TeamMatchResult, TeamSearch, TeamSummary,
    TeamTarget, ValidationErrors, Wicket, YearSpan,
};

mod records;
mod summary;

pub use records::CategoryRecords;
pub use summary::SummaryService;

#[cfg(test)]
pub(crate) use records::tests::{FakeSlices, batting_row, partnership_innings};
#[cfg(test)]
pub(crate) use summary::tests::FakeLookups;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Failure reported by a data-access collaborator.
pub type SourceError = Box<dyn StdError + Send + Sync>;

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, thiserror::Error)]
/// Errors returned by the record and lookup services.
pub enum RecordsError {
    /// Request values were rejected, or referenced ids do not exist.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The data-access collaborator failed.
    #[error("data access error: {0}")]
    DataAccess(#[source] SourceError),
}

/// Record category addressed by the first route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Batting,
    Bowling,
    Fielding,
    Team,
    Partnership,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Batting,
        Self::Bowling,
        Self::Fielding,
        Self::Team,
        Self::Partnership,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batting => "batting",
            Self::Bowling => "bowling",
            Self::Fielding => "fielding",
            Self::Team => "team",
            Self::Partnership => "partnership",
        }
    }

    /// Ordering used when the requested sort code is unknown.
    pub fn default_sort(self) -> SortKey {
        match self {
            Self::Batting => SortKey::Runs,
            Self::Bowling => SortKey::Wickets,
            Self::Fielding => SortKey::Dismissals,
            Self::Team => SortKey::Won,
            Self::Partnership => SortKey::Partnership,
        }
    }

    /// Ordering used for innings and match-total pages when the sort code is unknown.
    pub fn default_innings_sort(self) -> SortKey {
        match self {
            Self::Team => SortKey::Score,
            other => other.default_sort(),
        }
    }
}

/// Grouping of an aggregated record page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummarySlice {
    Overall,
    BySeries,
    BySeason,
    ByYear,
    ByGround,
    ByHostCountry,
    ByOpponent,
}

impl SummarySlice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::BySeries => "by-series",
            Self::BySeason => "by-season",
            Self::ByYear => "by-year",
            Self::ByGround => "by-ground",
            Self::ByHostCountry => "by-host-country",
            Self::ByOpponent => "by-opponent",
        }
    }
}

/// Extras aggregation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtrasSlice {
    Overall,
    ByInnings,
}

/// Kind of run-chase record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    HighestChased,
    LowestDefended,
    /// Lowest defended totals, excluding targets revised by a rain rule.
    LowestDefendedUnreduced,
}

/// Data access shared by every record category.
pub trait SliceRepository: Send + Sync {
    type Summary: Send;
    type Innings: Send;

    fn summary<'a>(
        &'a self,
        slice: SummarySlice,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<Self::Summary>>>;

    fn innings<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<Self::Innings>>>;

    fn match_totals<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<Self::Innings>>>;
}

/// Team data access, including result, extras and run-chase records.
pub trait TeamRepository: SliceRepository<Summary = TeamSummary, Innings = TeamInnings> {
    fn match_results<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<TeamMatchResult>>>;

    fn extras<'a>(
        &'a self,
        slice: ExtrasSlice,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<TeamExtras>>>;

    fn targets<'a>(
        &'a self,
        kind: TargetKind,
        query: &'a RecordQuery,
    ) -> BoxFuture<'a, SourceResult<PagedResult<TeamTarget>>>;
}

/// Partnership data access, including the per-wicket innings list.
pub trait PartnershipRepository:
    SliceRepository<Summary = PartnershipSummary, Innings = PartnershipInnings>
{
    fn innings_for_wicket<'a>(
        &'a self,
        query: &'a RecordQuery,
        wicket: Wicket,
    ) -> BoxFuture<'a, SourceResult<PagedResult<PartnershipInnings>>>;
}

/// Name resolution and search.
///
/// `None` means the id is well-formed but unknown.
pub trait LookupRepository: Send + Sync {
    fn team_name(&self, id: TeamId) -> BoxFuture<'_, SourceResult<Option<String>>>;

    fn ground_name(&self, id: GroundId) -> BoxFuture<'_, SourceResult<Option<String>>>;

    fn country_name(&self, id: CountryId) -> BoxFuture<'_, SourceResult<Option<String>>>;

    fn match_summary<'a>(
        &'a self,
        id: &'a CaId,
    ) -> BoxFuture<'a, SourceResult<Option<MatchSummary>>>;

    fn find_players<'a>(
        &'a self,
        name: &'a PlayerSearch,
        match_type: MatchType,
        years: Option<YearSpan>,
    ) -> BoxFuture<'a, SourceResult<Vec<PlayerEntry>>>;

    fn find_teams<'a>(
        &'a self,
        name: &'a TeamSearch,
        match_type: MatchType,
    ) -> BoxFuture<'a, SourceResult<Vec<TeamEntry>>>;
}

pub type BattingRepository =
    dyn SliceRepository<Summary = BattingSummary, Innings = BattingInnings>;
pub type BowlingRepository =
    dyn SliceRepository<Summary = BowlingSummary, Innings = BowlingInnings>;
pub type FieldingRepository =
    dyn SliceRepository<Summary = FieldingSummary, Innings = FieldingInnings>;

pub type BattingRecords = CategoryRecords<BattingRepository>;
pub type BowlingRecords = CategoryRecords<BowlingRepository>;
pub type FieldingRecords = CategoryRecords<FieldingRepository>;
pub type TeamRecords = CategoryRecords<dyn TeamRepository>;
pub type PartnershipRecords = CategoryRecords<dyn PartnershipRepository>;

/// Data-access collaborators the services are wired to.
#[derive(Clone)]
pub struct Repositories {
    pub batting: Arc<BattingRepository>,
    pub bowling: Arc<BowlingRepository>,
    pub fielding: Arc<FieldingRepository>,
    pub team: Arc<dyn TeamRepository>,
    pub partnership: Arc<dyn PartnershipRepository>,
    pub lookups: Arc<dyn LookupRepository>,
}

/// Every record and lookup service, wired once at start-up.
pub struct RecordsService {
    batting: BattingRecords,
    bowling: BowlingRecords,
    fielding: FieldingRecords,
    team: TeamRecords,
    partnership: PartnershipRecords,
    summary: SummaryService,
}

impl RecordsService {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            batting: CategoryRecords::new(Category::Batting, repositories.batting),
            bowling: CategoryRecords::new(Category::Bowling, repositories.bowling),
            fielding: CategoryRecords::new(Category::Fielding, repositories.fielding),
            team: CategoryRecords::new(Category::Team, repositories.team),
            partnership: CategoryRecords::new(Category::Partnership, repositories.partnership),
            summary: SummaryService::new(repositories.lookups),
        }
    }

    pub fn batting(&self) -> &BattingRecords {
        &self.batting
    }

    pub fn bowling(&self) -> &BowlingRecords {
        &self.bowling
    }

    pub fn fielding(&self) -> &FieldingRecords {
        &self.fielding
    }

    pub fn team(&self) -> &TeamRecords {
        &self.team
    }

    pub fn partnership(&self) -> &PartnershipRecords {
        &self.partnership
    }

    pub fn summary(&self) -> &SummaryService {
        &self.summary
    }
}
