//! Domain layer: strong types with validation and invariants (no I/O).

mod accumulate;
mod query;
mod records;
mod response;
mod sort;
mod summary;
mod validation;
mod value;

pub use accumulate::{ValidateAll, ValidationErrors, validate_all};
pub use query::{RawRecordQuery, RawSummaryQuery, RecordQuery, SummaryQuery};
pub use records::{
    BattingInnings, BattingSummary, BowlingInnings, BowlingSummary, FieldingInnings,
    FieldingSummary, PartnershipInnings, PartnershipSummary, TeamExtras, TeamInnings,
    TeamMatchResult, TeamSummary, TeamTarget,
};
pub use response::{Envelope, PagedResult};
pub use sort::SortKey;
pub use summary::{MatchSummary, PlayerEntry, QuerySummary, TeamEntry};
pub use validation::{IdProblem, ValidationError};
pub use value::{
    CaId, CountryId, DateRange, GroundId, MatchType, PageLimits, PageWindow, PlayerId,
    PlayerSearch, ResultFilter, Season, SortDirection, TeamId, TeamSearch, VenueFilter, Wicket,
    YearSpan,
};
