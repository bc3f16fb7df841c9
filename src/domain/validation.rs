use std::fmt;

/// Why an id parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdProblem {
    /// Rejected by the parser: a negative number or an empty token.
    Invalid,
    /// The value was well-formed but no entity with that id exists.
    NotFound,
}

/// A single rejected request value.
///
/// Failures are plain data: parsers return them, the accumulator collects them and the API
/// joins their `Display` output into the failure envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MatchType {
        input: String,
    },
    TeamId {
        field: &'static str,
        input: String,
        problem: IdProblem,
    },
    PlayerId {
        input: String,
        problem: IdProblem,
    },
    GroundId {
        input: String,
        problem: IdProblem,
    },
    CaId {
        input: String,
        problem: IdProblem,
    },
    CountryId {
        input: String,
        problem: IdProblem,
    },
    SortDirection {
        input: String,
    },
    Season {
        input: String,
    },
    Find {
        input: String,
    },
    Years {
        input: String,
    },
    Url {
        field: &'static str,
        input: String,
    },
    SearchTeamName {
        input: String,
    },
    Null {
        field: &'static str,
    },
    DateTime {
        field: &'static str,
        input: String,
    },
    Integer {
        field: &'static str,
        input: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MatchType { .. } => "matchType",
            Self::TeamId { field, .. } => *field,
            Self::PlayerId { .. } => "playerId",
            Self::GroundId { .. } => "groundId",
            Self::CaId { .. } => "caId",
            Self::CountryId { .. } => "hostCountryId",
            Self::SortDirection { .. } => "sortDirection",
            Self::Season { .. } => "season",
            Self::Find { .. } => "name",
            Self::Years { .. } => "years",
            Self::SearchTeamName { .. } => "name",
            Self::Url { field, .. }
            | Self::Null { field }
            | Self::DateTime { field, .. }
            | Self::Integer { field, .. } => *field,
        }
    }

    /// Raw input that was rejected, if there was one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Null { .. } => None,
            Self::MatchType { input }
            | Self::TeamId { input, .. }
            | Self::PlayerId { input, .. }
            | Self::GroundId { input, .. }
            | Self::CaId { input, .. }
            | Self::CountryId { input, .. }
            | Self::SortDirection { input }
            | Self::Season { input }
            | Self::Find { input }
            | Self::Years { input }
            | Self::Url { input, .. }
            | Self::SearchTeamName { input }
            | Self::DateTime { input, .. }
            | Self::Integer { input, .. } => Some(input.as_str()),
        }
    }
}

fn write_id(
    f: &mut fmt::Formatter<'_>,
    field: &str,
    entity: &str,
    input: &str,
    problem: IdProblem,
) -> fmt::Result {
    match problem {
        IdProblem::Invalid => write!(
            f,
            "{field}: invalid {entity} id '{input}' (expected 0 for all or a positive id)"
        ),
        IdProblem::NotFound => write!(f, "{field}: no {entity} found with id '{input}'"),
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field();
        match self {
            Self::MatchType { input } => write!(f, "{field}: unknown match type '{input}'"),
            Self::TeamId { input, problem, .. } => write_id(f, field, "team", input, *problem),
            Self::PlayerId { input, problem } => write_id(f, field, "player", input, *problem),
            Self::GroundId { input, problem } => write_id(f, field, "ground", input, *problem),
            Self::CountryId { input, problem } => write_id(f, field, "country", input, *problem),
            Self::CaId { input, problem } => match problem {
                IdProblem::Invalid => write!(f, "{field}: match id must not be empty"),
                IdProblem::NotFound => write!(f, "{field}: no match found with id '{input}'"),
            },
            Self::SortDirection { input } => {
                write!(f, "{field}: invalid sort direction '{input}' (expected ASC or DESC)")
            }
            Self::Season { input } => {
                write!(f, "{field}: invalid season '{input}' (expected YYYY or YYYY/YY)")
            }
            Self::Find { input } => write!(f, "{field}: invalid player search '{input}'"),
            Self::Years { input } => {
                write!(f, "{field}: invalid years '{input}' (expected YYYY or YYYY-YYYY)")
            }
            Self::Url { input, .. } => write!(f, "{field}: invalid url '{input}'"),
            Self::SearchTeamName { input } => {
                write!(f, "{field}: invalid team search '{input}'")
            }
            Self::Null { .. } => write!(f, "{field}: a value is required"),
            Self::DateTime { input, .. } => {
                write!(f, "{field}: invalid date '{input}' (expected YYYY-MM-DD)")
            }
            Self::Integer {
                input, expected, ..
            } => write!(f, "{field}: invalid value '{input}' (expected {expected})"),
        }
    }
}

impl std::error::Error for ValidationError {}
