use chrono::NaiveDate;

use crate::domain::accumulate::{ValidationErrors, validate_all};
use crate::domain::validation::{IdProblem, ValidationError};

/// Trim a raw parameter, mapping absent and blank input to `None`.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parse an optional integer parameter.
///
/// Absent or blank input is `Ok(None)`; anything that is not an integer is an
/// [`ValidationError::Integer`] for `field`.
pub(crate) fn parse_integer(
    field: &'static str,
    raw: Option<&str>,
    expected: &'static str,
) -> Result<Option<i64>, ValidationError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::Integer {
            field,
            input: value.to_owned(),
            expected,
        })
}

const ID_EXPECTED: &str = "an integer id";

/// Competition vocabulary accepted in `matchType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchType {
    /// No match-type filter.
    #[default]
    All,
    Test,
    Odi,
    T20i,
    FirstClass,
    ListA,
    T20,
    WomensTest,
    WomensOdi,
    WomensT20i,
    WomensFirstClass,
    WomensListA,
    WomensT20,
    MinorCountiesChampionship,
    MinorCountiesTrophy,
    SecondElevenChampionship,
    SecondElevenTrophy,
}

impl MatchType {
    /// Query parameter name (`matchType`).
    pub const FIELD: &'static str = "matchType";

    /// Every concrete competition, in display order.
    pub const COMPETITIONS: [MatchType; 16] = [
        Self::Test,
        Self::Odi,
        Self::T20i,
        Self::FirstClass,
        Self::ListA,
        Self::T20,
        Self::WomensTest,
        Self::WomensOdi,
        Self::WomensT20i,
        Self::WomensFirstClass,
        Self::WomensListA,
        Self::WomensT20,
        Self::MinorCountiesChampionship,
        Self::MinorCountiesTrophy,
        Self::SecondElevenChampionship,
        Self::SecondElevenTrophy,
    ];

    /// Parse a competition code.
    ///
    /// Absent or blank input means "all match types" and is not a failure.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let Some(value) = present(raw) else {
            return Ok(Self::All);
        };
        Self::from_code(value).ok_or_else(|| ValidationError::MatchType {
            input: value.to_owned(),
        })
    }

    /// Look up a competition by its wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::COMPETITIONS
            .into_iter()
            .find(|match_type| match_type.code() == code)
    }

    /// Wire code; empty for [`MatchType::All`].
    pub fn code(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Test => "t",
            Self::Odi => "o",
            Self::T20i => "itt",
            Self::FirstClass => "f",
            Self::ListA => "a",
            Self::T20 => "tt",
            Self::WomensTest => "wt",
            Self::WomensOdi => "wo",
            Self::WomensT20i => "witt",
            Self::WomensFirstClass => "wf",
            Self::WomensListA => "wa",
            Self::WomensT20 => "wtt",
            Self::MinorCountiesChampionship => "minc",
            Self::MinorCountiesTrophy => "mint",
            Self::SecondElevenChampionship => "sec",
            Self::SecondElevenTrophy => "sect",
        }
    }

    /// Human-readable competition name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::All => "All Match Types",
            Self::Test => "Test Matches",
            Self::Odi => "One Day Internationals",
            Self::T20i => "T20 Internationals",
            Self::FirstClass => "First Class Matches",
            Self::ListA => "List A Matches",
            Self::T20 => "Twenty20 Matches",
            Self::WomensTest => "Women's Test Matches",
            Self::WomensOdi => "Women's One Day Internationals",
            Self::WomensT20i => "Women's T20 Internationals",
            Self::WomensFirstClass => "Women's First Class Matches",
            Self::WomensListA => "Women's List A Matches",
            Self::WomensT20 => "Women's Twenty20 Matches",
            Self::MinorCountiesChampionship => "Minor Counties Championship",
            Self::MinorCountiesTrophy => "Minor Counties Trophy",
            Self::SecondElevenChampionship => "Second XI Championship",
            Self::SecondElevenTrophy => "Second XI Trophy",
        }
    }

    pub fn is_all(self) -> bool {
        self == Self::All
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Team identifier.
///
/// Invariant: non-negative. `0` means "any team".
pub struct TeamId(u32);

impl TeamId {
    /// Query parameter name for the batting/bowling side (`teamId`).
    pub const FIELD: &'static str = "teamId";
    /// Query parameter name for the opposition (`opponentsId`).
    pub const OPPONENTS_FIELD: &'static str = "opponentsId";
    /// Sentinel for "any team".
    pub const ALL: Self = Self(0);

    /// Create a validated [`TeamId`] for the `teamId` parameter.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        Self::for_field(Self::FIELD, value)
    }

    /// Parse the raw parameter `field` (`teamId` or `opponentsId`).
    pub fn from_param(field: &'static str, raw: Option<&str>) -> Result<Self, ValidationError> {
        match parse_integer(field, raw, ID_EXPECTED)? {
            None => Ok(Self::ALL),
            Some(value) => Self::for_field(field, value),
        }
    }

    fn for_field(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::TeamId {
                field,
                input: value.to_string(),
                problem: IdProblem::Invalid,
            })
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Player identifier.
///
/// Invariant: non-negative. `0` means "any player".
pub struct PlayerId(u32);

impl PlayerId {
    /// Query parameter name (`playerId`).
    pub const FIELD: &'static str = "playerId";
    /// Sentinel for "any player".
    pub const ALL: Self = Self(0);

    /// Create a validated [`PlayerId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::PlayerId {
                input: value.to_string(),
                problem: IdProblem::Invalid,
            })
    }

    /// Parse the raw `playerId` parameter.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ValidationError> {
        match parse_integer(Self::FIELD, raw, ID_EXPECTED)? {
            None => Ok(Self::ALL),
            Some(value) => Self::new(value),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Ground identifier.
///
/// Invariant: non-negative. `0` means "any ground".
pub struct GroundId(u32);

impl GroundId {
    /// Query parameter name (`groundId`).
    pub const FIELD: &'static str = "groundId";
    /// Sentinel for "any ground".
    pub const ALL: Self = Self(0);

    /// Create a validated [`GroundId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::GroundId {
                input: value.to_string(),
                problem: IdProblem::Invalid,
            })
    }

    /// Parse the raw `groundId` parameter.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ValidationError> {
        match parse_integer(Self::FIELD, raw, ID_EXPECTED)? {
            None => Ok(Self::ALL),
            Some(value) => Self::new(value),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Host country identifier.
///
/// Invariant: non-negative. `0` means "any country".
pub struct CountryId(u32);

impl CountryId {
    /// Query parameter name (`hostCountryId`).
    pub const FIELD: &'static str = "hostCountryId";
    /// Sentinel for "any country".
    pub const ALL: Self = Self(0);

    /// Create a validated [`CountryId`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::CountryId {
                input: value.to_string(),
                problem: IdProblem::Invalid,
            })
    }

    /// Parse the raw `hostCountryId` parameter.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ValidationError> {
        match parse_integer(Self::FIELD, raw, ID_EXPECTED)? {
            None => Ok(Self::ALL),
            Some(value) => Self::new(value),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Match identifier taken from the route.
///
/// Invariant: non-empty after trimming.
pub struct CaId(String);

impl CaId {
    /// Route parameter name (`caId`).
    pub const FIELD: &'static str = "caId";

    /// Create a validated [`CaId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::CaId {
                input: value,
                problem: IdProblem::Invalid,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordering direction for the chosen sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    /// Records are ranked highest first unless asked otherwise.
    #[default]
    Desc,
}

impl SortDirection {
    /// Query parameter name (`sortDirection`).
    pub const FIELD: &'static str = "sortDirection";

    /// Parse `ASC` / `DESC`, ignoring case. Absent input is [`SortDirection::Desc`].
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let Some(value) = present(raw) else {
            return Ok(Self::default());
        };
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ValidationError::SortDirection {
                input: value.to_owned(),
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

const FIRST_SEASON: u16 = 1700;
const LAST_SEASON: u16 = 2200;

/// Season filter: a single year (`2019`) or a split season (`2019/20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    #[default]
    All,
    Year(u16),
    Split(u16),
}

impl Season {
    /// Query parameter name (`season`).
    pub const FIELD: &'static str = "season";

    /// Parse a season. Absent, blank or `0` input means "all seasons".
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let Some(value) = present(raw) else {
            return Ok(Self::All);
        };
        if value == "0" {
            return Ok(Self::All);
        }
        let invalid = || ValidationError::Season {
            input: value.to_owned(),
        };

        match value.split_once('/') {
            None => parse_year(value).map(Self::Year).ok_or_else(invalid),
            Some((first, second)) => {
                let start = parse_year(first).ok_or_else(invalid)?;
                if second.len() != 2 || !second.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let next: u16 = second.parse().map_err(|_| invalid())?;
                if (start + 1) % 100 != next {
                    return Err(invalid());
                }
                Ok(Self::Split(start))
            }
        }
    }

    /// Wire form, e.g. `2019` or `2019/20`; `None` for [`Season::All`].
    pub fn label(self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Year(year) => Some(year.to_string()),
            Self::Split(start) => Some(format!("{start}/{:02}", (start + 1) % 100)),
        }
    }
}

fn parse_year(raw: &str) -> Option<u16> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>()
        .ok()
        .filter(|year| (FIRST_SEASON..=LAST_SEASON).contains(year))
}

/// Inclusive match-date range. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Query parameter name of the lower bound (`startDate`).
    pub const START_FIELD: &'static str = "startDate";
    /// Query parameter name of the upper bound (`endDate`).
    pub const END_FIELD: &'static str = "endDate";
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Create a validated range from already-parsed bounds.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ValidationError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ValidationError::DateTime {
                    field: Self::END_FIELD,
                    input: end.format(Self::FORMAT).to_string(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds, reporting every malformed one.
    pub fn from_params(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let (start, end) = validate_all((
            Self::parse_bound(Self::START_FIELD, start),
            Self::parse_bound(Self::END_FIELD, end),
        ))?;
        Self::new(start, end).map_err(ValidationErrors::from)
    }

    fn parse_bound(
        field: &'static str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDate>, ValidationError> {
        let Some(value) = present(raw) else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::DateTime {
                field,
                input: value.to_owned(),
            })
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Venue filter (`homeOrAway`) as a bitmask of home, away and neutral.
///
/// Invariant: `0..=7`; `0` and `7` both mean "all venues".
pub struct VenueFilter(u8);

impl VenueFilter {
    /// Query parameter name (`homeOrAway`).
    pub const FIELD: &'static str = "homeOrAway";
    pub const HOME: u8 = 1;
    pub const AWAY: u8 = 2;
    pub const NEUTRAL: u8 = 4;
    const MASK: u8 = Self::HOME | Self::AWAY | Self::NEUTRAL;

    pub fn all() -> Self {
        Self(Self::MASK)
    }

    /// Parse the raw bitmask.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ValidationError> {
        let value = parse_integer(Self::FIELD, raw, "a venue mask between 0 and 7")?;
        Self::from_bits(value).ok_or_else(|| ValidationError::Integer {
            field: Self::FIELD,
            input: value.map(|v| v.to_string()).unwrap_or_default(),
            expected: "a venue mask between 0 and 7",
        })
    }

    fn from_bits(value: Option<i64>) -> Option<Self> {
        match value {
            None | Some(0) => Some(Self::all()),
            Some(bits) => u8::try_from(bits)
                .ok()
                .filter(|bits| bits & !Self::MASK == 0)
                .map(Self),
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn includes(self, flag: u8) -> bool {
        self.0 & flag == flag
    }
}

impl Default for VenueFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Match result filter (`result`) as a bitmask of won, lost, drawn, tied and no result.
///
/// Invariant: `0..=31`; `0` and `31` both mean "all results".
pub struct ResultFilter(u8);

impl ResultFilter {
    /// Query parameter name (`result`).
    pub const FIELD: &'static str = "result";
    pub const WON: u8 = 1;
    pub const LOST: u8 = 2;
    pub const DRAWN: u8 = 4;
    pub const TIED: u8 = 8;
    pub const NO_RESULT: u8 = 16;
    const MASK: u8 = Self::WON | Self::LOST | Self::DRAWN | Self::TIED | Self::NO_RESULT;

    pub fn all() -> Self {
        Self(Self::MASK)
    }

    /// Parse the raw bitmask.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ValidationError> {
        let value = parse_integer(Self::FIELD, raw, "a result mask between 0 and 31")?;
        let filter = match value {
            None | Some(0) => Some(Self::all()),
            Some(bits) => u8::try_from(bits)
                .ok()
                .filter(|bits| bits & !Self::MASK == 0)
                .map(Self),
        };
        filter.ok_or_else(|| ValidationError::Integer {
            field: Self::FIELD,
            input: value.map(|v| v.to_string()).unwrap_or_default(),
            expected: "a result mask between 0 and 31",
        })
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn includes(self, flag: u8) -> bool {
        self.0 & flag == flag
    }
}

impl Default for ResultFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Bounds applied to `pageSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One page of a result set.
///
/// Invariant: `page >= 1` and `size >= 1`.
pub struct PageWindow {
    page: u32,
    size: u32,
}

impl PageWindow {
    /// Query parameter name of the 1-based page number (`page`).
    pub const PAGE_FIELD: &'static str = "page";
    /// Query parameter name of the page length (`pageSize`).
    pub const SIZE_FIELD: &'static str = "pageSize";

    /// Parse `page` and `pageSize`, reporting both when both are bad.
    pub fn from_params(
        page: Option<&str>,
        size: Option<&str>,
        limits: PageLimits,
    ) -> Result<Self, ValidationErrors> {
        let page = parse_integer(Self::PAGE_FIELD, page, "a page number of at least 1").and_then(
            |value| match value {
                None => Ok(1),
                Some(value) => u32::try_from(value)
                    .ok()
                    .filter(|page| *page >= 1)
                    .ok_or_else(|| ValidationError::Integer {
                        field: Self::PAGE_FIELD,
                        input: value.to_string(),
                        expected: "a page number of at least 1",
                    }),
            },
        );
        let size = parse_integer(Self::SIZE_FIELD, size, "a positive page size").and_then(
            |value| match value {
                None => Ok(limits.default_page_size),
                Some(value) => u32::try_from(value)
                    .ok()
                    .filter(|size| (1..=limits.max_page_size).contains(size))
                    .ok_or_else(|| ValidationError::Integer {
                        field: Self::SIZE_FIELD,
                        input: value.to_string(),
                        expected: "a positive page size within the configured maximum",
                    }),
            },
        );
        let (page, size) = validate_all((page, size))?;
        Ok(Self { page, size })
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn size(self) -> u32 {
        self.size
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageLimits::default().default_page_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Wicket number for partnership records.
///
/// Invariant: `1..=10`.
pub struct Wicket(u8);

impl Wicket {
    /// Query parameter name (`wicket`).
    pub const FIELD: &'static str = "wicket";
    const EXPECTED: &'static str = "a wicket between 1 and 10";

    /// Create a validated [`Wicket`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|wicket| (1..=10).contains(wicket))
            .map(Self)
            .ok_or_else(|| ValidationError::Integer {
                field: Self::FIELD,
                input: value.to_string(),
                expected: Self::EXPECTED,
            })
    }

    /// Parse a wicket that must be present.
    pub fn required(raw: Option<&str>) -> Result<Self, ValidationError> {
        match parse_integer(Self::FIELD, raw, Self::EXPECTED)? {
            None => Err(ValidationError::Null { field: Self::FIELD }),
            Some(value) => Self::new(value),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Player-name search fragment.
///
/// Invariant: 2..=50 characters after trimming, letters, spaces, `'`, `-` and `.` only.
pub struct PlayerSearch(String);

impl PlayerSearch {
    /// Query parameter name (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`PlayerSearch`]. Absent input is a [`ValidationError::Null`].
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let value = present(raw).ok_or(ValidationError::Null { field: Self::FIELD })?;
        Self::new(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let length = trimmed.chars().count();
        let allowed = trimmed
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '-' | '.'));
        if !(2..=50).contains(&length) || !allowed {
            return Err(ValidationError::Find { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Team-name search fragment.
///
/// Invariant: 1..=60 characters after trimming, letters, digits, spaces, `&`, `'`, `-` and `.`.
pub struct TeamSearch(String);

impl TeamSearch {
    /// Query parameter name (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`TeamSearch`]. Absent input is a [`ValidationError::Null`].
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let value = present(raw).ok_or(ValidationError::Null { field: Self::FIELD })?;
        Self::new(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let length = trimmed.chars().count();
        let allowed = trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '&' | '\'' | '-' | '.'));
        if !(1..=60).contains(&length) || !allowed {
            return Err(ValidationError::SearchTeamName { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Inclusive span of calendar years, e.g. `1990-2001`.
///
/// Invariant: `first <= last`.
pub struct YearSpan {
    first: u16,
    last: u16,
}

impl YearSpan {
    /// Query parameter name (`years`).
    pub const FIELD: &'static str = "years";

    /// Parse an optional span; absent input is `Ok(None)`.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        let Some(value) = present(raw) else {
            return Ok(None);
        };
        let invalid = || ValidationError::Years {
            input: value.to_owned(),
        };
        let (first, last) = match value.split_once('-') {
            None => {
                let year = parse_year(value).ok_or_else(invalid)?;
                (year, year)
            }
            Some((first, last)) => (
                parse_year(first.trim()).ok_or_else(invalid)?,
                parse_year(last.trim()).ok_or_else(invalid)?,
            ),
        };
        if first > last {
            return Err(invalid());
        }
        Ok(Some(Self { first, last }))
    }

    pub fn first(self) -> u16 {
        self.first
    }

    pub fn last(self) -> u16 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_type_accepts_vocabulary_and_absence() {
        assert_eq!(MatchType::parse(None), Ok(MatchType::All));
        assert_eq!(MatchType::parse(Some("  ")), Ok(MatchType::All));
        assert_eq!(MatchType::parse(Some("t")), Ok(MatchType::Test));
        assert_eq!(MatchType::parse(Some(" witt ")), Ok(MatchType::WomensT20i));
        assert_eq!(MatchType::parse(Some("minc")), Ok(MatchType::MinorCountiesChampionship));
        assert!(matches!(
            MatchType::parse(Some("xx")),
            Err(ValidationError::MatchType { input }) if input == "xx"
        ));
    }

    #[test]
    fn match_type_codes_round_trip() {
        for match_type in MatchType::COMPETITIONS {
            assert_eq!(MatchType::from_code(match_type.code()), Some(match_type));
        }
        assert_eq!(MatchType::from_code(""), None);
    }

    #[test]
    fn team_id_sentinel_negative_and_positive() {
        assert_eq!(TeamId::from_param(TeamId::FIELD, Some("0")), Ok(TeamId::ALL));
        assert_eq!(TeamId::from_param(TeamId::FIELD, None), Ok(TeamId::ALL));
        assert!(TeamId::from_param(TeamId::FIELD, None).unwrap().is_all());
        assert!(matches!(
            TeamId::new(-5),
            Err(ValidationError::TeamId {
                field: TeamId::FIELD,
                problem: IdProblem::Invalid,
                ..
            })
        ));
        assert_eq!(TeamId::new(42).unwrap().value(), 42);
    }

    #[test]
    fn team_id_reports_the_field_it_was_parsed_for() {
        let err = TeamId::from_param(TeamId::OPPONENTS_FIELD, Some("-1")).unwrap_err();
        assert_eq!(err.field(), "opponentsId");

        let err = TeamId::from_param(TeamId::FIELD, Some("abc")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Integer { field: "teamId", .. }
        ));
    }

    #[test]
    fn other_ids_use_their_own_variants() {
        assert!(matches!(
            GroundId::from_param(Some("-2")),
            Err(ValidationError::GroundId { .. })
        ));
        assert!(matches!(
            CountryId::from_param(Some("-2")),
            Err(ValidationError::CountryId { .. })
        ));
        assert!(matches!(
            PlayerId::from_param(Some("-2")),
            Err(ValidationError::PlayerId { .. })
        ));
        assert_eq!(GroundId::from_param(Some("12")).unwrap().value(), 12);
        assert!(CountryId::from_param(None).unwrap().is_all());
        assert!(PlayerId::from_param(Some("0")).unwrap().is_all());
    }

    #[test]
    fn ca_id_trims_and_rejects_empty() {
        assert_eq!(CaId::new(" 12345 ").unwrap().as_str(), "12345");
        assert!(matches!(
            CaId::new("   "),
            Err(ValidationError::CaId { .. })
        ));
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse(Some("asc")), Ok(SortDirection::Asc));
        assert_eq!(SortDirection::parse(Some("DESC")), Ok(SortDirection::Desc));
        assert_eq!(SortDirection::parse(Some("Desc")), Ok(SortDirection::Desc));
        assert_eq!(SortDirection::parse(None), Ok(SortDirection::Desc));
        assert!(SortDirection::parse(Some("SIDEWAYS")).is_err());
    }

    #[test]
    fn season_accepts_single_and_split_years() {
        assert_eq!(Season::parse(None), Ok(Season::All));
        assert_eq!(Season::parse(Some("0")), Ok(Season::All));
        assert_eq!(Season::parse(Some("2019")), Ok(Season::Year(2019)));
        assert_eq!(Season::parse(Some("2019/20")), Ok(Season::Split(2019)));
        assert_eq!(Season::parse(Some("1999/00")), Ok(Season::Split(1999)));
        assert_eq!(Season::Split(1999).label().as_deref(), Some("1999/00"));
        assert!(Season::parse(Some("2019/21")).is_err());
        assert!(Season::parse(Some("19/20")).is_err());
        assert!(Season::parse(Some("summer")).is_err());
    }

    #[test]
    fn date_range_accumulates_both_bounds() {
        let errors = DateRange::from_params(Some("2020-13-01"), Some("yesterday")).unwrap_err();
        let fields = errors.iter().map(ValidationError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec!["startDate", "endDate"]);
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let err = DateRange::from_params(Some("2021-01-01"), Some("2020-01-01")).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.first().field(), "endDate");

        let range = DateRange::from_params(Some("2020-01-01"), None).unwrap();
        let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        assert!(range.contains(day));
        assert_eq!(range.end(), None);
    }

    #[test]
    fn venue_and_result_masks_are_bounded() {
        assert_eq!(VenueFilter::from_param(None), Ok(VenueFilter::all()));
        assert_eq!(VenueFilter::from_param(Some("0")), Ok(VenueFilter::all()));
        let home = VenueFilter::from_param(Some("1")).unwrap();
        assert!(home.includes(VenueFilter::HOME));
        assert!(!home.includes(VenueFilter::AWAY));
        assert!(VenueFilter::from_param(Some("8")).is_err());

        let results = ResultFilter::from_param(Some("5")).unwrap();
        assert!(results.includes(ResultFilter::WON));
        assert!(results.includes(ResultFilter::DRAWN));
        assert!(!results.includes(ResultFilter::LOST));
        assert!(ResultFilter::from_param(Some("32")).is_err());
        assert!(ResultFilter::from_param(Some("-1")).is_err());
    }

    #[test]
    fn page_window_defaults_and_limits() {
        let limits = PageLimits::default();
        let window = PageWindow::from_params(None, None, limits).unwrap();
        assert_eq!((window.page(), window.size()), (1, 50));

        let window = PageWindow::from_params(Some("3"), Some("25"), limits).unwrap();
        assert_eq!(window.offset(), 50);

        let errors = PageWindow::from_params(Some("0"), Some("1001"), limits).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn wicket_is_required_and_bounded() {
        assert_eq!(Wicket::required(Some("10")).unwrap().value(), 10);
        assert!(matches!(
            Wicket::required(None),
            Err(ValidationError::Null { field: "wicket" })
        ));
        assert!(matches!(
            Wicket::required(Some("11")),
            Err(ValidationError::Integer { .. })
        ));
    }

    #[test]
    fn search_fragments_validate_characters() {
        assert_eq!(PlayerSearch::new(" O'Brien ").unwrap().as_str(), "O'Brien");
        assert!(matches!(
            PlayerSearch::new("x"),
            Err(ValidationError::Find { .. })
        ));
        assert!(PlayerSearch::new("drop table;").is_err());
        assert!(matches!(
            PlayerSearch::parse(None),
            Err(ValidationError::Null { field: "name" })
        ));

        assert_eq!(TeamSearch::new("Trinidad & Tobago").unwrap().as_str(), "Trinidad & Tobago");
        assert!(matches!(
            TeamSearch::new("a<b"),
            Err(ValidationError::SearchTeamName { .. })
        ));
    }

    #[test]
    fn year_span_parses_single_and_range() {
        assert_eq!(YearSpan::parse(None), Ok(None));
        let span = YearSpan::parse(Some("1990-2001")).unwrap().unwrap();
        assert_eq!((span.first(), span.last()), (1990, 2001));
        let span = YearSpan::parse(Some("2005")).unwrap().unwrap();
        assert_eq!((span.first(), span.last()), (2005, 2005));
        assert!(matches!(
            YearSpan::parse(Some("2001-1990")),
            Err(ValidationError::Years { .. })
        ));
    }
}
