//! Wire-stable sort codes.
//!
//! Codes end up in bookmarked URLs, so an entry's code never changes once assigned. Lookup is
//! total: an unassigned code resolves to [`SortKey::Unknown`], which dispatch replaces with the
//! record category's default ordering.

/// Attribute a record page is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SortKey {
    Unknown,
    Name,
    Team,
    Opponents,
    Runs,
    Matches,
    Innings,
    NotOuts,
    HighestScore,
    Average,
    Hundreds,
    Fifties,
    Ducks,
    Fours,
    Sixes,
    Balls,
    StrikeRate,
    Year,
    Season,
    Ground,
    HostCountry,
    Series,
    MatchStartDateAsOffset,
    Minutes,
    Overs,
    Maidens,
    RunsConceded,
    Wickets,
    BowlingAverage,
    EconomyRate,
    BowlingStrikeRate,
    FiveWicketInnings,
    TenWicketMatches,
    BestBowlingInnings,
    BestBowlingMatch,
    FourWicketInnings,
    Dismissals,
    Catches,
    Stumpings,
    WicketKeeperCatches,
    FielderCatches,
    BestDismissals,
    BestCatches,
    BestStumpings,
    Won,
    Lost,
    Drawn,
    Tied,
    NoResult,
    WinLossRatio,
    Score,
    WicketsLost,
    RunRate,
    Byes,
    LegByes,
    Wides,
    NoBalls,
    Penalties,
    TotalExtras,
    ExtrasPercentage,
    Target,
    Margin,
    Partnership,
    Wicket,
    Unbroken,
    Players,
    FiftyPartnerships,
    HundredPartnerships,
}

const SORT_TABLE: [(u32, SortKey, &str); 67] = [
    (1, SortKey::Name, "Name"),
    (2, SortKey::Team, "Team"),
    (3, SortKey::Opponents, "Opponents"),
    (4, SortKey::Runs, "Runs"),
    (5, SortKey::Matches, "Matches"),
    (6, SortKey::Innings, "Innings"),
    (7, SortKey::NotOuts, "NotOuts"),
    (8, SortKey::HighestScore, "HighestScore"),
    (9, SortKey::Average, "Average"),
    (10, SortKey::Hundreds, "Hundreds"),
    (11, SortKey::Fifties, "Fifties"),
    (12, SortKey::Ducks, "Ducks"),
    (13, SortKey::Fours, "Fours"),
    (14, SortKey::Sixes, "Sixes"),
    (15, SortKey::Balls, "Balls"),
    (16, SortKey::StrikeRate, "StrikeRate"),
    (17, SortKey::Year, "Year"),
    (18, SortKey::Season, "Season"),
    (19, SortKey::Ground, "Ground"),
    (20, SortKey::HostCountry, "HostCountry"),
    (21, SortKey::Series, "Series"),
    (22, SortKey::MatchStartDateAsOffset, "MatchStartDateAsOffset"),
    (23, SortKey::Minutes, "Minutes"),
    (24, SortKey::Overs, "Overs"),
    (25, SortKey::Maidens, "Maidens"),
    (26, SortKey::RunsConceded, "RunsConceded"),
    (27, SortKey::Wickets, "Wickets"),
    (28, SortKey::BowlingAverage, "BowlingAverage"),
    (29, SortKey::EconomyRate, "EconomyRate"),
    (30, SortKey::BowlingStrikeRate, "BowlingStrikeRate"),
    (31, SortKey::FiveWicketInnings, "FiveWicketInnings"),
    (32, SortKey::TenWicketMatches, "TenWicketMatches"),
    (33, SortKey::BestBowlingInnings, "BestBowlingInnings"),
    (34, SortKey::BestBowlingMatch, "BestBowlingMatch"),
    (35, SortKey::FourWicketInnings, "FourWicketInnings"),
    (36, SortKey::Dismissals, "Dismissals"),
    (37, SortKey::Catches, "Catches"),
    (38, SortKey::Stumpings, "Stumpings"),
    (39, SortKey::WicketKeeperCatches, "WicketKeeperCatches"),
    (40, SortKey::FielderCatches, "FielderCatches"),
    (41, SortKey::BestDismissals, "BestDismissals"),
    (42, SortKey::BestCatches, "BestCatches"),
    (43, SortKey::BestStumpings, "BestStumpings"),
    (44, SortKey::Won, "Won"),
    (45, SortKey::Lost, "Lost"),
    (46, SortKey::Drawn, "Drawn"),
    (47, SortKey::Tied, "Tied"),
    (48, SortKey::NoResult, "NoResult"),
    (49, SortKey::WinLossRatio, "WinLossRatio"),
    (50, SortKey::Score, "Score"),
    (51, SortKey::WicketsLost, "WicketsLost"),
    (52, SortKey::RunRate, "RunRate"),
    (53, SortKey::Byes, "Byes"),
    (54, SortKey::LegByes, "LegByes"),
    (55, SortKey::Wides, "Wides"),
    (56, SortKey::NoBalls, "NoBalls"),
    (57, SortKey::Penalties, "Penalties"),
    (58, SortKey::TotalExtras, "TotalExtras"),
    (59, SortKey::ExtrasPercentage, "ExtrasPercentage"),
    (60, SortKey::Target, "Target"),
    (61, SortKey::Margin, "Margin"),
    (62, SortKey::Partnership, "Partnership"),
    (63, SortKey::Wicket, "Wicket"),
    (64, SortKey::Unbroken, "Unbroken"),
    (65, SortKey::Players, "Players"),
    (66, SortKey::FiftyPartnerships, "FiftyPartnerships"),
    (67, SortKey::HundredPartnerships, "HundredPartnerships"),
];

impl SortKey {
    /// Query parameter name (`sortOrder`).
    pub const FIELD: &'static str = "sortOrder";

    /// Resolve a wire code. Never fails; unassigned codes give [`SortKey::Unknown`].
    pub fn resolve(code: i64) -> Self {
        SORT_TABLE
            .iter()
            .find(|(entry, _, _)| i64::from(*entry) == code)
            .map_or(Self::Unknown, |(_, key, _)| *key)
    }

    /// Wire code, or `None` for [`SortKey::Unknown`].
    pub fn code(self) -> Option<u32> {
        SORT_TABLE
            .iter()
            .find(|(_, key, _)| *key == self)
            .map(|(code, _, _)| *code)
    }

    /// Attribute name handed to the data-access layer.
    pub fn name(self) -> &'static str {
        SORT_TABLE
            .iter()
            .find(|(_, key, _)| *key == self)
            .map_or("Unknown", |(_, _, name)| *name)
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn code_four_is_runs() {
        assert_eq!(SortKey::resolve(4), SortKey::Runs);
        assert_eq!(SortKey::Runs.code(), Some(4));
        assert_eq!(SortKey::Runs.name(), "Runs");
    }

    #[test]
    fn unassigned_codes_resolve_to_unknown() {
        assert_eq!(SortKey::resolve(999_999), SortKey::Unknown);
        assert_eq!(SortKey::resolve(0), SortKey::Unknown);
        assert_eq!(SortKey::resolve(-4), SortKey::Unknown);
        assert_eq!(SortKey::Unknown.code(), None);
        assert_eq!(SortKey::Unknown.name(), "Unknown");
    }

    #[test]
    fn table_is_a_bijection() {
        let codes = SORT_TABLE.iter().map(|(code, _, _)| *code).collect::<HashSet<_>>();
        let keys = SORT_TABLE.iter().map(|(_, key, _)| *key).collect::<HashSet<_>>();
        assert_eq!(codes.len(), SORT_TABLE.len());
        assert_eq!(keys.len(), SORT_TABLE.len());
        for (code, key, name) in SORT_TABLE {
            assert_eq!(SortKey::resolve(i64::from(code)), key);
            assert_eq!(key.code(), Some(code));
            assert_eq!(key.name(), name);
        }
    }

    #[test]
    fn named_attributes_keep_their_codes() {
        assert_eq!(SortKey::resolve(22), SortKey::MatchStartDateAsOffset);
        assert_eq!(SortKey::resolve(41), SortKey::BestDismissals);
    }
}
