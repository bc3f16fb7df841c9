//! Record rows returned by the data-access layer, one module per category.

mod batting;
mod bowling;
mod fielding;
mod partnership;
mod team;

pub use batting::{BattingInnings, BattingSummary};
pub use bowling::{BowlingInnings, BowlingSummary};
pub use fielding::{FieldingInnings, FieldingSummary};
pub use partnership::{PartnershipInnings, PartnershipSummary};
pub use team::{TeamExtras, TeamInnings, TeamMatchResult, TeamSummary, TeamTarget};

/// Divide, returning `None` when the divisor is zero.
pub(crate) fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    (denominator != 0).then(|| f64::from(numerator) / f64::from(denominator))
}
