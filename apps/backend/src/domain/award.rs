//! Pure decision logic for the reputation ledger.
//!
//! The per-user branch selection is an explicit tagged variant so each
//! branch can be unit tested in isolation from storage. The service
//! layer evaluates the decision and applies it inside one transaction.

use time::OffsetDateTime;

use crate::domain::rules::DAILY_CAP;

/// The slice of a ledger entry the decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWindow {
    /// Cutover-anchored day participation was last recorded on.
    pub day: OffsetDateTime,
    /// Participation points already earned within `day`.
    pub participation: i64,
    /// Bonus points already earned within `day`.
    pub bonus: i64,
}

/// What the requested award originally asked for, kept so the
/// notification can say what the cap swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapNote {
    pub requested_points: i64,
    pub requested_bonus: i64,
}

/// Outcome of evaluating an award request against the current ledger
/// state for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardDecision {
    /// No ledger entry yet: create one crediting the full amount.
    NoEntry { points: i64, bonus: i64 },
    /// First participation of a new day: overwrite the daily window.
    NewDay { points: i64, bonus: i64 },
    /// Accumulate into today's window, clamped to the daily cap.
    SameDay {
        points: i64,
        bonus: i64,
        capped: Option<CapNote>,
    },
    /// The stored participation day is in the future. No mutation.
    Skewed,
}

impl AwardDecision {
    /// Points actually credited by this decision.
    pub fn credited(&self) -> i64 {
        match self {
            AwardDecision::NoEntry { points, bonus }
            | AwardDecision::NewDay { points, bonus }
            | AwardDecision::SameDay { points, bonus, .. } => points + bonus,
            AwardDecision::Skewed => 0,
        }
    }
}

/// Decide how a `(points, bonus)` request lands on the ledger.
///
/// `today` must be the cutover-anchored day marker for the current
/// instant; `window` is the stored daily window, if the user has one.
/// Both inputs must come from the same transaction that applies the
/// decision, otherwise two concurrent awards could both pass the cap
/// check.
pub fn decide_award(
    window: Option<&DailyWindow>,
    today: OffsetDateTime,
    points: i64,
    bonus: i64,
) -> AwardDecision {
    debug_assert!(points >= 0 && bonus >= 0);

    let Some(window) = window else {
        return AwardDecision::NoEntry { points, bonus };
    };

    if window.day < today {
        return AwardDecision::NewDay { points, bonus };
    }
    if window.day > today {
        return AwardDecision::Skewed;
    }

    if window.participation + points > DAILY_CAP {
        // participation <= cap and the sum exceeds it, so points > 0 here
        // and the ceiling division below is over non-negative operands.
        let remaining = (DAILY_CAP - window.participation).max(0);
        let scaled_bonus = (remaining * bonus + points - 1) / points;
        return AwardDecision::SameDay {
            points: remaining,
            bonus: scaled_bonus,
            capped: Some(CapNote {
                requested_points: points,
                requested_bonus: bonus,
            }),
        };
    }

    AwardDecision::SameDay {
        points,
        bonus,
        capped: None,
    }
}
