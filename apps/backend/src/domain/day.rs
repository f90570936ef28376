//! Cutover-anchored participation days.
//!
//! A "day" for quota purposes is a 24-hour window starting at a fixed
//! local hour rather than midnight. The anchoring rule is deliberately
//! simple: the offset is fixed (no daylight-saving adjustment), so the
//! window is always exactly 24 hours and the boundary instant is
//! unambiguous year-round.

use time::{Duration, OffsetDateTime, Time, UtcOffset};

use crate::errors::domain::DomainError;

/// The fixed local hour at which one participation day rolls into the
/// next, together with the UTC offset defining "local".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutover {
    time: Time,
    offset: UtcOffset,
}

impl Cutover {
    pub fn new(hour: u8, offset: UtcOffset) -> Result<Self, DomainError> {
        let time = Time::from_hms(hour, 0, 0)
            .map_err(|e| DomainError::validation(format!("invalid cutover hour {hour}: {e}")))?;
        Ok(Self { time, offset })
    }

    /// The current day marker: the most recent occurrence of the
    /// cutover hour at or before `now`. An instant exactly on the
    /// boundary belongs to the day it opens.
    pub fn current_day(&self, now: OffsetDateTime) -> OffsetDateTime {
        let local = now.to_offset(self.offset);
        let anchor = local.replace_time(self.time);
        if anchor <= local {
            anchor
        } else {
            anchor - Duration::days(1)
        }
    }

    /// The day marker immediately before [`Cutover::current_day`].
    pub fn previous_day(&self, now: OffsetDateTime) -> OffsetDateTime {
        self.current_day(now) - Duration::days(1)
    }
}

impl Default for Cutover {
    /// 09:00 at UTC-5.
    fn default() -> Self {
        Self {
            time: Time::from_hms(9, 0, 0).expect("09:00 is a valid time"),
            offset: UtcOffset::from_hms(-5, 0, 0).expect("-05:00 is a valid offset"),
        }
    }
}
