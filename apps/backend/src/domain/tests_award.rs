use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::award::{decide_award, AwardDecision, DailyWindow};

fn today() -> OffsetDateTime {
    datetime!(2026-08-23 09:00 -5)
}

fn window_on(day: OffsetDateTime, participation: i64, bonus: i64) -> DailyWindow {
    DailyWindow {
        day,
        participation,
        bonus,
    }
}

#[test]
fn no_entry_credits_full_amount() {
    let decision = decide_award(None, today(), 2, 3);
    assert_eq!(decision, AwardDecision::NoEntry { points: 2, bonus: 3 });
    assert_eq!(decision.credited(), 5);
}

#[test]
fn stale_window_starts_a_new_day() {
    let w = window_on(today() - Duration::days(1), 10, 4);
    let decision = decide_award(Some(&w), today(), 2, 1);
    assert_eq!(decision, AwardDecision::NewDay { points: 2, bonus: 1 });
    assert_eq!(decision.credited(), 3);
}

#[test]
fn same_day_accumulates_under_the_cap() {
    let w = window_on(today(), 3, 1);
    let decision = decide_award(Some(&w), today(), 2, 1);
    assert_eq!(
        decision,
        AwardDecision::SameDay {
            points: 2,
            bonus: 1,
            capped: None
        }
    );
}

#[test]
fn cap_clamps_points_to_the_remainder() {
    // 9 already earned, 2 requested: only 1 fits.
    let w = window_on(today(), 9, 0);
    let decision = decide_award(Some(&w), today(), 2, 0);
    match decision {
        AwardDecision::SameDay {
            points,
            bonus,
            capped: Some(note),
        } => {
            assert_eq!(points, 1);
            assert_eq!(bonus, 0);
            assert_eq!(note.requested_points, 2);
        }
        other => panic!("expected capped SameDay, got {other:?}"),
    }
}

#[test]
fn cap_scales_bonus_by_ceiling_ratio() {
    // remaining 1 of 2 requested, bonus 3: ceil(1 * 3 / 2) = 2.
    let w = window_on(today(), 9, 0);
    let decision = decide_award(Some(&w), today(), 2, 3);
    assert_eq!(decision.credited(), 1 + 2);
    match decision {
        AwardDecision::SameDay { points, bonus, .. } => {
            assert_eq!((points, bonus), (1, 2));
        }
        other => panic!("expected SameDay, got {other:?}"),
    }
}

#[test]
fn at_cap_everything_is_clamped_away() {
    let w = window_on(today(), 10, 2);
    let decision = decide_award(Some(&w), today(), 2, 4);
    assert_eq!(decision.credited(), 0);
}

#[test]
fn zero_point_request_at_cap_passes_bonus_through() {
    // A pure-bonus award does not trip the participation cap check.
    let w = window_on(today(), 10, 0);
    let decision = decide_award(Some(&w), today(), 0, 3);
    assert_eq!(
        decision,
        AwardDecision::SameDay {
            points: 0,
            bonus: 3,
            capped: None
        }
    );
}

#[test]
fn future_window_is_skewed_and_credits_nothing() {
    let w = window_on(today() + Duration::days(1), 0, 0);
    let decision = decide_award(Some(&w), today(), 2, 1);
    assert_eq!(decision, AwardDecision::Skewed);
    assert_eq!(decision.credited(), 0);
}
