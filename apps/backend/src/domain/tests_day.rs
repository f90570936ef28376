use time::macros::datetime;

use crate::domain::day::Cutover;

fn cutover() -> Cutover {
    Cutover::default() // 09:00 at UTC-5
}

#[test]
fn before_the_cutover_hour_belongs_to_the_previous_day() {
    let now = datetime!(2026-08-23 08:59:59 -5);
    assert_eq!(cutover().current_day(now), datetime!(2026-08-22 09:00 -5));
}

#[test]
fn the_boundary_instant_opens_the_new_day() {
    let now = datetime!(2026-08-23 09:00:00 -5);
    assert_eq!(cutover().current_day(now), datetime!(2026-08-23 09:00 -5));
}

#[test]
fn after_the_cutover_hour_belongs_to_the_current_day() {
    let now = datetime!(2026-08-23 21:30 -5);
    assert_eq!(cutover().current_day(now), datetime!(2026-08-23 09:00 -5));
}

#[test]
fn utc_instants_are_normalized_to_the_local_offset() {
    // 13:00 UTC is 08:00 local (-5): still the previous window.
    let now = datetime!(2026-08-23 13:00 UTC);
    assert_eq!(cutover().current_day(now), datetime!(2026-08-22 09:00 -5));
}

#[test]
fn previous_day_is_exactly_24_hours_back() {
    let now = datetime!(2026-08-23 12:00 -5);
    assert_eq!(cutover().previous_day(now), datetime!(2026-08-22 09:00 -5));
}

#[test]
fn invalid_hour_is_rejected() {
    let offset = time::UtcOffset::UTC;
    assert!(Cutover::new(24, offset).is_err());
}
