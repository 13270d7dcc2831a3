//! Unit tests for recurrence pattern parsing and next-date arithmetic.

use super::support::date;
use crate::task::domain::{RecurrencePattern, TaskDomainError};
use crate::calendar::DateUnit;
use rstest::rstest;

fn pattern(raw: &str) -> RecurrencePattern {
    raw.parse().expect("valid recurrence pattern")
}

#[rstest]
#[case("1d", false, 1, DateUnit::Day)]
#[case("2w", false, 2, DateUnit::Week)]
#[case("+3m", true, 3, DateUnit::Month)]
#[case("+10y", true, 10, DateUnit::Year)]
fn patterns_parse_their_three_parts(
    #[case] raw: &str,
    #[case] strict: bool,
    #[case] amount: u32,
    #[case] unit: DateUnit,
) {
    let parsed = pattern(raw);
    assert_eq!(parsed.is_strict(), strict);
    assert_eq!(parsed.amount(), amount);
    assert_eq!(parsed.unit(), unit);
    assert_eq!(parsed.to_string(), raw);
}

#[rstest]
#[case("0d")]
#[case("-1d")]
#[case("2x")]
#[case("d")]
#[case("+")]
#[case("")]
#[case("1dd")]
fn malformed_patterns_are_rejected(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<RecurrencePattern>(),
        Err(TaskDomainError::InvalidRecurrence(raw.to_owned()))
    );
}

#[rstest]
fn relative_mode_advances_from_the_completion_date() {
    let next = pattern("2d").next_date(Some(date(2014, 7, 5)), date(2000, 1, 1));
    assert_eq!(next, Some(date(2000, 1, 3)));
}

#[rstest]
fn strict_mode_advances_from_the_schedule_date() {
    let next = pattern("+2d").next_date(Some(date(2014, 7, 5)), date(2000, 1, 1));
    assert_eq!(next, Some(date(2014, 7, 7)));
}

#[rstest]
fn strict_mode_repeats_until_past_the_completion_date() {
    // Reference far in the past: one step is not enough.
    let next = pattern("+1w").next_date(Some(date(2000, 1, 1)), date(2000, 2, 1));
    assert_eq!(next, Some(date(2000, 2, 5)));
}

#[rstest]
fn strict_mode_lands_strictly_after_an_exact_boundary() {
    // Completion lands exactly on a step: the result must move past it.
    let next = pattern("+1w").next_date(Some(date(2000, 1, 1)), date(2000, 1, 8));
    assert_eq!(next, Some(date(2000, 1, 15)));
}

#[rstest]
fn strict_mode_without_a_reference_degrades_to_relative() {
    let next = pattern("+2d").next_date(None, date(2000, 1, 1));
    assert_eq!(next, Some(date(2000, 1, 3)));
}

#[rstest]
fn year_unit_advances_a_full_calendar_year() {
    let next = pattern("1y").next_date(Some(date(2014, 7, 5)), date(2000, 1, 1));
    assert_eq!(next, Some(date(2001, 1, 1)));
}

#[rstest]
fn month_unit_clamps_the_day_of_month() {
    let next = pattern("1m").next_date(None, date(2019, 1, 31));
    assert_eq!(next, Some(date(2019, 2, 28)));
}
