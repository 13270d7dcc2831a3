//! Unit tests for the completion workflow, including recurrence hand-off.

use super::support::date;
use crate::task::domain::{Priority, Task};
use rstest::rstest;

#[rstest]
fn completing_and_reopening_restores_the_original_line() {
    let mut task = Task::new("Test");
    task.mark_complete(date(2014, 7, 5));
    assert!(task.is_completed());
    assert_eq!(task.to_line(), "x 2014-07-05 Test");
    task.mark_incomplete();
    assert!(!task.is_completed());
    assert_eq!(task.to_line(), "Test");
}

#[rstest]
fn completion_round_trip_survives_a_prepended_creation_date() {
    let mut task = Task::with_creation_date("Test", date(2014, 7, 5));
    let before = task.to_line();
    task.mark_complete(date(2014, 7, 6));
    assert!(task.is_completed());
    task.mark_incomplete();
    assert_eq!(task.to_line(), before);
}

#[rstest]
fn priority_changed_while_completed_survives_reopening() {
    let mut task = Task::new("(A) Test");
    task.mark_complete(date(2014, 7, 5));
    assert!(task.is_completed());
    task.set_priority(Some(Priority::new('B').expect("valid priority")));
    task.mark_incomplete();
    assert!(!task.is_completed());
    assert_eq!(task.priority().map(Priority::letter), Some('B'));
    assert_eq!(task.to_line(), "(B) Test");
}

#[rstest]
fn mark_complete_is_idempotent_on_a_completed_record() {
    let mut task = Task::new("x 2000-01-01 Test");
    task.mark_complete(date(2014, 7, 5));
    assert_eq!(task.to_line(), "x 2000-01-01 Test");
}

#[rstest]
fn mark_incomplete_on_an_incomplete_record_is_a_no_op() {
    let mut task = Task::new("Test abcd ");
    task.mark_incomplete();
    assert_eq!(task.to_line(), "Test abcd ");
}

#[rstest]
#[case(
    "(B) 2014-07-05 Test t:2014-07-05 rec:2d",
    "(B) 2000-01-01 Test t:2000-01-03 rec:2d"
)]
#[case(
    "(B) 2014-07-05 Test t:2014-07-05 rec:+2d",
    "(B) 2000-01-01 Test t:2014-07-07 rec:+2d"
)]
#[case(
    "(B) 2014-07-05 Test due:2014-07-05 rec:2d",
    "(B) 2000-01-01 Test due:2000-01-03 rec:2d"
)]
#[case(
    "(B) 2014-07-05 Test due:2014-07-05 rec:+2d",
    "(B) 2000-01-01 Test due:2014-07-07 rec:+2d"
)]
#[case("Test due:2014-07-05 rec:1y", "2000-01-01 Test due:2001-01-01 rec:1y")]
fn completing_a_recurring_record_advances_it_in_place(
    #[case] line: &str,
    #[case] expected: &str,
) {
    let mut task = Task::new(line);
    task.mark_complete(date(2000, 1, 1));
    assert!(!task.is_completed(), "recurring records are never archived");
    assert_eq!(task.to_line(), expected);
}

#[rstest]
fn recurring_record_with_both_dates_advances_only_the_due_date() {
    let mut task = Task::new("Test t:2014-07-01 due:2014-07-05 rec:2d");
    task.mark_complete(date(2000, 1, 1));
    assert_eq!(
        task.to_line(),
        "2000-01-01 Test t:2014-07-01 due:2000-01-03 rec:2d"
    );
}

#[rstest]
fn recurring_record_without_a_schedule_date_gains_a_due_date() {
    let mut task = Task::new("Test rec:2d");
    task.mark_complete(date(2000, 1, 1));
    assert!(!task.is_completed());
    assert_eq!(task.to_line(), "2000-01-01 Test rec:2d due:2000-01-03");
    assert_eq!(task.due_date(), Some(date(2000, 1, 3)));
}

#[rstest]
fn recurring_completion_replaces_the_creation_date() {
    let mut task = Task::new("2014-07-05 Test due:2014-07-06 rec:1d");
    task.mark_complete(date(2000, 1, 1));
    assert_eq!(task.creation_date(), Some(date(2000, 1, 1)));
    assert_eq!(task.to_line(), "2000-01-01 Test due:2000-01-02 rec:1d");
}
