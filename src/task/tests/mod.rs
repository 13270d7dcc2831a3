//! Unit tests for the task domain.

mod completion_tests;
mod recurrence_tests;

pub(crate) mod support {
    //! Shared fixtures for task domain tests.

    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
    use mockable::Clock;

    /// Clock pinned to a fixed date for deterministic tests.
    pub struct FixedClock(pub NaiveDate);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.from_utc_datetime(&self.0.and_hms_opt(12, 0, 0).expect("valid time"))
        }
    }

    /// Builds a date that is known to be valid.
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }
}
