//! Shared clock and date helpers for integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock whose current instant is set by the test.
///
/// The instant sits at midday UTC so the local and UTC calendar dates agree
/// in most time zones.
#[derive(Debug)]
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    /// Creates a clock reading midday UTC on `today`.
    #[must_use]
    pub fn on(today: NaiveDate) -> Self {
        Self {
            now: Mutex::new(midday(today)),
        }
    }

    /// Moves the clock to midday UTC on `today`.
    pub fn set_today(&self, today: NaiveDate) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = midday(today);
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn midday(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap_or_default())
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics when the components do not name a real date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
