use billtrack::{Clock, Config};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Clock pinned to noon UTC on a fixed date.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn on(y: i32, m: u32, d: u32) -> Box<dyn Clock> {
        Box::new(FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn config_without_reminders() -> Config {
    Config {
        default_reminder_days: None,
        ..Config::default()
    }
}
