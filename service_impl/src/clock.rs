use service::clock::ClockService;
use time::OffsetDateTime;
use time_tz::{OffsetDateTimeExt, Tz};

/// Wall clock projected into a fixed IANA timezone. The date and time
/// shown to the user follow the configured zone, not UTC.
pub struct ClockServiceImpl {
    timezone: &'static Tz,
}

impl ClockServiceImpl {
    pub fn new(timezone: &'static Tz) -> Self {
        Self { timezone }
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_timezone(self.timezone)
    }
}

impl ClockService for ClockServiceImpl {
    fn time_now(&self) -> time::Time {
        self.now().time()
    }
    fn date_now(&self) -> time::Date {
        self.now().date()
    }
}
