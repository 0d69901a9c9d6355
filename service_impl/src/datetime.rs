use std::sync::Arc;

use async_trait::async_trait;
use service::{clock::ClockService, czech, datetime::DateTimeService, ServiceError};

pub struct DateTimeServiceImpl<Clock>
where
    Clock: ClockService + Sync + Send,
{
    clock_service: Arc<Clock>,
}
impl<Clock> DateTimeServiceImpl<Clock>
where
    Clock: ClockService + Sync + Send,
{
    pub fn new(clock_service: Arc<Clock>) -> Self {
        Self { clock_service }
    }
}

#[async_trait]
impl<Clock> DateTimeService for DateTimeServiceImpl<Clock>
where
    Clock: ClockService + Sync + Send,
{
    async fn current_date(&self) -> Result<Arc<str>, ServiceError> {
        let date = self.clock_service.date_now();
        Ok(Arc::from(czech::format_date(date)))
    }

    async fn current_time(&self) -> Result<Arc<str>, ServiceError> {
        let time = self.clock_service.time_now();
        Ok(Arc::from(czech::format_time(time)))
    }
}
