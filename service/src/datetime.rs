use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::ServiceError;

/// Produces the Czech-formatted current date and time strings that the
/// web layer binds into its views.
#[automock]
#[async_trait]
pub trait DateTimeService {
    /// Current calendar date, e.g. "5. březen 2024".
    async fn current_date(&self) -> Result<Arc<str>, ServiceError>;

    /// Current time of day, e.g. "23:07" or "1:00".
    async fn current_time(&self) -> Result<Arc<str>, ServiceError>;
}
