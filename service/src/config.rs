use std::sync::Arc;

use crate::ServiceError;
use async_trait::async_trait;
use mockall::automock;

pub struct Config {
    pub timezone: Arc<str>,
    pub bind_address: Arc<str>,
    pub template_glob: Arc<str>,
}

#[automock]
#[async_trait]
pub trait ConfigService {
    async fn get_config(&self) -> Result<Config, ServiceError>;
}
