use std::{env, sync::Arc};

use async_trait::async_trait;
use service::{
    config::{Config, ConfigService},
    ServiceError,
};

pub struct ConfigServiceImpl;

#[async_trait]
impl ConfigService for ConfigServiceImpl {
    async fn get_config(&self) -> Result<Config, ServiceError> {
        let timezone = env::var("TIMEZONE").unwrap_or("Europe/Prague".to_string());
        let bind_address = env::var("BIND_ADDRESS").unwrap_or("127.0.0.1:3000".to_string());
        let template_glob = env::var("TEMPLATE_GLOB").unwrap_or("templates/*.html".to_string());

        Ok(Config {
            timezone: Arc::from(timezone),
            bind_address: Arc::from(bind_address),
            template_glob: Arc::from(template_glob),
        })
    }
}
