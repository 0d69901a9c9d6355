use std::sync::Arc;
use thiserror::Error;

pub mod clock;
pub mod config;
pub mod czech;
pub mod datetime;
pub mod template;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No template loaded for view: {0}")]
    TemplateNotFound(Arc<str>),

    #[error("Template rendering error: {0}")]
    TemplateRender(Arc<str>),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(Arc<str>),
}
