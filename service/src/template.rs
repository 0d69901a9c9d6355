use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::ServiceError;

/// View rendering: a view name is resolved to a template and rendered
/// with a single key/value binding.
#[automock]
#[async_trait]
pub trait TemplateService {
    async fn render_page(
        &self,
        view: &str,
        key: &str,
        value: &str,
    ) -> Result<Arc<str>, ServiceError>;
}
