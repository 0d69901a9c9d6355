use std::sync::Arc;

use async_trait::async_trait;
use service::{template::TemplateService, ServiceError};
use tera::{Context, Tera};

/// View renderer on top of tera. Templates are loaded once at startup
/// from a file glob; a view name "datum" resolves to "datum.html".
pub struct TemplateServiceImpl {
    pub tera: Tera,
}

impl TemplateServiceImpl {
    pub fn from_glob(glob: &str) -> Result<Self, ServiceError> {
        let tera =
            Tera::new(glob).map_err(|e| ServiceError::TemplateRender(Arc::from(e.to_string())))?;
        tracing::debug!(
            "Loaded templates: {}",
            tera.get_template_names().collect::<Vec<_>>().join(", ")
        );
        Ok(Self { tera })
    }
}

#[async_trait]
impl TemplateService for TemplateServiceImpl {
    async fn render_page(
        &self,
        view: &str,
        key: &str,
        value: &str,
    ) -> Result<Arc<str>, ServiceError> {
        let mut context = Context::new();
        context.insert(key, value);

        let template_name = format!("{view}.html");
        let rendered = self
            .tera
            .render(&template_name, &context)
            .map_err(|e| match &e.kind {
                tera::ErrorKind::TemplateNotFound(name) => {
                    ServiceError::TemplateNotFound(Arc::from(name.as_str()))
                }
                _ => ServiceError::TemplateRender(Arc::from(e.to_string())),
            })?;
        Ok(Arc::from(rendered))
    }
}
