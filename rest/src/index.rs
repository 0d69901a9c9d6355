use std::sync::Arc;

use axum::response::Response;

use crate::HtmlString;

static INDEX_HTML: &str = include_str!("../static/index.html");

/// GET /: static landing page linking to the date and time views.
pub async fn index() -> Response {
    HtmlString::from(Arc::from(INDEX_HTML)).into()
}
