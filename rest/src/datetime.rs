use axum::{extract::State, response::Response};

use crate::{error_handler, HtmlString, RestStateDef};
use service::{datetime::DateTimeService, template::TemplateService};

/// GET /datum: the current date rendered through the "datum" view.
pub async fn datum<RestState: RestStateDef>(State(rest_state): State<RestState>) -> Response {
    error_handler(
        (async {
            let datum = rest_state.date_time_service().current_date().await?;
            let page = rest_state
                .template_service()
                .render_page("datum", "datum", &datum)
                .await?;
            Ok(HtmlString::from(page).into())
        })
        .await,
    )
}

/// GET /cas: the current time of day rendered through the "cas" view.
pub async fn cas<RestState: RestStateDef>(State(rest_state): State<RestState>) -> Response {
    error_handler(
        (async {
            let cas = rest_state.date_time_service().current_time().await?;
            let page = rest_state
                .template_service()
                .render_page("cas", "cas", &cas)
                .await?;
            Ok(HtmlString::from(page).into())
        })
        .await,
    )
}
