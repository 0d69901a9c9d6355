use std::{convert::Infallible, sync::Arc};

mod datetime;
mod index;

use axum::{body::Body, response::Response, routing::get, Router};
use thiserror::Error;

/// One-shot response body over a rendered page. Always served as HTML.
pub struct HtmlString(Arc<str>, bool);
impl http_body::Body for HtmlString {
    type Data = bytes::Bytes;
    type Error = Infallible;

    fn poll_frame(
        mut self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        std::task::Poll::Ready(if self.1 {
            None
        } else {
            self.1 = true;
            Some(Ok(http_body::Frame::data(bytes::Bytes::copy_from_slice(
                self.0.as_bytes(),
            ))))
        })
    }

    fn is_end_stream(&self) -> bool {
        self.1
    }
}
impl From<Arc<str>> for HtmlString {
    fn from(page: Arc<str>) -> Self {
        HtmlString(page, false)
    }
}
impl From<HtmlString> for Response {
    fn from(page: HtmlString) -> Self {
        Response::builder()
            .status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(Body::new(page))
            .unwrap()
    }
}

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Service error")]
    ServiceError(#[from] service::ServiceError),
}

fn error_handler(result: Result<Response, RestError>) -> Response {
    match result {
        Ok(response) => response,
        Err(RestError::ServiceError(err @ service::ServiceError::TemplateNotFound(_))) => {
            Response::builder()
                .status(500)
                .body(Body::new(err.to_string()))
                .unwrap()
        }
        Err(RestError::ServiceError(err @ service::ServiceError::TemplateRender(_))) => {
            Response::builder()
                .status(500)
                .body(Body::new(err.to_string()))
                .unwrap()
        }
        Err(RestError::ServiceError(err @ service::ServiceError::UnknownTimezone(_))) => {
            Response::builder()
                .status(500)
                .body(Body::new(err.to_string()))
                .unwrap()
        }
    }
}

pub trait RestStateDef: Clone + Send + Sync + 'static {
    type DateTimeService: service::datetime::DateTimeService + Send + Sync + 'static;
    type TemplateService: service::template::TemplateService + Send + Sync + 'static;

    fn date_time_service(&self) -> Arc<Self::DateTimeService>;
    fn template_service(&self) -> Arc<Self::TemplateService>;
}

pub fn app<RestState: RestStateDef>(rest_state: RestState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/datum", get(datetime::datum::<RestState>))
        .route("/cas", get(datetime::cas::<RestState>))
        .with_state(rest_state)
}

pub async fn start_server<RestState: RestStateDef>(rest_state: RestState, bind_address: &str) {
    let app = app(rest_state);
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .expect("Could not bind server");
    tracing::info!("Listening on {}", bind_address);
    axum::serve(listener, app)
        .await
        .expect("Could not start server");
}
