use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration_test::test_state;

async fn get(path: &str) -> (StatusCode, Option<String>, String) {
    let app = rest::app(test_state());
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|value| value.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_datum_page_shows_the_czech_date() {
    let (status, content_type, body) = get("/datum").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(body.contains("Dnes je 5. březen 2024."));
}

#[tokio::test]
async fn test_cas_page_shows_the_time_without_leading_zero() {
    let (status, content_type, body) = get("/cas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(body.contains("Právě je 1:00."));
}

#[tokio::test]
async fn test_index_links_to_both_pages() {
    let (status, _, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/datum\""));
    assert!(body.contains("href=\"/cas\""));
}

#[tokio::test]
async fn test_unrelated_path_is_not_handled() {
    let (status, _, _) = get("/rozvrh").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
