use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use log::info;

/// The single route: `GET /` returns the pre-rendered page, everything else 404s.
pub fn router(page: Bytes) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .fallback(not_found)
        .with_state(page)
}

async fn index_handler(State(page): State<Bytes>) -> Html<Bytes> {
    Html(page)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &DashboardConfig, page: String) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(Bytes::from(page)))
        .await
        .map_err(|e| DashboardError::Server(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    const PAGE: &str = "<!DOCTYPE html><h1>Company Growth Analysis</h1>";

    #[tokio::test]
    async fn index_serves_page() {
        let response = router(Bytes::from_static(PAGE.as_bytes()))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], PAGE.as_bytes());
    }

    #[tokio::test]
    async fn repeated_requests_return_the_same_page() {
        let page = Bytes::from(PAGE.to_string());
        let app = router(page.clone());
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(body, page);
        }
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        let response = router(Bytes::from_static(PAGE.as_bytes()))
            .oneshot(Request::builder().uri("/api/data").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn only_get_is_routed() {
        let response = router(Bytes::from_static(PAGE.as_bytes()))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
