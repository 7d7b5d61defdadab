//! Same-origin pass-through proxy for the items API
//!
//! Browsers can't call the upstream API directly because it sends no CORS
//! headers. The proxy forwards `GET /api/items` unmodified and adds permissive
//! CORS headers on the way back.

use crate::config::CatalogConfig;
use crate::prelude::{eprintln, *};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ProxyOptions {
    /// Port to listen on
    #[arg(short, long, env = "CATALOG_PROXY_PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "CATALOG_PROXY_HOST", default_value = "127.0.0.1")]
    host: String,
}

#[derive(Debug, Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    items_url: String,
}

impl ProxyState {
    pub fn new(client: reqwest::Client, items_url: impl Into<String>) -> Self {
        Self {
            client,
            items_url: items_url.into(),
        }
    }
}

/// Build the proxy router
pub fn router(state: ProxyState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/items", get(items_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn run(options: ProxyOptions, global: crate::Global) -> Result<()> {
    let config = CatalogConfig::from_global(&global);
    let state = ProxyState::new(config.build_client()?, config.items_url());
    let addr = format!("{}:{}", options.host, options.port);

    if config.verbose {
        eprintln!("Forwarding http://{}/api/items to {}", addr, config.items_url());
    }
    info!("Proxy listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn bad_gateway(message: String) -> Response {
    warn!("Upstream request failed: {}", message);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

async fn items_handler(State(state): State<Arc<ProxyState>>) -> Response {
    debug!("Proxying GET {}", state.items_url);

    let upstream = match state.client.get(&state.items_url).send().await {
        Ok(response) => response,
        Err(e) => return bad_gateway(format!("Failed to reach upstream: {e}")),
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    match upstream.bytes().await {
        Ok(body) => {
            (status, [(header::CONTENT_TYPE, content_type)], Body::from(body)).into_response()
        }
        Err(e) => bad_gateway(format!("Failed to read upstream response: {e}")),
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn items_request() -> Request<Body> {
        Request::builder()
            .uri("/api/items")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_proxy_forwards_body_with_cors() {
        let upstream_body = r#"{"data":[{"id":"1","name":"Shovel"}],"version":"7"}"#;
        let upstream = Router::new().route(
            "/items",
            get(move || async move {
                ([(header::CONTENT_TYPE, "application/json")], upstream_body)
            }),
        );
        let base = serve(upstream).await;
        let app = router(ProxyState::new(reqwest::Client::new(), format!("{base}/items")));

        let response = app.oneshot(items_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, upstream_body);
    }

    #[tokio::test]
    async fn test_proxy_forwards_upstream_error_status() {
        let upstream = Router::new().route(
            "/items",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base = serve(upstream).await;
        let app = router(ProxyState::new(reqwest::Client::new(), format!("{base}/items")));

        let response = app.oneshot(items_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_string(response).await, "slow down");
    }

    #[tokio::test]
    async fn test_proxy_unreachable_upstream_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let app = router(ProxyState::new(
            reqwest::Client::new(),
            format!("http://{addr}/items"),
        ));

        let response = app.oneshot(items_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Failed to reach upstream"));
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let app = router(ProxyState::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9/items",
        ));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/items")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(ProxyState::new(reqwest::Client::new(), "http://unused/items"));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }
}
