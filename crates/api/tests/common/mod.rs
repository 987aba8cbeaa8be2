#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use inventory_api::config::{LogFormat, ServerConfig};
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Call a query procedure, sending `input` as URL-encoded JSON.
pub async fn rpc_query(
    app: Router,
    procedure: &str,
    input: Option<serde_json::Value>,
) -> Response<Body> {
    let uri = match input {
        Some(input) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("input", &input.to_string())
                .finish();
            format!("/rpc/{procedure}?{query}")
        }
        None => format!("/rpc/{procedure}"),
    };
    get(app, &uri).await
}

/// Call a mutation procedure with a JSON body.
pub async fn rpc_mutation(
    app: Router,
    procedure: &str,
    input: serde_json::Value,
) -> Response<Body> {
    post_json(app, &format!("/rpc/{procedure}"), input).await
}

/// Create an item through the router and return its `data` payload.
pub async fn create_item(pool: &PgPool, name: &str, price: f64) -> serde_json::Value {
    let response = rpc_mutation(
        build_test_app(pool.clone()),
        "createItem",
        serde_json::json!({
            "name": name,
            "description": null,
            "price": price,
            "quantity": 1
        }),
    )
    .await;
    body_json(response).await["data"].clone()
}
