//! API tests
//!
//! Drive the real router end to end over an in-memory database.


use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::core::{Config, ServerState};
use crate::db::DbService;

/// Build the full application over a fresh in-memory database
pub async fn test_app() -> (Router, DbService) {
    let db = DbService::new_in_memory().await.expect("in-memory database");
    let config = Config {
        database_path: ":memory:".into(),
        http_port: 0,
        environment: "test".into(),
        log_dir: None,
    };
    let state = ServerState::with_db(config, db.clone());
    (crate::api::build_app().with_state(state), db)
}

/// Send a request and decode the JSON body (Null for empty bodies)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    request(app, "PUT", uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

/// Seed one menu item through the API, returning its id
pub async fn create_menu_item(app: &Router, name: &str, price: f64) -> i64 {
    let (status, body) = post(
        app,
        "/menu",
        json!({ "name": name, "price": price }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("menu item id")
}
