#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use chart_worker::config::ServerConfig;
use chart_worker::engine::EphemerisEngine;
use chart_worker::http::{create_router, AppState};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Router over `engine` with default configuration.
pub fn router_with(engine: Arc<dyn EphemerisEngine>) -> Router {
    create_router(AppState::new(engine), &ServerConfig::default())
}

/// The Berlin noon request body of 2000-01-01, house system omitted.
pub fn berlin_body() -> Value {
    serde_json::json!({
        "birthDate": "2000-01-01",
        "birthTime": "12:00",
        "lat": 52.52,
        "lon": 13.405,
        "tzname": "Europe/Berlin"
    })
}

/// POST a raw body to `/swe` and return status and parsed JSON.
pub async fn post_swe_raw(app: Router, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/swe")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

/// POST a JSON value to `/swe`.
pub async fn post_swe(app: Router, body: &Value) -> (StatusCode, Value) {
    post_swe_raw(app, body.to_string()).await
}

/// Send a request and parse the response body as JSON.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
