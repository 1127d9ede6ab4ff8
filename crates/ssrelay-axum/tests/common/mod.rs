//! Shared helpers for the ssrelay-axum integration suites.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use tower::ServiceExt;

use ssrelay_axum::{AxumContext, CorsConfig, create_router};
use ssrelay_core::testing::{RecordingForwarder, StaticSearch};
use ssrelay_core::{
    Command, CommandForwarder, RelayService, ServiceCredential, UnconfiguredSearch,
    VideoSearchPort,
};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_DISPLAY: &str = "lobby";

/// Router wired to recording doubles.
pub struct TestApp {
    pub router: Router,
    pub forwarder: Arc<RecordingForwarder>,
    pub search: Arc<StaticSearch>,
}

pub fn app_with(forwarder: RecordingForwarder, search: StaticSearch) -> TestApp {
    let forwarder = Arc::new(forwarder);
    let search = Arc::new(search);
    let router = router_from(forwarder.clone(), search.clone());
    TestApp {
        router,
        forwarder,
        search,
    }
}

pub fn app() -> TestApp {
    app_with(RecordingForwarder::accepting(), StaticSearch::returning("vid123"))
}

/// Router whose search port has no API key behind it.
pub fn app_without_search_key() -> (Router, Arc<RecordingForwarder>) {
    let forwarder = Arc::new(RecordingForwarder::accepting());
    let router = router_from(forwarder.clone(), Arc::new(UnconfiguredSearch));
    (router, forwarder)
}

fn router_from(
    forwarder: Arc<dyn CommandForwarder>,
    search: Arc<dyn VideoSearchPort>,
) -> Router {
    let relay = RelayService::new(
        ServiceCredential::new(TEST_TOKEN).unwrap(),
        forwarder,
        search,
    );
    create_router(AxumContext::from_relay(Arc::new(relay)), &CorsConfig::AllowAll)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and decode the body as JSON (`Null` when empty).
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// A body that satisfies every parameter of `command`, optional ones included.
pub fn full_body(command: Command) -> Value {
    match command {
        Command::Drop => json!({
            "display": TEST_DISPLAY, "item": "https://cdn.test/cat.mp4", "x": 10, "y": 20
        }),
        Command::Notify => json!({
            "display": TEST_DISPLAY, "message": "Doors open", "priority": "high"
        }),
        Command::Toast => json!({
            "display": TEST_DISPLAY, "message": "Saved", "heading": "Info",
            "icon": "success", "transition": "fade", "duration": "8"
        }),
        Command::Marquee => json!({
            "display": TEST_DISPLAY, "message": "Breaking news", "duration": "60",
            "color": "red", "size": "4", "bgcolor": "black"
        }),
        Command::Text => json!({
            "display": TEST_DISPLAY, "message": "Welcome", "duration": "15",
            "color": "white", "size": "5", "bgcolor": "navy", "align": "center",
            "frame": "main", "animate": "slide", "aniduration": "1"
        }),
        Command::App => json!({
            "display": TEST_DISPLAY, "url": "https://example.test", "duration": "120",
            "frame": "main"
        }),
        Command::Touch => json!({ "display": TEST_DISPLAY, "option": "mute", "value": "" }),
        Command::Status => json!({ "display": TEST_DISPLAY, "option": "frame", "value": "main" }),
        Command::Dj => json!({ "display": TEST_DISPLAY, "option": "kiosk", "value": "on" }),
    }
}

/// `full_body` with `name` removed.
pub fn without(command: Command, name: &str) -> Value {
    let mut body: Map<String, Value> = match full_body(command) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };
    body.remove(name);
    Value::Object(body)
}
