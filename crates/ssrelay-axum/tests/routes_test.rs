//! Route-level tests against recording test doubles.
//!
//! Every request goes through the full router (fallbacks, layers and
//! extractors included) via `tower::ServiceExt::oneshot`.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use ssrelay_core::testing::{RecordingForwarder, StaticSearch};
use ssrelay_core::{Command, RelayError};

use common::{
    TEST_DISPLAY, TEST_TOKEN, app, app_with, app_without_search_key, full_body, post_json,
    request, send, without,
};

#[tokio::test]
async fn test_every_command_relays_once_with_credential() {
    for command in Command::ALL {
        let app = app();
        let body = full_body(command);

        let (status, response) = send(&app.router, post_json(command.path(), &body)).await;
        assert_eq!(status, StatusCode::OK, "{command}: {response}");
        assert_eq!(response["message"], command.success_message());
        assert_eq!(response["upstream"]["ErrCode"], 0);

        let calls = app.forwarder.calls();
        assert_eq!(calls.len(), 1, "{command} should make exactly one call");
        assert_eq!(calls[0].authorization, format!("Bearer {TEST_TOKEN}"));
        assert_eq!(calls[0].envelope["to"]["name"], TEST_DISPLAY);
        assert_eq!(calls[0].envelope["data"]["cmd"], command.name());
    }
}

#[tokio::test]
async fn test_caller_parameters_forwarded_unchanged() {
    for command in Command::ALL {
        let app = app();
        let body = full_body(command);
        send(&app.router, post_json(command.path(), &body)).await;

        let data = app.forwarder.calls()[0].envelope["data"].clone();
        match command {
            Command::Drop => assert_eq!(data["src"], json!([body["item"]])),
            Command::Notify => assert_eq!(data["msg"], body["message"]),
            _ => {
                for (key, value) in body.as_object().unwrap() {
                    if key == "display" {
                        continue;
                    }
                    let outbound = if key == "message" { "msg" } else { key.as_str() };
                    assert_eq!(&data[outbound], value, "{command}.{key}");
                }
            }
        }
    }
}

#[tokio::test]
async fn test_success_body_echoes_fields() {
    let app = app();
    let (_, response) = send(&app.router, post_json("/drop", &full_body(Command::Drop))).await;
    assert_eq!(response["message"], "Item dropped successfully");
    assert_eq!(response["item"], "https://cdn.test/cat.mp4");
    assert_eq!(response["x"], 10);
    assert_eq!(response["y"], 20);

    let (_, response) = send(&app.router, post_json("/dj", &full_body(Command::Dj))).await;
    assert_eq!(response["option"], "kiosk");
    assert_eq!(response["value"], "on");
}

#[tokio::test]
async fn test_defaults_applied_when_omitted() {
    let app = app();
    let body = without(Command::Toast, "duration");
    let (status, _) = send(&app.router, post_json("/toast", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.forwarder.calls()[0].envelope["data"]["duration"], "5");
}

#[tokio::test]
async fn test_missing_required_parameter_is_rejected_without_outbound_call() {
    for command in Command::ALL {
        for param in command.params().iter().filter(|p| p.required) {
            let app = app();
            let body = without(command, param.name);

            let (status, response) = send(&app.router, post_json(command.path(), &body)).await;
            assert_eq!(
                status,
                StatusCode::UNPROCESSABLE_ENTITY,
                "{command} without {}",
                param.name
            );
            assert_eq!(response["type"], "validation");
            assert_eq!(response["status"], 422);
            assert_eq!(app.forwarder.call_count(), 0);
        }
    }
}

#[tokio::test]
async fn test_wrong_type_and_bad_json_are_validation_errors() {
    let app = app();

    let mut body = full_body(Command::Drop);
    body["x"] = json!("left");
    let (status, _) = send(&app.router, post_json("/drop", &body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut bad = post_json("/notify", &Value::Null);
    *bad.body_mut() = "{not json".into();
    let (status, response) = send(&app.router, bad).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["type"], "validation");

    let (status, _) = send(&app.router, request(Method::POST, "/status")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(app.forwarder.call_count(), 0);
}

#[tokio::test]
async fn test_relay_failures_map_to_gateway_statuses() {
    let app = app_with(
        RecordingForwarder::failing(|| RelayError::Rejected {
            code: 3,
            message: "display not found".into(),
        }),
        StaticSearch::empty(),
    );
    let (status, response) = send(&app.router, post_json("/touch", &full_body(Command::Touch))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(response["type"], "relay");
    assert!(response["error"].as_str().unwrap().contains("display not found"));

    let app = app_with(
        RecordingForwarder::failing(|| RelayError::Timeout("deadline elapsed".into())),
        StaticSearch::empty(),
    );
    let (status, _) = send(&app.router, post_json("/status", &full_body(Command::Status))).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_search_makes_one_call_and_returns_one_url() {
    let app = app();
    let (status, response) = send(
        &app.router,
        request(Method::GET, "/search-youtube?query=test"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        json!({ "video_url": "https://www.youtube.com/watch?v=vid123" })
    );
    assert_eq!(app.search.call_count(), 1);
    assert_eq!(app.forwarder.call_count(), 0);
}

#[tokio::test]
async fn test_search_without_result_is_not_found() {
    let app = app_with(RecordingForwarder::accepting(), StaticSearch::empty());
    let (status, response) = send(
        &app.router,
        request(Method::GET, "/search-youtube?query=test"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        response["error"],
        "No relevant YouTube video found for query: 'test'"
    );
    assert_eq!(response["type"], "relay");
}

#[tokio::test]
async fn test_search_without_query_is_validation_error() {
    let app = app();
    for uri in ["/search-youtube", "/search-youtube?query=", "/search-youtube?query=%20"] {
        let (status, _) = send(&app.router, request(Method::GET, uri)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
    assert_eq!(app.search.call_count(), 0);
}

#[tokio::test]
async fn test_search_without_api_key_is_configuration_error() {
    let (router, _) = app_without_search_key();
    let (status, response) =
        send(&router, request(Method::GET, "/search-youtube?query=test")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["type"], "configuration");
}

#[tokio::test]
async fn test_head_mcp_is_ok_without_outbound_call() {
    let app = app();
    let (status, body) = send(&app.router, request(Method::HEAD, "/mcp")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
    assert_eq!(app.forwarder.call_count(), 0);
    assert_eq!(app.search.call_count(), 0);
}

#[tokio::test]
async fn test_banner() {
    let app = app();
    let (status, body) = send(&app.router, request(Method::GET, "/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().ends_with("is running"));
}

#[tokio::test]
async fn test_unknown_route_is_routing_error() {
    let app = app();

    let (status, body) = send(&app.router, post_json("/explode", &json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "routing");
    assert_eq!(body["error"], "No route for POST /explode");

    let (status, body) = send(&app.router, request(Method::GET, "/drop")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "routing");

    assert_eq!(app.forwarder.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_simultaneous_commands_complete_independently() {
    let latency = Duration::from_millis(500);
    let app = app_with(
        RecordingForwarder::accepting().with_latency(latency),
        StaticSearch::empty(),
    );

    let start = tokio::time::Instant::now();
    let (dropped, notified) = tokio::join!(
        send(&app.router, post_json("/drop", &full_body(Command::Drop))),
        send(&app.router, post_json("/notify", &full_body(Command::Notify))),
    );

    assert_eq!(dropped.0, StatusCode::OK);
    assert_eq!(notified.0, StatusCode::OK);
    assert_eq!(dropped.1["message"], "Item dropped successfully");
    assert_eq!(notified.1["message"], "Notification sent successfully");
    assert_eq!(app.forwarder.call_count(), 2);
    assert!(start.elapsed() < latency * 2, "commands were serialized");
}
