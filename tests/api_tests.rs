//! HTTP surface tests: the router driven with `oneshot`, upstream faked on a local port.

mod common;

use axum::{
    body::Body,
    extract::RawQuery,
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use common::{sample_report, spawn_upstream, test_state};
use serde_json::{json, Value};
use speedlens::build_router;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    };
    (status, body)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Upstream that answers with `sample_report(0.9)` and records the last query string.
async fn report_app(api_key: Option<&str>) -> (Router, Arc<Mutex<Option<String>>>) {
    let seen = Arc::new(Mutex::new(None));
    let recorder = Arc::clone(&seen);
    let api_url = spawn_upstream(Router::new().route(
        "/runPagespeed",
        get(move |RawQuery(query): RawQuery| {
            let recorder = Arc::clone(&recorder);
            async move {
                *recorder.lock().unwrap() = query;
                Json(sample_report(0.9))
            }
        }),
    ))
    .await;
    (build_router(test_state(&api_url, api_key)), seen)
}

#[tokio::test]
async fn home_and_health() {
    let app = build_router(test_state("http://127.0.0.1:9/runPagespeed", None));

    let (status, body) = send(&app, get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to speedlens");

    let (status, body) = send(&app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn pagespeed_requires_url() {
    let app = build_router(test_state("http://127.0.0.1:9/runPagespeed", Some("k")));

    for uri in ["/pagespeed", "/pagespeed?url=", "/pagespeed?url=%20%20"] {
        let (status, body) = send(&app, get_request(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({"error": "Missing URL parameter"}));
    }
}

#[tokio::test]
async fn pagespeed_normalizes_host_and_passes_body_through() {
    let (app, seen) = report_app(Some("server-key")).await;

    let (status, body) = send(&app, get_request("/pagespeed?url=example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, sample_report(0.9));

    let query = seen.lock().unwrap().clone().unwrap();
    assert!(query.starts_with("url=https%3A%2F%2Fexample.com"), "{}", query);
    assert!(query.contains("key=server-key"));
}

#[tokio::test]
async fn pagespeed_proxy_keeps_upstream_key_order() {
    const BODY: &str = r#"{"zeta":1,"lighthouseResult":{"requestedUrl":"https://example.com/"},"alpha":true}"#;
    let api_url = spawn_upstream(Router::new().route(
        "/runPagespeed",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], BODY) }),
    ))
    .await;
    let app = build_router(test_state(&api_url, Some("k")));

    let response = app
        .oneshot(get_request("/pagespeed?url=example.com"))
        .await
        .expect("Router should respond");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    assert_eq!(&bytes[..], BODY.as_bytes());
}

#[tokio::test]
async fn summary_survives_mistyped_report_fields() {
    let api_url = spawn_upstream(Router::new().route(
        "/runPagespeed",
        get(|| async {
            Json(json!({
                "lighthouseResult": {
                    "categories": {"seo": {"title": null, "score": 0.5}},
                    "audits": {}
                }
            }))
        }),
    ))
    .await;
    let app = build_router(test_state(&api_url, Some("k")));

    let (status, body) = send(&app, get_request("/pagespeed/summary?url=example.com&tab=seo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"][0]["title"], "SEO");
    assert_eq!(body["categories"][0]["score"], 50);
    // (0 + 0 + 0 + 0.5) / 4
    assert_eq!(body["overall"]["score"], 13);
}

#[tokio::test]
async fn api_prefixed_route_is_an_alias() {
    let (app, _) = report_app(Some("k")).await;

    let (status, body) = send(&app, get_request("/api/pagespeed?url=https://example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lighthouseResult"]["requestedUrl"], "https://example.com/");
}

#[tokio::test]
async fn pagespeed_without_key_is_config_error() {
    let (app, seen) = report_app(None).await;

    let (status, body) = send(&app, get_request("/pagespeed?url=example.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Configuration error: missing API key"}));
    assert!(seen.lock().unwrap().is_none(), "no upstream call without a key");
}

#[tokio::test]
async fn upstream_error_status_and_message_pass_through() {
    let api_url = spawn_upstream(Router::new().route(
        "/runPagespeed",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": 400, "message": "Invalid URL"}})),
            )
        }),
    ))
    .await;
    let app = build_router(test_state(&api_url, Some("k")));

    let (status, body) = send(&app, get_request("/pagespeed?url=example.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid URL"}));
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let api_url = common::closed_port_url().await;
    let app = build_router(test_state(&api_url, Some("k")));

    let (status, body) = send(&app, get_request("/pagespeed?url=example.com")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().starts_with("Network error"));
}

#[tokio::test]
async fn summary_returns_view_model_for_selected_tab() {
    let (app, _) = report_app(Some("k")).await;

    let (status, body) = send(
        &app,
        get_request("/pagespeed/summary?url=example.com&tab=seo&live=true"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["requested_url"], "https://example.com/");
    assert_eq!(body["overall"], json!({"score": 80, "band": "middle"}));
    assert_eq!(body["custom_seo"], json!({"score": 50, "band": "middle"}));
    assert_eq!(body["selected_tab"], "seo");
    assert_eq!(body["live_updates"], true);

    let categories: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["performance", "accessibility", "best-practices", "seo"]
    );

    let groups = body["selected"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["kind"], "diagnostics");
    assert_eq!(groups[0]["panels"][0]["id"], "structured-data");
    assert_eq!(groups[1]["kind"], "passed");
    assert_eq!(groups[1]["panels"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn summary_defaults_to_performance_tab() {
    let (app, _) = report_app(Some("k")).await;

    let (status, body) = send(&app, get_request("/api/pagespeed/summary?url=example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_tab"], "performance");
    assert_eq!(body["live_updates"], false);

    let groups = body["selected"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["heading"], "Top Opportunities for Improvement");
    let ids: Vec<&str> = groups[0]["panels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["largest-contentful-paint", "render-blocking-resources"]);
}

#[tokio::test]
async fn live_updates_lifecycle() {
    let (app, _) = report_app(Some("k")).await;

    let (status, body) = send(&app, get_request("/live")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Live updates are not running");

    let (status, body) = send(
        &app,
        post_json("/live", json!({"url": "example.com", "enabled": true, "tab": "seo"})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["source_url"], "https://example.com");

    let (status, body) = send(&app, get_request("/live")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_url"], "https://example.com");

    let (status, body) = send(&app, post_json("/live", json!({"enabled": false}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Live updates stopped for https://example.com");

    let (status, _) = send(&app, get_request("/live")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn enabling_live_updates_needs_a_url() {
    let (app, _) = report_app(Some("k")).await;

    let (status, body) = send(&app, post_json("/live", json!({"enabled": true}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing URL parameter");

    let (status, body) = send(
        &app,
        post_json("/live", json!({"url": "http://", "enabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid URL"));
}
