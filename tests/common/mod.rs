//! Shared helpers: a fake PageSpeed endpoint on an ephemeral port and report fixtures.

#![allow(dead_code)]

use axum::Router;
use serde_json::{json, Value};
use speedlens::{services::PageSpeedClient, AppState, Config};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves `router` on 127.0.0.1 and returns the runPagespeed url pointing at it.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should have local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake upstream failed");
    });
    format!("http://{}/runPagespeed", addr)
}

/// A url nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should have local addr");
    drop(listener);
    format!("http://{}/runPagespeed", addr)
}

pub fn test_config(api_url: &str, api_key: Option<&str>) -> Config {
    Config {
        api_key: api_key.map(str::to_string),
        api_url: api_url.to_string(),
        ..Config::default()
    }
}

pub fn test_client(api_url: &str, api_key: Option<&str>) -> PageSpeedClient {
    PageSpeedClient::new(&test_config(api_url, api_key)).expect("Should build client")
}

pub fn test_state(api_url: &str, api_key: Option<&str>) -> Arc<AppState> {
    let config = test_config(api_url, api_key);
    let client = PageSpeedClient::new(&config).expect("Should build client");
    Arc::new(AppState::new(config, client))
}

/// Trimmed-down runPagespeed response with the shape PageSpeed actually returns.
pub fn sample_report(performance: f64) -> Value {
    json!({
        "captchaResult": "CAPTCHA_NOT_NEEDED",
        "kind": "pagespeedonline#result",
        "id": "https://example.com/",
        "analysisUTCTimestamp": "2024-05-01T10:00:00.000Z",
        "lighthouseResult": {
            "requestedUrl": "https://example.com/",
            "finalUrl": "https://example.com/",
            "lighthouseVersion": "12.0.0",
            "fetchTime": "2024-05-01T09:59:58.000Z",
            "categories": {
                "performance": {
                    "id": "performance",
                    "title": "Performance",
                    "score": performance,
                    "auditRefs": [
                        {"id": "largest-contentful-paint", "weight": 25, "group": "metrics"},
                        {"id": "render-blocking-resources", "weight": 0}
                    ]
                },
                "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 0.8, "auditRefs": []},
                "best-practices": {"id": "best-practices", "title": "Best Practices", "score": 0.9, "auditRefs": []},
                "seo": {
                    "id": "seo",
                    "title": "SEO",
                    "score": 0.6,
                    "auditRefs": [
                        {"id": "meta-description", "weight": 1},
                        {"id": "viewport", "weight": 1},
                        {"id": "hreflang", "weight": 1},
                        {"id": "structured-data", "weight": 0}
                    ]
                }
            },
            "audits": {
                "largest-contentful-paint": {
                    "id": "largest-contentful-paint",
                    "title": "Largest Contentful Paint",
                    "description": "LCP marks the time at which the largest text or image is painted.",
                    "score": 0.35,
                    "scoreDisplayMode": "numeric",
                    "numericValue": 4210.5
                },
                "render-blocking-resources": {
                    "id": "render-blocking-resources",
                    "title": "Eliminate render-blocking resources",
                    "score": 0,
                    "scoreDisplayMode": "metricSavings",
                    "details": {
                        "type": "opportunity",
                        "headings": [{"key": "url", "valueType": "url", "label": "URL"}],
                        "items": [{"url": "https://example.com/app.css", "totalBytes": 10240, "wastedMs": 300}]
                    }
                },
                "meta-description": {"id": "meta-description", "title": "Document has a meta description", "score": 1, "scoreDisplayMode": "binary"},
                "viewport": {"id": "viewport", "title": "Has a viewport tag", "score": 1, "scoreDisplayMode": "binary"},
                "hreflang": {"id": "hreflang", "title": "Document has a valid hreflang", "score": 1, "scoreDisplayMode": "binary"},
                "structured-data": {"id": "structured-data", "title": "Structured data is valid", "score": null, "scoreDisplayMode": "manual"}
            }
        }
    })
}
