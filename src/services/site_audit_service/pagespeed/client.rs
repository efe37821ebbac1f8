use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::models::{AuditReport, CategoryKey};
use crate::utils::validate_target_url;
use axum::body::Bytes;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

// {"error": {"code": 400, "message": "...", ...}}
#[derive(Deserialize)]
struct UpstreamEnvelope {
    error: Option<UpstreamErrorBody>,
}

#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

/// One-shot client for the PageSpeed Insights `runPagespeed` endpoint.
///
/// Every call makes exactly one HTTP request. No retries, no caching.
#[derive(Clone)]
pub struct PageSpeedClient {
    http: Client,
    api_url: String,
    default_key: Option<String>,
}

impl PageSpeedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(
            http,
            config.api_url.clone(),
            config.api_key.clone(),
        ))
    }

    pub fn with_client(http: Client, api_url: String, default_key: Option<String>) -> Self {
        Self {
            http,
            api_url,
            default_key,
        }
    }

    pub fn has_default_key(&self) -> bool {
        self.default_key.is_some()
    }

    /// Fetches and parses a report. Any JSON object is a valid report.
    pub async fn fetch(&self, url: &str, api_key: Option<&str>) -> Result<AuditReport> {
        let body = self.fetch_json(url, api_key).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches the upstream body as untyped JSON.
    pub async fn fetch_json(&self, url: &str, api_key: Option<&str>) -> Result<Value> {
        let body = self.fetch_raw(url, api_key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the upstream body byte for byte, checked only for being JSON.
    pub async fn fetch_raw(&self, url: &str, api_key: Option<&str>) -> Result<Bytes> {
        let key = api_key
            .filter(|k| !k.trim().is_empty())
            .or(self.default_key.as_deref())
            .ok_or_else(FetchError::missing_api_key)?;
        let target = validate_target_url(url)?;

        let mut query: Vec<(&str, &str)> = vec![("url", target.as_str())];
        query.extend(CategoryKey::ALL.iter().map(|c| ("category", c.as_str())));
        query.push(("key", key));

        info!("Requesting PageSpeed report for {}", target);
        let response = self.http.get(&self.api_url).query(&query).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = upstream_message(status, &bytes);
            warn!(
                "PageSpeed API rejected {} with {}: {}",
                target, status, message
            );
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        debug!("PageSpeed returned {} bytes for {}", bytes.len(), target);
        serde_json::from_slice::<IgnoredAny>(&bytes)?;
        Ok(bytes)
    }
}

fn upstream_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<UpstreamEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("PageSpeed API returned {}", status))
}
