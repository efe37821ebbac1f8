use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::{Category, CategoryKey};
use crate::models::lighthouse::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// PageSpeed Insights `runPagespeed` response.
///
/// Every field is optional: the fetcher does no schema validation, and the
/// classifier degrades missing pieces to zero or empty values. Mistyped
/// fields fall back to their defaults instead of failing the report.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AuditReport {
    // PageSpeed echoes the requested url as the top-level id
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    #[serde(
        rename = "analysisUTCTimestamp",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub analysis_timestamp: Option<String>,
    #[serde(
        rename = "lighthouseResult",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LighthouseResult {
    #[serde(rename = "requestedUrl", default, deserialize_with = "lenient::or_default")]
    pub requested_url: Option<String>,
    #[serde(rename = "finalUrl", default, deserialize_with = "lenient::or_default")]
    pub final_url: Option<String>,
    #[serde(rename = "fetchTime", default, deserialize_with = "lenient::or_default")]
    pub fetch_time: Option<String>,
    #[serde(
        rename = "lighthouseVersion",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub lighthouse_version: Option<String>,
    #[serde(default, deserialize_with = "lenient::map_skipping_invalid")]
    pub categories: HashMap<String, Category>,
    #[serde(default, deserialize_with = "audits_by_id")]
    pub audits: HashMap<String, Audit>,
}

// an audit without its own id takes the map key
fn audits_by_id<'de, D>(deserializer: D) -> Result<HashMap<String, Audit>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut audits: HashMap<String, Audit> = lenient::map_skipping_invalid(deserializer)?;
    for (key, audit) in audits.iter_mut() {
        if audit.id.is_empty() {
            audit.id = key.clone();
        }
    }
    Ok(audits)
}

impl AuditReport {
    pub fn requested_url(&self) -> Option<&str> {
        self.lighthouse_result
            .as_ref()
            .and_then(|lr| lr.requested_url.as_deref())
            .or(self.id.as_deref())
    }

    pub fn fetch_time(&self) -> Option<&str> {
        self.lighthouse_result
            .as_ref()
            .and_then(|lr| lr.fetch_time.as_deref())
            .or(self.analysis_timestamp.as_deref())
    }

    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.lighthouse_result
            .as_ref()
            .and_then(|lr| lr.categories.get(key.as_str()))
    }

    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.lighthouse_result
            .as_ref()
            .and_then(|lr| lr.audits.get(id))
    }

    /// Audits referenced by a category, in `auditRefs` order. Refs without a
    /// matching audit are skipped.
    pub fn audits_for(&self, key: CategoryKey) -> Vec<&Audit> {
        match self.category(key) {
            Some(category) => category
                .audit_refs
                .iter()
                .filter_map(|audit_ref| self.audit(&audit_ref.id))
                .collect(),
            None => Vec::new(),
        }
    }
}
