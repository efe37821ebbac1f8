use crate::models::lighthouse::details::AuditDetails;
use crate::models::lighthouse::lenient;
use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Audit {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score: Option<f64>,
    #[serde(
        rename = "scoreDisplayMode",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub score_display_mode: ScoreDisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AuditDetails>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub warnings: Option<Vec<String>>,
    #[serde(
        rename = "learnMoreUrl",
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub learn_more_url: Option<String>,
    #[serde(
        rename = "learnMoreEl",
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub learn_more_el: Option<LearnMoreLink>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LearnMoreLink {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub href: Option<String>,
}

/// How Lighthouse wants an audit's score interpreted.
///
/// The upstream set grows between Lighthouse releases, so unrecognized modes
/// land in `Other` instead of failing the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    Binary,
    Numeric,
    Informative,
    Manual,
    NotApplicable,
    Error,
    #[default]
    #[serde(other)]
    Other,
}

/// Pass/fail badge shown next to an audit title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditStatus {
    Passed,
    Failed,
    NotApplicable,
}

impl AuditStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Passed => "Passed",
            AuditStatus::Failed => "Failed",
            AuditStatus::NotApplicable => "N/A",
        }
    }
}

impl Audit {
    pub fn status(&self) -> AuditStatus {
        if self.score_display_mode == ScoreDisplayMode::NotApplicable {
            AuditStatus::NotApplicable
        } else if self.score == Some(1.0) {
            AuditStatus::Passed
        } else {
            AuditStatus::Failed
        }
    }

    /// Documentation link, preferring the plain url over the rendered element.
    pub fn learn_more(&self) -> Option<&str> {
        self.learn_more_url
            .as_deref()
            .or_else(|| self.learn_more_el.as_ref().and_then(|el| el.href.as_deref()))
    }

    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or_default()
    }
}
