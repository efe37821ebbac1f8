use crate::models::lighthouse::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score: Option<f64>,
    // refs without a string id are dropped one by one
    #[serde(
        rename = "auditRefs",
        default,
        deserialize_with = "lenient::vec_skipping_invalid"
    )]
    pub audit_refs: Vec<AuditRef>,
}

// A category's pointer into the report's audit map
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AuditRef {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub group: Option<String>,
}

/// The four fixed top-level Lighthouse categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    #[default]
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Performance,
        CategoryKey::Accessibility,
        CategoryKey::BestPractices,
        CategoryKey::Seo,
    ];

    /// Key used by the upstream report's `categories` map and the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Performance => "performance",
            CategoryKey::Accessibility => "accessibility",
            CategoryKey::BestPractices => "best-practices",
            CategoryKey::Seo => "seo",
        }
    }

    /// Tab label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Performance => "Performance",
            CategoryKey::Accessibility => "Accessibility",
            CategoryKey::BestPractices => "Best Practices",
            CategoryKey::Seo => "SEO",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
