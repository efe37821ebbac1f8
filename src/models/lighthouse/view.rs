use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::CategoryKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Middle,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 90 {
            ScoreBand::Good
        } else if score >= 50 {
            ScoreBand::Middle
        } else {
            ScoreBand::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: u8,
    pub band: ScoreBand,
}

impl ScoreSummary {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            band: ScoreBand::for_score(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub key: CategoryKey,
    pub title: String,
    pub score: u8,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    Opportunities,
    Diagnostics,
    Passed,
}

impl BucketKind {
    pub fn heading(&self) -> &'static str {
        match self {
            BucketKind::Opportunities => "Top Opportunities for Improvement",
            BucketKind::Diagnostics => "Technical Diagnostics & Recommendations",
            BucketKind::Passed => "Passed Audits (Well-Implemented)",
        }
    }
}

// Derived per render, never stored
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CategoryBucket {
    pub opportunities: Vec<Audit>,
    pub diagnostics: Vec<Audit>,
    pub passed: Vec<Audit>,
}

impl CategoryBucket {
    pub fn get(&self, kind: BucketKind) -> &[Audit] {
        match kind {
            BucketKind::Opportunities => &self.opportunities,
            BucketKind::Diagnostics => &self.diagnostics,
            BucketKind::Passed => &self.passed,
        }
    }

    pub fn len(&self) -> usize {
        self.opportunities.len() + self.diagnostics.len() + self.passed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    pub key: CategoryKey,
    pub label: String,
    /// Audits the category referenced that exist in the report, before bucketing.
    pub considered: usize,
    pub buckets: CategoryBucket,
}

/// Caller-owned UI state handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default, alias = "tab")]
    pub selected_tab: CategoryKey,
    #[serde(default, alias = "live")]
    pub live_updates: bool,
}

/// Display-ready result of classifying one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub requested_url: Option<String>,
    pub fetch_time: Option<DateTime<Utc>>,
    pub overall: ScoreSummary,
    pub categories: Vec<CategoryScore>,
    /// Computed from six fixed SEO audits, shown next to the upstream `seo` score.
    pub custom_seo: ScoreSummary,
    pub sections: Vec<CategorySection>,
    pub selected_tab: CategoryKey,
    pub live_updates: bool,
}

impl ViewModel {
    pub fn section(&self, key: CategoryKey) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn selected_section(&self) -> Option<&CategorySection> {
        self.section(self.selected_tab)
    }
}
