use crate::models::{
    Audit, AuditReport, BucketKind, CategoryBucket, CategoryKey, CategorySection,
    ScoreDisplayMode, ScoreSummary, ViewModel, ViewState,
};
use crate::services::site_audit_service::compute::scores::{
    category_scores, custom_seo_score, overall_score,
};
use chrono::{DateTime, Utc};

/// Bucket an audit belongs in, or `None` when it is not displayed.
///
/// Rules apply in order and the first match wins. `notApplicable` audits can
/// carry stale scores, so they are filtered before any score check, and the
/// binary 0/1 checks run before the display-mode check.
pub fn bucket_for(audit: &Audit) -> Option<BucketKind> {
    if audit.score_display_mode == ScoreDisplayMode::NotApplicable {
        return None;
    }
    match audit.score {
        Some(score) if score == 0.0 => return Some(BucketKind::Opportunities),
        Some(score) if score == 1.0 => return Some(BucketKind::Passed),
        _ => {}
    }
    if matches!(
        audit.score_display_mode,
        ScoreDisplayMode::Informative | ScoreDisplayMode::Manual
    ) {
        return Some(BucketKind::Diagnostics);
    }
    match audit.score {
        Some(score) if score > 0.0 && score < 1.0 => Some(BucketKind::Opportunities),
        _ => None,
    }
}

pub fn categorize_audits<'a, I>(audits: I) -> CategoryBucket
where
    I: IntoIterator<Item = &'a Audit>,
{
    let mut bucket = CategoryBucket::default();
    for audit in audits {
        match bucket_for(audit) {
            Some(BucketKind::Opportunities) => bucket.opportunities.push(audit.clone()),
            Some(BucketKind::Diagnostics) => bucket.diagnostics.push(audit.clone()),
            Some(BucketKind::Passed) => bucket.passed.push(audit.clone()),
            None => {}
        }
    }
    bucket
}

pub fn category_section(report: &AuditReport, key: CategoryKey) -> CategorySection {
    let audits = report.audits_for(key);
    CategorySection {
        key,
        label: key.label().to_string(),
        considered: audits.len(),
        buckets: categorize_audits(audits),
    }
}

pub fn classify(report: &AuditReport) -> ViewModel {
    classify_with(report, &ViewState::default())
}

/// Derives the dashboard view model. Pure: same report and state, same result.
pub fn classify_with(report: &AuditReport, view: &ViewState) -> ViewModel {
    ViewModel {
        requested_url: report.requested_url().map(str::to_string),
        fetch_time: report.fetch_time().and_then(parse_fetch_time),
        overall: ScoreSummary::new(overall_score(report)),
        categories: category_scores(report),
        custom_seo: ScoreSummary::new(custom_seo_score(report)),
        sections: CategoryKey::ALL
            .iter()
            .map(|key| category_section(report, *key))
            .collect(),
        selected_tab: view.selected_tab,
        live_updates: view.live_updates,
    }
}

fn parse_fetch_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
