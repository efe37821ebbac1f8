use crate::models::{AuditReport, Category, CategoryKey, CategoryScore, ScoreBand};

/// Audits behind the custom SEO score. Changing any other audit leaves it untouched.
pub const CUSTOM_SEO_AUDITS: [&str; 6] = [
    "meta-description",
    "viewport",
    "robots-txt",
    "hreflang",
    "font-size",
    "is-crawlable",
];

/// Scales a [0,1] fraction to a rounded 0-100 integer.
pub fn to_display_score(fraction: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Mean of the four fixed categories, a missing category or null score counting as 0.
pub fn overall_score(report: &AuditReport) -> u8 {
    let sum = CategoryKey::ALL.iter().fold(0.0, |sum, key| {
        sum + report.category(*key).and_then(|c| c.score).unwrap_or(0.0)
    });
    to_display_score(sum / CategoryKey::ALL.len() as f64)
}

pub fn custom_seo_score(report: &AuditReport) -> u8 {
    let sum = CUSTOM_SEO_AUDITS.iter().fold(0.0, |sum, id| {
        sum + report.audit(id).and_then(|a| a.score).unwrap_or(0.0)
    });
    to_display_score(sum / CUSTOM_SEO_AUDITS.len() as f64)
}

pub fn category_score(category: &Category) -> u8 {
    category.score.map(to_display_score).unwrap_or(0)
}

/// Scores for the fixed categories present in the report, in display order.
pub fn category_scores(report: &AuditReport) -> Vec<CategoryScore> {
    CategoryKey::ALL
        .iter()
        .filter_map(|key| {
            report.category(*key).map(|category| {
                let score = category_score(category);
                CategoryScore {
                    key: *key,
                    title: if category.title.is_empty() {
                        key.label().to_string()
                    } else {
                        category.title.clone()
                    },
                    score,
                    band: ScoreBand::for_score(score),
                }
            })
        })
        .collect()
}
