pub mod classify;
pub mod scores;

pub use classify::{bucket_for, categorize_audits, category_section, classify, classify_with};
pub use scores::{
    category_score, category_scores, custom_seo_score, overall_score, to_display_score,
    CUSTOM_SEO_AUDITS,
};
