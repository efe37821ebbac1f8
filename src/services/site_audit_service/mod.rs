// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod live;
pub mod pagespeed;
pub mod render;

pub use compute::{
    bucket_for, categorize_audits, category_scores, classify, classify_with, custom_seo_score,
    overall_score,
};
pub use live::{LivePoller, LiveSnapshot};
pub use pagespeed::PageSpeedClient;
pub use render::{render_audit, render_details, AuditPanel, DetailView};
