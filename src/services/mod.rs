pub mod site_audit_service;

pub use site_audit_service::{
    bucket_for, categorize_audits, category_scores, classify, classify_with, custom_seo_score,
    overall_score, render_audit, render_details, AuditPanel, DetailView, LivePoller,
    LiveSnapshot, PageSpeedClient,
};
