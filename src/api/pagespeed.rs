use crate::models::{
    AppState, BucketKind, ErrorResponse, ParamsPageSpeed, ParamsSummary, ViewModel, ViewState,
};
use crate::services::{classify_with, render_audit, AuditPanel};
use crate::utils::normalize_target_url;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::info;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct PanelGroup {
    pub kind: BucketKind,
    pub heading: &'static str,
    pub panels: Vec<AuditPanel>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub view: ViewModel,
    /// Rendered panels for the selected tab, one group per non-empty bucket.
    pub selected: Vec<PanelGroup>,
}

pub(crate) fn missing_url() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Missing URL parameter".to_string(),
        }),
    )
        .into_response()
}

/// GET /pagespeed?url=<target>: upstream JSON passed through byte for byte.
pub async fn pagespeed_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsPageSpeed>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.trim().is_empty()) else {
        return missing_url();
    };
    let target = normalize_target_url(&url);
    info!("Proxying PageSpeed request for {}", target);

    match state.client.fetch_raw(&target, None).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /pagespeed/summary?url=<target>&tab=<category>&live=<bool>
pub async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsSummary>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.trim().is_empty()) else {
        return missing_url();
    };
    let target = normalize_target_url(&url);
    let view_state = ViewState {
        selected_tab: params.tab.unwrap_or_default(),
        live_updates: params.live.unwrap_or(false),
    };

    match state.client.fetch(&target, None).await {
        Ok(report) => Json(summarize(classify_with(&report, &view_state))).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn summarize(view: ViewModel) -> SummaryResponse {
    let selected = match view.selected_section() {
        Some(section) => [
            BucketKind::Opportunities,
            BucketKind::Diagnostics,
            BucketKind::Passed,
        ]
        .into_iter()
        .filter(|kind| !section.buckets.get(*kind).is_empty())
        .map(|kind| PanelGroup {
            kind,
            heading: kind.heading(),
            panels: section.buckets.get(kind).iter().map(render_audit).collect(),
        })
        .collect(),
        None => Vec::new(),
    };
    SummaryResponse { view, selected }
}
