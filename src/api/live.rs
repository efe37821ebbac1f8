use crate::api::pagespeed::missing_url;
use crate::models::{AppState, ErrorResponse, LiveUpdateRequest, MessageResponse, ViewState};
use crate::services::LivePoller;
use crate::utils::{normalize_target_url, validate_target_url};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// POST /live: start (replacing any running session) or stop live updates.
pub async fn set_live_updates(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LiveUpdateRequest>,
) -> Response {
    let mut live = state.live.lock().await;

    if !request.enabled {
        return match live.take() {
            Some(poller) => {
                let url = poller.source_url().to_string();
                poller.stop();
                Json(MessageResponse {
                    message: format!("Live updates stopped for {}", url),
                })
                .into_response()
            }
            None => Json(MessageResponse {
                message: "Live updates were not running".to_string(),
            })
            .into_response(),
        };
    }

    let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
        return missing_url();
    };
    let target = normalize_target_url(&url);
    if let Err(err) = validate_target_url(&target) {
        return err.into_response();
    }

    let view_state = ViewState {
        selected_tab: request.tab.unwrap_or_default(),
        live_updates: true,
    };
    // the previous session, if any, is dropped and aborted here
    let poller = LivePoller::start(
        Arc::clone(&state.client),
        target,
        view_state,
        state.config.live_interval,
        true,
    );
    let snapshot = poller.snapshot();
    *live = Some(poller);

    (StatusCode::ACCEPTED, Json(snapshot)).into_response()
}

/// GET /live: the current live-update snapshot.
pub async fn get_live_updates(State(state): State<Arc<AppState>>) -> Response {
    let live = state.live.lock().await;
    match live.as_ref() {
        Some(poller) => Json(poller.snapshot()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Live updates are not running".to_string(),
            }),
        )
            .into_response(),
    }
}
