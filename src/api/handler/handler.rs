use crate::models::MessageResponse;
use axum::Json;
use serde_json::{json, Value};

pub async fn home_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to speedlens".to_string(),
    })
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
