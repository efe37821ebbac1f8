use crate::models::lighthouse::CategoryKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ParamsPageSpeed {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParamsSummary {
    pub url: Option<String>,
    pub tab: Option<CategoryKey>,
    pub live: Option<bool>,
}

// Body of POST /live
#[derive(Debug, Deserialize, Serialize)]
pub struct LiveUpdateRequest {
    #[serde(default)]
    pub url: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub tab: Option<CategoryKey>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
