// src/models/mod.rs

pub mod api;
pub mod app;
pub mod lighthouse;

pub use api::{
    ErrorResponse, LiveUpdateRequest, MessageResponse, ParamsPageSpeed, ParamsSummary,
};
pub use app::AppState;
pub use lighthouse::*;
