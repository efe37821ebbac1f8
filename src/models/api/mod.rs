pub mod params;

pub use params::{
    ErrorResponse, LiveUpdateRequest, MessageResponse, ParamsPageSpeed, ParamsSummary,
};
