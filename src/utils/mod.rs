pub mod url_utils;

pub use url_utils::{normalize_target_url, validate_target_url};
