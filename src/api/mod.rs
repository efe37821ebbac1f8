// src/api/mod.rs

pub mod handler;
pub mod live;
pub mod pagespeed;

pub use handler::{health_handler, home_handler};
pub use live::{get_live_updates, set_live_updates};
pub use pagespeed::{pagespeed_handler, summary_handler, summarize, SummaryResponse};
