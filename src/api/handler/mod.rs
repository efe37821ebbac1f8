pub mod handler;

pub use handler::{health_handler, home_handler};
