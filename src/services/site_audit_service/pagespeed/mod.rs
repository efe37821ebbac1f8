pub mod client;

pub use client::PageSpeedClient;
