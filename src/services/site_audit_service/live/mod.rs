pub mod poller;

pub use poller::{LivePoller, LiveSnapshot};
