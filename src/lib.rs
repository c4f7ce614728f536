pub mod config;
pub mod params;
pub mod tracker;

mod error;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use tracker::{PageviewOptions, SessionControl, Tracker};
