pub mod cli;
pub mod dedup;
pub mod download;
pub mod error;
pub mod input;
pub mod naming;
pub mod planner;
pub mod progress;
pub mod report;

pub use error::MediaGrabError;
