//! Threshold evaluation and plugin output

mod report;
mod status;

pub use report::render;
pub use status::{evaluate, ServiceState, Thresholds};
