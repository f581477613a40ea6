pub mod config;
pub mod report;

pub use config::{OutputPaths, DEFAULT_HISTOGRAM_OUTPUT, DEFAULT_IMAGE_OUTPUT, DEFAULT_LOG_FILTER};
pub use report::PipelineReport;
