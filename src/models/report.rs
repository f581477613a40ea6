use std::path::PathBuf;

use pixel_ops::Histogram;

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Image width in pixels
    pub width: usize,

    /// Image height in pixels
    pub height: usize,

    /// Counts written to the histogram artifact
    pub histogram: Histogram,

    /// Path the sharpened image was written to
    pub image_path: PathBuf,

    /// Path the histogram was written to
    pub histogram_path: PathBuf,
}
