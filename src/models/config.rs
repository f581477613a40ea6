use std::path::{Path, PathBuf};

/// File name of the sharpened raster artifact.
pub const DEFAULT_IMAGE_OUTPUT: &str = "output.ppm";

/// File name of the histogram artifact.
pub const DEFAULT_HISTOGRAM_OUTPUT: &str = "output.txt";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "rasterpipe=warn";

/// Where a pipeline run writes its two artifacts.
///
/// The command-line tool always uses [`OutputPaths::default`], i.e. fixed
/// names relative to the working directory. Library callers may redirect
/// both files into another directory with [`OutputPaths::in_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Sharpened image, binary PPM
    pub image: PathBuf,

    /// Histogram counts, one text line
    pub histogram: PathBuf,
}

impl OutputPaths {
    /// Default file names placed inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            image: dir.join(DEFAULT_IMAGE_OUTPUT),
            histogram: dir.join(DEFAULT_HISTOGRAM_OUTPUT),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            image: PathBuf::from(DEFAULT_IMAGE_OUTPUT),
            histogram: PathBuf::from(DEFAULT_HISTOGRAM_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = OutputPaths::default();
        assert_eq!(paths.image, PathBuf::from("output.ppm"));
        assert_eq!(paths.histogram, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_in_dir() {
        let paths = OutputPaths::in_dir("/tmp/run");
        assert_eq!(paths.image, PathBuf::from("/tmp/run/output.ppm"));
        assert_eq!(paths.histogram, PathBuf::from("/tmp/run/output.txt"));
    }
}
