//! Assertion helpers for tests.

use std::fs;
use std::path::Path;

use pixel_ops::ImageBuffer;
use pretty_assertions::assert_eq;
use rasterpipe::codec;

/// Assert the histogram artifact holds exactly `counts`, each followed by a space.
pub fn assert_histogram_file(path: &Path, counts: &[u64]) {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected histogram at {}: {}", path.display(), e));
    let expected: String = counts.iter().map(|c| format!("{} ", c)).collect();
    assert_eq!(text, expected, "Histogram artifact mismatch");
}

/// Decode the raster artifact at `path`.
pub fn read_image(path: &Path) -> ImageBuffer {
    let data =
        fs::read(path).unwrap_or_else(|e| panic!("Expected image at {}: {}", path.display(), e));
    codec::decode(&data)
        .unwrap_or_else(|e| panic!("Artifact {} is malformed: {}", path.display(), e))
}

/// Assert neither artifact was produced.
pub fn assert_no_artifacts(image: &Path, histogram: &Path) {
    assert!(
        !image.exists(),
        "Expected no image artifact, found {}",
        image.display()
    );
    assert!(
        !histogram.exists(),
        "Expected no histogram artifact, found {}",
        histogram.display()
    );
}
