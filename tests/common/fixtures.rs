//! Test fixtures: scratch directories and input rasters.

use std::fs;
use std::path::{Path, PathBuf};

use pixel_ops::{ImageBuffer, Rgb};
use rasterpipe::codec;
use tempfile::TempDir;

/// A scratch directory holding one input file and receiving the artifacts.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Encode `image` as `input.ppm` and return its path.
    pub fn write_image(&self, image: &ImageBuffer) -> PathBuf {
        let path = self.path().join("input.ppm");
        codec::ppm::write_file(&path, image).expect("Failed to write input image");
        path
    }

    /// Write raw bytes as `input.ppm` and return its path.
    pub fn write_bytes(&self, bytes: &[u8]) -> PathBuf {
        let path = self.path().join("input.ppm");
        fs::write(&path, bytes).expect("Failed to write input bytes");
        path
    }

    pub fn image_output(&self) -> PathBuf {
        self.path().join(rasterpipe::models::DEFAULT_IMAGE_OUTPUT)
    }

    pub fn histogram_output(&self) -> PathBuf {
        self.path().join(rasterpipe::models::DEFAULT_HISTOGRAM_OUTPUT)
    }
}

/// 3x3 image with every pixel (100, 100, 100).
pub fn uniform_gray_3x3() -> ImageBuffer {
    ImageBuffer::new(3, 3, Rgb::gray(100)).unwrap()
}

/// Horizontal red-to-blue ramp with a green checker, enough structure for
/// the sharpening kernel to saturate in places.
pub fn ramp(width: usize, height: usize) -> ImageBuffer {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let t = (x * 255 / (width - 1).max(1)) as u8;
                let g = if (x + y) % 2 == 0 { 230 } else { 20 };
                Rgb::new(t, g, 255 - t)
            })
        })
        .collect();
    ImageBuffer::from_pixels(width, height, pixels).unwrap()
}
