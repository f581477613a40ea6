//! Coarse intensity histogram.
//!
//! Intensities `0..=255` are split into [`BIN_COUNT`] bins of
//! [`BIN_WIDTH`] values each (integer division, so the width is 51). Because
//! `255 / 51 == 5` lands one past the last bin, the topmost intensity is
//! folded into the last bin:
//!
//! | bin | intensities |
//! |-----|-------------|
//! | 0   | 0..=50      |
//! | 1   | 51..=101    |
//! | 2   | 102..=152   |
//! | 3   | 153..=203   |
//! | 4   | 204..=255   |

use std::fmt;

use crate::image::ImageBuffer;

/// Number of histogram bins.
pub const BIN_COUNT: usize = 5;

/// Intensity values per bin (truncating division).
pub const BIN_WIDTH: usize = 256 / BIN_COUNT;

/// Bin for intensity `v`, clamped to the last bin.
#[inline]
pub fn bin_index(v: u8) -> usize {
    (v as usize / BIN_WIDTH).min(BIN_COUNT - 1)
}

/// Per-bin pixel counts, bin 0 darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: [u64; BIN_COUNT],
}

impl Histogram {
    /// Count the pixels of an already-grayscale image.
    ///
    /// Only the red channel is read as the intensity. The image is expected
    /// to have come through [`to_grayscale`](crate::to_grayscale) so that
    /// `r == g == b`; this is not checked.
    ///
    /// # Example
    /// ```
    /// use pixel_ops::{Histogram, ImageBuffer, Rgb};
    ///
    /// let image = ImageBuffer::new(3, 3, Rgb::gray(100)).unwrap();
    /// let histogram = Histogram::from_grayscale(&image);
    /// assert_eq!(histogram.counts(), &[0, 9, 0, 0, 0]);
    /// ```
    pub fn from_grayscale(image: &ImageBuffer) -> Self {
        let mut counts = [0u64; BIN_COUNT];
        for px in image.pixels() {
            counts[bin_index(px.r)] += 1;
        }
        Self { counts }
    }

    /// Bin counts in ascending intensity order.
    #[inline]
    pub fn counts(&self) -> &[u64; BIN_COUNT] {
        &self.counts
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}
