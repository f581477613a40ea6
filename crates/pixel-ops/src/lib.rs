//! pixel-ops: the pixel math behind the rasterpipe tool
//!
//! This library holds the three transforms the pipeline applies to an 8-bit
//! RGB raster, plus the buffer type they share. It has no dependencies and
//! does no I/O; decoding and encoding files is left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use pixel_ops::{sharpen, to_grayscale, Histogram, ImageBuffer, Rgb};
//!
//! let image = ImageBuffer::new(3, 3, Rgb::gray(100)).unwrap();
//!
//! let mut image = sharpen(&image).unwrap();
//! to_grayscale(&mut image);
//! let histogram = Histogram::from_grayscale(&image);
//!
//! assert_eq!(histogram.counts(), &[0, 9, 0, 0, 0]);
//! ```
//!
//! # Stages
//!
//! ```text
//! ImageBuffer (RGB)
//!     |
//!     v
//! sharpen()          3x3 kernel, interior only, saturating, new buffer
//!     |
//!     v
//! to_grayscale()     BT.709 luma written to all three channels, in place
//!     |
//!     v
//! Histogram          red channel binned into 5 bins of width 51
//! ```
//!
//! # Edge Policy
//!
//! The sharpening kernel needs a full 3x3 neighbourhood, so it is only
//! evaluated where one exists. The outermost ring of pixels is copied from
//! the input untouched: no padding, no reflection, no clamped-coordinate
//! sampling. Downstream consumers (the histogram in particular) depend on
//! this, so it must not be "fixed".

pub mod filter;
pub mod histogram;
pub mod image;
pub mod luma;


pub use filter::{sharpen, Kernel};
pub use histogram::{bin_index, Histogram, BIN_COUNT, BIN_WIDTH};
pub use image::{BufferError, ImageBuffer, Rgb};
pub use luma::{luma, to_grayscale};
