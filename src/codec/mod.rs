//! On-disk formats.
//!
//! - [`ppm`]: the binary raster container read at the start of a run and
//!   written after sharpening.
//! - [`histogram`]: the one-line text artifact holding the bin counts.

pub mod histogram;
pub mod ppm;

pub use ppm::{decode, encode, DecodeError, HeaderField};
