//! Pixel storage.
//!
//! [`ImageBuffer`] owns a row-major grid of [`Rgb`] samples. It is the single
//! data entity every stage of the processing pipeline reads and writes.

mod buffer;
mod error;
mod rgb;

pub use buffer::ImageBuffer;
pub use error::BufferError;
pub use rgb::Rgb;
