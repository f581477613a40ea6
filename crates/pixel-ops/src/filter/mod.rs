//! Neighbourhood filters.
//!
//! The only filter is the fixed sharpening pass: [`sharpen`] convolves an
//! [`ImageBuffer`](crate::ImageBuffer) with [`Kernel::SHARPEN`] and leaves
//! the one-pixel border exactly as it was.

mod convolve;
mod kernel;

pub use convolve::sharpen;
pub use kernel::Kernel;
