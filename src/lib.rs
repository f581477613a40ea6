//! Rasterpipe - sharpen, gray and bin a binary PPM image
//!
//! The pixel math lives in the `pixel-ops` crate; this crate adds the file
//! formats, the fixed pipeline that strings the stages together and the
//! error taxonomy the command-line tool reports. Modules are public for
//! integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod pipeline;

pub use error::{ErrorKind, PipelineError, Stage};
pub use models::{OutputPaths, PipelineReport};
pub use pipeline::Pipeline;
