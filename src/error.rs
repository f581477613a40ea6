use std::fmt;
use std::io;
use std::path::PathBuf;

use pixel_ops::BufferError;
use thiserror::Error;

use crate::codec::DecodeError;

/// Pipeline stages, in execution order.
///
/// `Grayscale` and `Histogram` cannot fail; they only label log events and
/// are never returned by [`PipelineError::stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadInput,
    Decode,
    Sharpen,
    WriteImage,
    Grayscale,
    Histogram,
    WriteHistogram,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ReadInput => "read-input",
            Stage::Decode => "decode",
            Stage::Sharpen => "sharpen",
            Stage::WriteImage => "write-image",
            Stage::Grayscale => "grayscale",
            Stage::Histogram => "histogram",
            Stage::WriteHistogram => "write-histogram",
        };
        f.write_str(name)
    }
}

/// Broad failure class. Every kind aborts the run; the kind only informs
/// the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreadable input path, malformed header or truncated pixel data
    Input,
    /// Pixel storage could not be allocated
    Resource,
    /// An artifact could not be written
    Output,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Input => "input",
            ErrorKind::Resource => "resource",
            ErrorKind::Output => "output",
        };
        f.write_str(name)
    }
}

/// Artifact produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Image,
    Histogram,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Image => f.write_str("sharpened image"),
            Artifact::Histogram => f.write_str("histogram"),
        }
    }
}

/// Error that aborted a pipeline run.
///
/// Messages name the failing step; the underlying cause is available
/// through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read input {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode input {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("failed to allocate sharpened image")]
    Sharpen(#[source] BufferError),

    #[error("failed to write {artifact} to {}", path.display())]
    Write {
        artifact: Artifact,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::ReadInput { .. } => Stage::ReadInput,
            PipelineError::Decode { .. } => Stage::Decode,
            PipelineError::Sharpen(_) => Stage::Sharpen,
            PipelineError::Write {
                artifact: Artifact::Image,
                ..
            } => Stage::WriteImage,
            PipelineError::Write {
                artifact: Artifact::Histogram,
                ..
            } => Stage::WriteHistogram,
        }
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::ReadInput { .. } => ErrorKind::Input,
            PipelineError::Decode { source, .. } if source.is_resource() => ErrorKind::Resource,
            PipelineError::Decode { .. } => ErrorKind::Input,
            PipelineError::Sharpen(_) => ErrorKind::Resource,
            PipelineError::Write { .. } => ErrorKind::Output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_input_error() {
        let error = PipelineError::ReadInput {
            path: PathBuf::from("missing.ppm"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(error.to_string(), "failed to read input missing.ppm");
        assert_eq!(error.stage(), Stage::ReadInput);
        assert_eq!(error.kind(), ErrorKind::Input);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_decode_error_is_input() {
        let error = PipelineError::Decode {
            path: PathBuf::from("in.ppm"),
            source: DecodeError::BadMagic,
        };
        assert_eq!(error.to_string(), "failed to decode input in.ppm");
        assert_eq!(error.stage(), Stage::Decode);
        assert_eq!(error.kind(), ErrorKind::Input);
        assert_eq!(
            error.source().unwrap().to_string(),
            "not a binary RGB raster (expected magic \"P6\")"
        );
    }

    #[test]
    fn test_decode_allocation_is_resource() {
        let overflow = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let error = PipelineError::Decode {
            path: PathBuf::from("huge.ppm"),
            source: DecodeError::Buffer(BufferError::from(overflow)),
        };
        assert_eq!(error.kind(), ErrorKind::Resource);
    }

    #[test]
    fn test_decode_oversized_dimensions_is_input() {
        let error = PipelineError::Decode {
            path: PathBuf::from("huge.ppm"),
            source: DecodeError::Buffer(BufferError::TooLarge {
                width: usize::MAX,
                height: usize::MAX,
            }),
        };
        assert_eq!(error.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_truncated_is_input() {
        let error = PipelineError::Decode {
            path: PathBuf::from("short.ppm"),
            source: DecodeError::Buffer(BufferError::Truncated {
                expected: 9,
                actual: 2,
            }),
        };
        assert_eq!(error.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_write_errors() {
        let image = PipelineError::Write {
            artifact: Artifact::Image,
            path: PathBuf::from("out/output.ppm"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            image.to_string(),
            "failed to write sharpened image to out/output.ppm"
        );
        assert_eq!(image.stage(), Stage::WriteImage);
        assert_eq!(image.kind(), ErrorKind::Output);

        let histogram = PipelineError::Write {
            artifact: Artifact::Histogram,
            path: PathBuf::from("output.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(histogram.stage(), Stage::WriteHistogram);
        assert_eq!(histogram.kind(), ErrorKind::Output);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::WriteHistogram.to_string(), "write-histogram");
        assert_eq!(Stage::Decode.to_string(), "decode");
    }
}
