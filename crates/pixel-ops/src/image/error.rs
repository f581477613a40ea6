//! Error type for pixel buffer construction.

use std::collections::TryReserveError;
use std::fmt;

/// Error type for [`ImageBuffer`](super::ImageBuffer) construction and copying.
///
/// `Allocation` is the only resource failure: the dimensions were well
/// formed but the pixel storage could not be obtained. The remaining
/// variants describe malformed input, including dimensions too large to
/// address at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// `width * height` (or its byte size) overflows `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Pixel storage could not be reserved
    Allocation(TryReserveError),
    /// Supplied pixel count does not match `width * height`
    LengthMismatch {
        /// Expected number of pixels
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
    /// Raw byte input holds fewer than `width * height` complete RGB records
    Truncated {
        /// Expected number of pixel records
        expected: usize,
        /// Number of complete records available
        actual: usize,
    },
}

impl BufferError {
    /// Returns true for failures to obtain memory rather than malformed input.
    pub fn is_resource(&self) -> bool {
        matches!(self, BufferError::Allocation(_))
    }
}

impl From<TryReserveError> for BufferError {
    fn from(err: TryReserveError) -> Self {
        BufferError::Allocation(err)
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be positive, got {}x{}", width, height)
            }
            BufferError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
            BufferError::Allocation(err) => {
                write!(f, "failed to allocate pixel buffer: {}", err)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel count mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            BufferError::Truncated { expected, actual } => {
                write!(
                    f,
                    "truncated pixel data: expected {} pixels, found {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Allocation(err) => Some(err),
            _ => None,
        }
    }
}
