//! Owned row-major RGB pixel buffer.

use super::error::BufferError;
use super::rgb::Rgb;

/// A width x height grid of 8-bit RGB samples in row-major order.
///
/// The buffer always holds exactly `width * height` pixels and both
/// dimensions are positive; every constructor enforces this. Pixel storage
/// is reserved fallibly so an oversized image surfaces as
/// [`BufferError::Allocation`] instead of aborting the process.
///
/// # Example
///
/// ```
/// use pixel_ops::{ImageBuffer, Rgb};
///
/// let image = ImageBuffer::new(3, 2, Rgb::gray(100)).unwrap();
/// assert_eq!(image.len(), 6);
/// assert_eq!(image.index(2, 1), 5);
/// assert_eq!(image.get(2, 1), Some(Rgb::gray(100)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a buffer with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Result<Self, BufferError> {
        let count = pixel_count(width, height)?;
        let mut pixels = reserve(count)?;
        pixels.resize(count, fill);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing pixel vector.
    ///
    /// Fails with [`BufferError::LengthMismatch`] unless
    /// `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let count = pixel_count(width, height)?;
        if pixels.len() != count {
            return Err(BufferError::LengthMismatch {
                expected: count,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// Exactly `width * height` records are consumed; trailing bytes are
    /// ignored. Fewer complete records than that is
    /// [`BufferError::Truncated`].
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        let count = pixel_count(width, height)?;
        let available = bytes.len() / 3;
        if available < count {
            return Err(BufferError::Truncated {
                expected: count,
                actual: available,
            });
        }

        let mut pixels = reserve(count)?;
        pixels.extend(
            bytes
                .chunks_exact(3)
                .take(count)
                .map(|c| Rgb::from([c[0], c[1], c[2]])),
        );
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Packed `[R, G, B, ...]` bytes in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            raw.extend_from_slice(&px.to_bytes());
        }
        raw
    }

    /// Copy the buffer, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        let mut pixels = reserve(self.pixels.len())?;
        pixels.extend_from_slice(&self.pixels);
        Ok(Self {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; dimensions are positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to the pixels. The length cannot change through a slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Row-major offset of `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// True for pixels on the outermost ring of the image.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }
}

/// Validate dimensions and return `width * height`.
///
/// The byte size (`* 3`) must also fit in `usize` so raw encodings of the
/// buffer never overflow. Overflow is a property of the dimensions, not of
/// available memory, so it is [`BufferError::TooLarge`] rather than
/// [`BufferError::Allocation`].
fn pixel_count(width: usize, height: usize) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .filter(|count| count.checked_mul(3).is_some())
        .ok_or(BufferError::TooLarge { width, height })
}

fn reserve(count: usize) -> Result<Vec<Rgb>, BufferError> {
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(count)?;
    Ok(pixels)
}
