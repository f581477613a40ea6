//! 3x3 convolution with an untouched one-pixel border.

use super::kernel::Kernel;
use crate::image::{BufferError, ImageBuffer, Rgb};

/// Sharpen an image with [`Kernel::SHARPEN`].
///
/// Returns a new buffer of identical dimensions; `image` is not modified.
///
/// - Interior pixels (`1 <= x <= width-2`, `1 <= y <= height-2`) are
///   recomputed per channel and saturated to `0..=255`.
/// - Border pixels keep their original values. There is no padding or
///   reflection.
/// - Every sum reads from `image`, never from already-filtered output.
///
/// Images narrower or shorter than 3 pixels have no interior and come back
/// unchanged. The only failure is allocating the output buffer.
///
/// # Example
///
/// ```
/// use pixel_ops::{sharpen, ImageBuffer, Rgb};
///
/// let flat = ImageBuffer::new(4, 4, Rgb::gray(100)).unwrap();
/// let sharpened = sharpen(&flat).unwrap();
/// assert_eq!(sharpened, flat);
/// ```
pub fn sharpen(image: &ImageBuffer) -> Result<ImageBuffer, BufferError> {
    convolve(image, &Kernel::SHARPEN)
}

pub(crate) fn convolve(image: &ImageBuffer, kernel: &Kernel) -> Result<ImageBuffer, BufferError> {
    let mut output = image.try_clone()?;
    let width = image.width();
    let height = image.height();
    let source = image.pixels();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut sum = [0i32; 3];
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    let weight = kernel.weight(dx, dy);
                    if weight == 0 {
                        continue;
                    }
                    let nx = (x as isize + dx) as usize;
                    let ny = (y as isize + dy) as usize;
                    let px = source[image.index(nx, ny)];
                    sum[0] += px.r as i32 * weight;
                    sum[1] += px.g as i32 * weight;
                    sum[2] += px.b as i32 * weight;
                }
            }
            let idx = output.index(x, y);
            output.pixels_mut()[idx] = Rgb::new(saturate(sum[0]), saturate(sum[1]), saturate(sum[2]));
        }
    }

    Ok(output)
}

#[inline]
fn saturate(sum: i32) -> u8 {
    sum.clamp(0, 255) as u8
}
