//! BT.709 luminance (grayscale) conversion.
//!
//! Each pixel is replaced by a channel-equal triple holding its luma:
//!
//! ```text
//! Y = round(0.2126 R + 0.7152 G + 0.0722 B)
//! ```
//!
//! The weights are the ITU-R BT.709 luma coefficients applied directly to
//! the stored 8-bit values (no gamma decoding). They sum to 1, so a gray
//! pixel maps to itself and the conversion is idempotent.

use crate::image::{ImageBuffer, Rgb};

// BT.709 weights
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Luma of a single sample.
///
/// # Example
/// ```
/// use pixel_ops::{luma, Rgb};
/// assert_eq!(luma(Rgb::gray(100)), 100);
/// assert_eq!(luma(Rgb::new(255, 0, 0)), 54);
/// ```
#[inline]
pub fn luma(px: Rgb) -> u8 {
    let y = LUMA_R * px.r as f32 + LUMA_G * px.g as f32 + LUMA_B * px.b as f32;
    round_non_negative(y).clamp(0.0, 255.0) as u8
}

/// Convert every pixel of `image` to its luma, in place.
///
/// All three channels of each pixel receive the same value, so the buffer
/// keeps its RGB layout.
pub fn to_grayscale(image: &mut ImageBuffer) {
    for px in image.pixels_mut() {
        *px = Rgb::gray(luma(*px));
    }
}

// Add-half-then-floor. Only equals round-half-up for non-negative inputs,
// which weighted sums of unsigned channels always are.
#[inline]
fn round_non_negative(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primaries() {
        // 0.2126 * 255 = 54.213
        assert_eq!(luma(Rgb::new(255, 0, 0)), 54);
        // 0.7152 * 255 = 182.376
        assert_eq!(luma(Rgb::new(0, 255, 0)), 182);
        // 0.0722 * 255 = 18.411
        assert_eq!(luma(Rgb::new(0, 0, 255)), 18);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(luma(Rgb::gray(0)), 0);
        assert_eq!(luma(Rgb::gray(255)), 255);
    }

    #[test]
    fn test_rounds_half_up() {
        // 0.0722 * 7 = 0.5054 -> 1
        assert_eq!(luma(Rgb::new(0, 0, 7)), 1);
        // 0.0722 * 6 = 0.4332 -> 0
        assert_eq!(luma(Rgb::new(0, 0, 6)), 0);
    }

    #[test]
    fn test_gray_is_fixed_point() {
        for v in 0..=255u8 {
            assert_eq!(luma(Rgb::gray(v)), v, "gray {} drifted", v);
        }
    }

    #[test]
    fn test_to_grayscale_sets_equal_channels() {
        let pixels = vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(12, 200, 99),
        ];
        let mut image = ImageBuffer::from_pixels(2, 2, pixels).unwrap();

        to_grayscale(&mut image);

        assert!(image.pixels().iter().all(|p| p.is_gray()));
        assert_eq!(image.get(0, 0), Some(Rgb::gray(54)));
        assert_eq!(image.get(1, 0), Some(Rgb::gray(182)));
        assert_eq!(image.get(0, 1), Some(Rgb::gray(18)));
    }
}
