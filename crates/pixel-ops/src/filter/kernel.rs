//! 3x3 convolution kernel definitions.

/// A 3x3 convolution kernel with signed integer weights.
///
/// `weights[dy + 1][dx + 1]` is applied to the neighbor at offset
/// `(dx, dy)` from the pixel being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Row-major weights, centre at `[1][1]`.
    pub weights: [[i32; 3]; 3],
}

impl Kernel {
    /// Four-neighbour sharpening kernel.
    ///
    /// ```text
    ///     0  -1   0
    ///    -1   5  -1
    ///     0  -1   0
    /// ```
    ///
    /// Weights sum to 1, so flat regions pass through unchanged.
    pub const SHARPEN: Kernel = Kernel {
        weights: [[0, -1, 0], [-1, 5, -1], [0, -1, 0]],
    };

    /// Sum of all weights.
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }

    /// Weight applied to the neighbour at `(dx, dy)`, each in `-1..=1`.
    #[inline]
    pub fn weight(&self, dx: isize, dy: isize) -> i32 {
        self.weights[(dy + 1) as usize][(dx + 1) as usize]
    }
}
