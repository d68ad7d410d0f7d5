//! 16:9 canvas sizing.

/// Width and height of the output canvas.
///
/// The canvas is always the smallest 16:9 rectangle (width = 16k,
/// height = 9k for a positive integer k) whose area holds the full color
/// list. Excess pixels are filled with black by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Canvas width in pixels, always a multiple of 16.
    pub width: u32,
    /// Canvas height in pixels, always a multiple of 9.
    pub height: u32,
}

impl CanvasSize {
    /// Compute the smallest 16:9 canvas that holds `n_colors` pixels.
    ///
    /// Seeds k with `ceil(sqrt(n / 144))` and then verifies minimality in
    /// integer arithmetic, so float rounding near perfect squares cannot
    /// produce an off-by-one canvas.
    pub fn for_color_count(n_colors: usize) -> Self {
        let n = n_colors as u64;
        let mut k = ((n_colors as f64) / 144.0).sqrt().ceil() as u64;
        k = k.max(1);
        while 144 * k * k < n {
            k += 1;
        }
        while k > 1 && 144 * (k - 1) * (k - 1) >= n {
            k -= 1;
        }
        Self {
            width: (16 * k) as u32,
            height: (9 * k) as u32,
        }
    }

    /// Total number of pixels on the canvas.
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
