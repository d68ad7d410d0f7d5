//! Splashgen Core - Boot splash image generation library
//!
//! This crate provides the core functionality for splashgen: sampling the
//! 24-bit color space with a per-channel step, ordering the sampled colors
//! along a Morton (Z-order) curve, sizing a 16:9 canvas that holds them all,
//! and encoding the result as an uncompressed top-down BMP.

pub mod bmp;
pub mod canvas;
pub mod morton;
pub mod sample;

pub use bmp::{encode_bmp, write_bmp, EncodeError};
pub use canvas::CanvasSize;
pub use morton::morton_key;
pub use sample::{channel_values, generate_colors};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Black, used to fill canvas pixels beyond the color list.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Create a new color from its channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The Morton key this color sorts by.
    #[inline]
    pub fn key(self) -> u32 {
        morton_key(self.r, self.g, self.b)
    }
}
