//! BMP encoding for the generated gradient.
//!
//! Emits a 24-bit uncompressed bitmap: 14-byte file header, 40-byte info
//! header with a negative height field (top-down row order), then row-major
//! pixel data in BGR byte order with each row zero-padded to a multiple of
//! 4 bytes. Canvas pixels beyond the color list are black.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Color;

/// Total header size: 14-byte file header + 40-byte info header.
pub const HEADER_LEN: usize = 54;

/// Size of the BITMAPINFOHEADER variant we emit.
const INFO_HEADER_LEN: u32 = 40;

/// Horizontal and vertical resolution, pixels per metre (72 DPI).
const RESOLUTION_PPM: i32 = 2835;

/// Errors that can occur while producing the bitmap.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// More colors than canvas pixels
    #[error("Color list does not fit canvas: {count} colors for {width}x{height} pixels")]
    ColorsExceedCanvas {
        count: usize,
        width: u32,
        height: u32,
    },

    /// Writing the output file failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encode a color list onto a canvas as BMP bytes.
///
/// Colors fill the canvas in row-major order from the top-left; remaining
/// pixels are black. Returns an error when a dimension is zero or the color
/// list is larger than the canvas.
pub fn encode_bmp(width: u32, height: u32, colors: &[Color]) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let pixel_count = (width as usize) * (height as usize);
    if colors.len() > pixel_count {
        return Err(EncodeError::ColorsExceedCanvas {
            count: colors.len(),
            width,
            height,
        });
    }

    // Rows are padded to a multiple of 4 bytes
    let row_padding = (4 - (width as usize * 3) % 4) % 4;
    let row_len = width as usize * 3 + row_padding;
    let file_size = HEADER_LEN + row_len * height as usize;

    let mut out = Vec::with_capacity(file_size);

    // File header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0, 0, 0, 0]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // pixel data offset

    // Info header; negative height marks the bitmap as top-down
    out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(-(height as i32)).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // color planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, no compression
    out.extend_from_slice(&((file_size - HEADER_LEN) as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // palette size, none
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors, all

    // Pixel data, top-down, BGR
    let mut color_index = 0;
    for _ in 0..height {
        for _ in 0..width {
            match colors.get(color_index) {
                Some(c) => out.extend_from_slice(&[c.b, c.g, c.r]),
                None => out.extend_from_slice(&[0, 0, 0]),
            }
            color_index += 1;
        }
        out.extend_from_slice(&[0, 0, 0, 0][..row_padding]);
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}

/// Encode and write the bitmap to `path` in one scoped operation.
///
/// The file handle is opened, written, and closed inside `fs::write`;
/// I/O failures carry the destination path.
pub fn write_bmp(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    colors: &[Color],
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_bmp(width, height, colors)?;
    std::fs::write(path, bytes).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_colors, CanvasSize};

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn read_i32(bytes: &[u8], offset: usize) -> i32 {
        read_u32(bytes, offset) as i32
    }

    #[test]
    fn test_header_byte_exactness_step_255() {
        // step=255 -> channels in {0,255} -> 8 colors -> 16x9 canvas
        let colors = generate_colors(255);
        let size = CanvasSize::for_color_count(colors.len());
        assert_eq!((size.width, size.height), (16, 9));

        let bytes = encode_bmp(size.width, size.height, &colors).unwrap();

        // 16 * 3 = 48 bytes per row, already a multiple of 4
        let expected_size = 54 + 48 * 9;
        assert_eq!(bytes.len(), expected_size);

        // File header
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(read_u32(&bytes, 2), expected_size as u32);
        assert_eq!(read_u32(&bytes, 6), 0); // reserved
        assert_eq!(read_u32(&bytes, 10), 54); // pixel data offset

        // Info header
        assert_eq!(read_u32(&bytes, 14), 40);
        assert_eq!(read_i32(&bytes, 18), 16);
        assert_eq!(read_i32(&bytes, 22), -9); // top-down
        assert_eq!(read_u16(&bytes, 26), 1); // planes
        assert_eq!(read_u16(&bytes, 28), 24); // bits per pixel
        assert_eq!(read_u32(&bytes, 30), 0); // no compression
        assert_eq!(read_u32(&bytes, 34), 48 * 9); // image size
        assert_eq!(read_i32(&bytes, 38), 2835);
        assert_eq!(read_i32(&bytes, 42), 2835);
        assert_eq!(read_u32(&bytes, 46), 0);
        assert_eq!(read_u32(&bytes, 50), 0);
    }

    #[test]
    fn test_pixels_are_bgr_and_excess_is_black() {
        let colors = generate_colors(255);
        let bytes = encode_bmp(16, 9, &colors).unwrap();

        // First color is black, second is pure red stored as B,G,R
        assert_eq!(&bytes[54..57], &[0, 0, 0]);
        assert_eq!(&bytes[57..60], &[0, 0, 255]);
        // Eighth color is white
        assert_eq!(&bytes[54 + 7 * 3..54 + 8 * 3], &[255, 255, 255]);
        // Everything after the 8 colors is black fill
        assert!(bytes[54 + 8 * 3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_row_padding_bytes_are_zero() {
        // width=2 -> 6 pixel bytes per row -> 2 padding bytes
        let colors = vec![Color::new(1, 2, 3), Color::new(4, 5, 6)];
        let bytes = encode_bmp(2, 1, &colors).unwrap();

        assert_eq!(bytes.len(), 54 + 8);
        assert_eq!(&bytes[54..57], &[3, 2, 1]);
        assert_eq!(&bytes[57..60], &[6, 5, 4]);
        assert_eq!(&bytes[60..62], &[0, 0]);
    }

    #[test]
    fn test_multi_row_layout() {
        // width=1 -> 3 pixel bytes + 1 padding byte per row
        let colors = vec![Color::new(10, 20, 30), Color::new(40, 50, 60)];
        let bytes = encode_bmp(1, 3, &colors).unwrap();

        assert_eq!(bytes.len(), 54 + 4 * 3);
        assert_eq!(&bytes[54..58], &[30, 20, 10, 0]);
        assert_eq!(&bytes[58..62], &[60, 50, 40, 0]);
        assert_eq!(&bytes[62..66], &[0, 0, 0, 0]); // black row
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let result = encode_bmp(0, 9, &[]);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let result = encode_bmp(16, 0, &[]);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_too_many_colors_rejected() {
        let colors = vec![Color::BLACK; 145];
        let result = encode_bmp(16, 9, &colors);
        assert!(matches!(result, Err(EncodeError::ColorsExceedCanvas { .. })));
    }

    #[test]
    fn test_write_bmp_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splash.bmp");
        let colors = generate_colors(255);

        write_bmp(&path, 16, 9, &colors).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        let in_memory = encode_bmp(16, 9, &colors).unwrap();
        assert_eq!(on_disk, in_memory);
    }

    #[test]
    fn test_write_bmp_unwritable_path_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("splash.bmp");

        let result = write_bmp(&path, 16, 9, &[]);
        assert!(matches!(result, Err(EncodeError::Io { .. })));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn color_strategy() -> impl Strategy<Value = Color> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
    }

    proptest! {
        /// Property: output length always matches the header's file size
        /// field and the declared row layout.
        #[test]
        fn prop_file_size_matches_layout(
            width in 1u32..=64,
            height in 1u32..=64,
        ) {
            let bytes = encode_bmp(width, height, &[]).unwrap();
            let row_padding = (4 - (width as usize * 3) % 4) % 4;
            let expected = 54 + (width as usize * 3 + row_padding) * height as usize;
            prop_assert_eq!(bytes.len(), expected);
            prop_assert_eq!(
                u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
                expected as u32
            );
        }

        /// Property: every stored pixel triple is the BGR reversal of the
        /// input color at that index.
        #[test]
        fn prop_pixels_stored_bgr(
            colors in prop::collection::vec(color_strategy(), 1..=100),
        ) {
            // A tall 1-wide canvas keeps indexing simple: one pixel per row
            let height = colors.len() as u32;
            let bytes = encode_bmp(1, height, &colors).unwrap();

            for (i, c) in colors.iter().enumerate() {
                let offset = 54 + i * 4; // 3 pixel bytes + 1 padding byte
                prop_assert_eq!(&bytes[offset..offset + 3], &[c.b, c.g, c.r]);
                prop_assert_eq!(bytes[offset + 3], 0);
            }
        }

        /// Property: encoding is deterministic.
        #[test]
        fn prop_deterministic(
            colors in prop::collection::vec(color_strategy(), 0..=50),
            extra_rows in 0u32..=3,
        ) {
            let height = colors.len() as u32 + extra_rows + 1;
            let a = encode_bmp(1, height, &colors).unwrap();
            let b = encode_bmp(1, height, &colors).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
