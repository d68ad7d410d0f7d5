//! Step sampling of the 24-bit color space.
//!
//! Instead of emitting every single 24-bit color (which makes a huge image),
//! each channel is sampled with a stride, and the full Cartesian product of
//! the sampled values is ordered along the Morton curve.

use crate::Color;

/// Generate the sampled channel values for the given step.
///
/// The sequence is `{0, step, 2*step, ...}` up to 255, with 255 appended when
/// the stride does not land on it, so the full channel range is always
/// covered. A step of 0 is clamped to 1.
///
/// The result is strictly increasing with no duplicates: 255 is only appended
/// when the last stride value is not already 255.
pub fn channel_values(step: u8) -> Vec<u8> {
    let step = step.max(1);
    let mut values: Vec<u8> = (0..=255u8).step_by(step as usize).collect();
    if values.last() != Some(&255) {
        values.push(255);
    }
    values
}

/// Generate the full sampled color list, sorted ascending by Morton key.
///
/// The list is the Cartesian product of three `channel_values(step)`
/// sequences, so its length is the cube of the per-channel count. Morton keys
/// are unique per color, which makes the resulting order a strict total
/// order.
pub fn generate_colors(step: u8) -> Vec<Color> {
    let values = channel_values(step);
    let mut colors = Vec::with_capacity(values.len().pow(3));

    for &r in &values {
        for &g in &values {
            for &b in &values {
                colors.push(Color::new(r, g, b));
            }
        }
    }

    colors.sort_by_key(|c| c.key());
    colors
}


// ============================================================================
// Property-Based Tests
// ============================================================================
