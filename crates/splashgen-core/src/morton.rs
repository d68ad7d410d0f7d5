//! Morton (Z-order) keys for RGB colors.
//!
//! Interleaving the bits of the three channels produces a key whose ordering
//! groups perceptually similar colors together, which is what makes the
//! generated gradient look smooth instead of banded.

/// Masks for the bit-spreading steps. Each step doubles the gap between the
/// surviving bits until every source bit has two zero bits after it.
const SPREAD_MASK_SHIFT_16: u32 = 0xFF00_00FF;
const SPREAD_MASK_SHIFT_8: u32 = 0x0F00_F00F;
const SPREAD_MASK_SHIFT_4: u32 = 0xC30C_30C3;
const SPREAD_MASK_SHIFT_2: u32 = 0x4924_9249;

/// Spread the bits of an 8-bit value so that bit i of the input lands at
/// bit 3*i of the output.
#[inline]
pub fn spread_bits(value: u8) -> u32 {
    let mut x = value as u32;
    x = (x | (x << 16)) & SPREAD_MASK_SHIFT_16;
    x = (x | (x << 8)) & SPREAD_MASK_SHIFT_8;
    x = (x | (x << 4)) & SPREAD_MASK_SHIFT_4;
    x = (x | (x << 2)) & SPREAD_MASK_SHIFT_2;
    x
}

/// Compute the 24-bit Morton key for an RGB color.
///
/// Red occupies the least-significant bit of each 3-bit group and blue the
/// most significant, so two colors that differ in any channel always get
/// different keys.
#[inline]
pub fn morton_key(r: u8, g: u8, b: u8) -> u32 {
    spread_bits(r) | (spread_bits(g) << 1) | (spread_bits(b) << 2)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
