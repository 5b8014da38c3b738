//! Packed 15-bit color
//!
//! The display stores one u16 per pixel: red in bits 0-4, green in bits 5-9,
//! blue in bits 10-14, bit 15 unused. Channels are masked, not saturated -
//! out-of-range inputs silently truncate to their low 5 bits.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A packed BGR555 pixel value
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Pod, Zeroable,
)]
#[repr(transparent)]
pub struct Color(pub u16);

impl Color {
    /// Pack three channel intensities into one pixel value
    ///
    /// Only the low 5 bits of each channel are used; callers must not rely
    /// on rounding.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((red as u16 & 0x1F) | (green as u16 & 0x1F) << 5 | (blue as u16 & 0x1F) << 10)
    }

    /// Red channel intensity in [0, 31]
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Green channel intensity in [0, 31]
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 5 & 0x1F) as u8
    }

    /// Blue channel intensity in [0, 31]
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> 10 & 0x1F) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pack_in_range() {
        assert_eq!(Color::rgb(31, 31, 31).0, 0x7FFF);
        assert_eq!(Color::rgb(0, 0, 0).0, 0);
        assert_eq!(Color::rgb(31, 0, 15).0, 31 | 15 << 10);
        assert_eq!(Color::rgb(15, 0, 31).0, 15 | 31 << 10);
    }

    #[test]
    fn test_pack_masks_out_of_range() {
        // 32 masks to 0, 255 masks to 31
        assert_eq!(Color::rgb(32, 32, 32).0, 0);
        assert_eq!(Color::rgb(255, 255, 255), Color::rgb(31, 31, 31));
    }

    #[test]
    fn test_channel_read_back() {
        let c = Color::rgb(7, 21, 30);
        assert_eq!(c.red(), 7);
        assert_eq!(c.green(), 21);
        assert_eq!(c.blue(), 30);
    }

    #[test]
    fn test_bit_15_stays_clear() {
        for v in [0u8, 1, 16, 31, 63, 128, 255] {
            assert_eq!(Color::rgb(v, v, v).0 & 0x8000, 0);
        }
    }

    proptest! {
        #[test]
        fn pack_matches_reference(r: u8, g: u8, b: u8) {
            let expected =
                (r as u16 & 31) | (g as u16 & 31) << 5 | (b as u16 & 31) << 10;
            prop_assert_eq!(Color::rgb(r, g, b).0, expected);
        }
    }
}
