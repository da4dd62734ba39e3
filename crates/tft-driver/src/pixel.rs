//! RGB565 wire expansion
//!
//! Drivers keep pixels as RGB565 words. Chips that cannot take 16-bit pixels
//! on the current bus receive three bytes per pixel instead.

// Every narrowing below operates on a value already masked to 8 bits.
#![allow(clippy::cast_possible_truncation)]

use tft_specs::PixelFormat;

/// RGB565 to RGB666, one byte per channel with the payload in the top bits.
///
/// `0xF800` (pure red) becomes `[0xF8, 0x00, 0x00]`.
pub const fn rgb565_to_rgb666(word: u16) -> [u8; 3] {
    [
        ((word >> 8) & 0xF8) as u8,
        ((word >> 3) & 0xFC) as u8,
        ((word << 3) & 0xF8) as u8,
    ]
}

/// RGB565 to RGB888 with the high bits replicated into the low bits, so
/// full-scale channels map to `0xFF`.
pub const fn rgb565_to_rgb888(word: u16) -> [u8; 3] {
    let r = (word >> 11) & 0x1F;
    let g = (word >> 5) & 0x3F;
    let b = word & 0x1F;
    [
        ((r << 3) | (r >> 2)) as u8,
        ((g << 2) | (g >> 4)) as u8,
        ((b << 3) | (b >> 2)) as u8,
    ]
}

/// Three read-back channel bytes (top-aligned) to RGB565.
pub const fn rgb666_to_rgb565(rgb: [u8; 3]) -> u16 {
    let [r, g, b] = rgb;
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Wire bytes of one RGB565 pixel in `format`.
///
/// Returns the byte buffer and the number of leading bytes in use.
pub(crate) const fn encode(word: u16, format: PixelFormat) -> ([u8; 3], usize) {
    match format {
        PixelFormat::Rgb565 => {
            let [hi, lo] = word.to_be_bytes();
            ([hi, lo, 0], 2)
        }
        PixelFormat::Rgb666 => (rgb565_to_rgb666(word), 3),
        PixelFormat::Rgb888 => (rgb565_to_rgb888(word), 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_primary_colors_666() {
        assert_eq!(rgb565_to_rgb666(0xF800), [0xF8, 0x00, 0x00]);
        assert_eq!(rgb565_to_rgb666(0x07E0), [0x00, 0xFC, 0x00]);
        assert_eq!(rgb565_to_rgb666(0x001F), [0x00, 0x00, 0xF8]);
        assert_eq!(rgb565_to_rgb666(0xFFFF), [0xF8, 0xFC, 0xF8]);
    }

    #[test]
    fn test_888_reaches_full_scale() {
        assert_eq!(rgb565_to_rgb888(0xFFFF), [0xFF, 0xFF, 0xFF]);
        assert_eq!(rgb565_to_rgb888(0x0000), [0x00, 0x00, 0x00]);
        assert_eq!(rgb565_to_rgb888(0xF800), [0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_lengths() {
        assert_eq!(encode(0x1234, PixelFormat::Rgb565), ([0x12, 0x34, 0], 2));
        assert_eq!(encode(0xF800, PixelFormat::Rgb666).1, 3);
    }

    proptest! {
        #[test]
        fn readback_recovers_565(word in any::<u16>()) {
            prop_assert_eq!(rgb666_to_rgb565(rgb565_to_rgb666(word)), word);
            prop_assert_eq!(rgb666_to_rgb565(rgb565_to_rgb888(word)), word);
        }
    }
}
