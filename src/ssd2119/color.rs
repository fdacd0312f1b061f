//! 16 bit 5-6-5 colors as the panel stores them

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};

/// Pack 8 bit channels into `RRRRR GGGGGG BBBBB`
///
/// The low bits are dropped, not rounded.
pub const fn pixel_rgb(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3)
}

/// Packed value of an [`embedded_graphics`] color
pub fn raw(color: Rgb565) -> u16 {
    color.into_storage()
}

/// [`embedded_graphics`] color of a packed value
pub fn rgb565(packed: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(packed))
}

/// Colors used by the demo screens, already packed
pub struct Color;

#[allow(missing_docs)]
impl Color {
    pub const BLACK: u16 = pixel_rgb(0x00, 0x00, 0x00);
    pub const WHITE: u16 = pixel_rgb(0xFF, 0xFF, 0xFF);
    pub const RED: u16 = pixel_rgb(0xFF, 0x00, 0x00);
    pub const GREEN: u16 = pixel_rgb(0x00, 0xFF, 0x00);
    pub const BLUE: u16 = pixel_rgb(0x00, 0x00, 0xFF);
    pub const YELLOW: u16 = pixel_rgb(0xFF, 0xFF, 0x00);
    pub const MID_GREY: u16 = pixel_rgb(0x80, 0x80, 0x80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(pixel_rgb(0xFF, 0xFF, 0xFF), 0xFFFF);
        assert_eq!(pixel_rgb(0, 0, 0), 0x0000);
    }

    #[test]
    fn mid_grey_truncates() {
        assert_eq!(pixel_rgb(0x80, 0x80, 0x80), 0x8410);
        // 0x87 still has the same top bits, nothing rounds up
        assert_eq!(pixel_rgb(0x87, 0x83, 0x87), 0x8410);
    }

    #[test]
    fn primaries_land_in_their_fields() {
        assert_eq!(Color::RED, 0xF800);
        assert_eq!(Color::GREEN, 0x07E0);
        assert_eq!(Color::BLUE, 0x001F);
    }

    #[test]
    fn matches_embedded_graphics_layout() {
        for (r, g, b) in [(0x12, 0x34, 0x56), (0xF0, 0x0F, 0xAA), (0x80, 0x80, 0x80)] {
            let color = Rgb565::new(r >> 3, g >> 2, b >> 3);
            assert_eq!(raw(color), pixel_rgb(r, g, b));
        }
    }

    #[test]
    fn packed_value_converts_back() {
        assert_eq!(rgb565(0x8410), Rgb565::new(0x10, 0x20, 0x10));
        assert_eq!(raw(rgb565(Color::YELLOW)), 0xFFE0);
    }
}
