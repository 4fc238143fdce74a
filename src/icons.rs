//! 1-bpp icon bitmaps and tinted drawing.
//!
//! Icons are stored as monochrome bitmaps (MSB-first, row-padded to whole
//! bytes) and painted at draw time: set bits become the tint color, clear
//! bits stay transparent. This replaces a pre-tinted image copy - changing
//! the tint is just a color swap, no pixel data is touched.
//!
//! Scaling is nearest-neighbour from the source bitmap into the target
//! rectangle, so one 16x16 source serves any configured icon size.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::error::ConfigError;

/// A monochrome icon bitmap.
///
/// `data` holds `height` rows of `(width + 7) / 8` bytes each, MSB first.
#[derive(Debug)]
pub struct IconBitmap {
    pub width: u32,
    pub height: u32,
    pub data: &'static [u8],
}

impl IconBitmap {
    /// Bytes per bitmap row.
    const fn stride(&self) -> usize {
        ((self.width + 7) / 8) as usize
    }

    /// Check that the bitmap describes at least one pixel and that `data`
    /// covers every row. Widget construction fails on a bad bitmap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::BadIcon("zero size"));
        }
        if self.data.len() < self.stride() * self.height as usize {
            return Err(ConfigError::BadIcon("data too short"));
        }
        Ok(())
    }

    /// Whether the source pixel at (x, y) is set. Out-of-range coordinates
    /// and rows past the end of `data` read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data
            .get(y as usize * self.stride() + (x / 8) as usize)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }

    /// Paint the bitmap into `rect`, scaled nearest-neighbour, with set
    /// bits in `tint` and clear bits left untouched.
    pub fn draw_tinted<D>(&self, display: &mut D, rect: Rectangle, tint: Rgb565) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Size { width: dw, height: dh } = rect.size;
        if dw == 0 || dh == 0 {
            return Ok(());
        }
        let origin = rect.top_left;
        let (sw, sh) = (self.width, self.height);
        display.draw_iter((0..dh).flat_map(move |ty| {
            let sy = ty * sh / dh;
            (0..dw).filter_map(move |tx| {
                let sx = tx * sw / dw;
                self.pixel(sx, sy)
                    .then_some(Pixel(Point::new(origin.x + tx as i32, origin.y + ty as i32), tint))
            })
        }))
    }
}

// =============================================================================
// Icon Artwork (16x16, 2 bytes per row)
// =============================================================================

/// Client icon, outline variant: head over shoulders. Shown while the
/// client control is inactive.
pub static CLIENT: IconBitmap = IconBitmap {
    width: 16,
    height: 16,
    data: &[
        0b0000_0000, 0b0000_0000,
        0b0000_0011, 0b1100_0000,
        0b0000_0100, 0b0010_0000,
        0b0000_0100, 0b0010_0000,
        0b0000_0100, 0b0010_0000,
        0b0000_0011, 0b1100_0000,
        0b0000_0000, 0b0000_0000,
        0b0000_0111, 0b1110_0000,
        0b0001_1000, 0b0001_1000,
        0b0010_0000, 0b0000_0100,
        0b0010_0000, 0b0000_0100,
        0b0100_0000, 0b0000_0010,
        0b0100_0000, 0b0000_0010,
        0b0100_0000, 0b0000_0010,
        0b0111_1111, 0b1111_1110,
        0b0000_0000, 0b0000_0000,
    ],
};

/// Client icon, filled variant. Swapped in while the client control is
/// active, mirroring the per-state icon resources of the original sample.
pub static CLIENT_FILLED: IconBitmap = IconBitmap {
    width: 16,
    height: 16,
    data: &[
        0b0000_0000, 0b0000_0000,
        0b0000_0011, 0b1100_0000,
        0b0000_0111, 0b1110_0000,
        0b0000_0111, 0b1110_0000,
        0b0000_0111, 0b1110_0000,
        0b0000_0011, 0b1100_0000,
        0b0000_0000, 0b0000_0000,
        0b0000_0111, 0b1110_0000,
        0b0001_1111, 0b1111_1000,
        0b0011_1111, 0b1111_1100,
        0b0011_1111, 0b1111_1100,
        0b0111_1111, 0b1111_1110,
        0b0111_1111, 0b1111_1110,
        0b0111_1111, 0b1111_1110,
        0b0111_1111, 0b1111_1110,
        0b0000_0000, 0b0000_0000,
    ],
};

/// Sale icon: percent sign.
pub static SALE: IconBitmap = IconBitmap {
    width: 16,
    height: 16,
    data: &[
        0b0000_0000, 0b0000_0000,
        0b0110_0000, 0b0000_0010,
        0b1001_0000, 0b0000_0100,
        0b1001_0000, 0b0000_1000,
        0b0110_0000, 0b0001_0000,
        0b0000_0000, 0b0010_0000,
        0b0000_0000, 0b0100_0000,
        0b0000_0000, 0b1000_0000,
        0b0000_0001, 0b0000_0000,
        0b0000_0010, 0b0000_0000,
        0b0000_0100, 0b0000_0000,
        0b0000_1000, 0b0000_0110,
        0b0001_0000, 0b0000_1001,
        0b0010_0000, 0b0000_1001,
        0b0100_0000, 0b0000_0110,
        0b0000_0000, 0b0000_0000,
    ],
};

/// Bill icon: receipt with item lines and a torn bottom edge.
pub static BILL: IconBitmap = IconBitmap {
    width: 16,
    height: 16,
    data: &[
        0b0001_1111, 0b1111_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0111, 0b1110_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0111, 0b1110_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0111, 0b1110_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0111, 0b1000_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0111, 0b1110_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_0000, 0b0000_1000,
        0b0001_1011, 0b0110_1000,
        0b0001_0100, 0b1001_1000,
        0b0000_0000, 0b0000_0000,
    ],
};

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::BLOOD_ORANGE;

    #[test]
    fn test_pixel_indexing() {
        // CLIENT row 1 is 0b0000_0011 0b1100_0000: bits 6..=9 set
        assert!(!CLIENT.pixel(5, 1));
        assert!(CLIENT.pixel(6, 1));
        assert!(CLIENT.pixel(9, 1));
        assert!(!CLIENT.pixel(10, 1));
    }

    #[test]
    fn test_pixel_out_of_range_is_unset() {
        assert!(!CLIENT.pixel(16, 0));
        assert!(!CLIENT.pixel(0, 16));
    }

    #[test]
    fn test_builtin_icons_validate() {
        for icon in [&CLIENT, &CLIENT_FILLED, &SALE, &BILL] {
            assert!(icon.validate().is_ok(), "builtin icon bitmap must be well-formed");
        }
    }

    #[test]
    fn test_validate_rejects_short_data() {
        let bad = IconBitmap { width: 16, height: 16, data: &[0u8; 8] };
        assert_eq!(bad.validate(), Err(ConfigError::BadIcon("data too short")));
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let bad = IconBitmap { width: 0, height: 16, data: &[] };
        assert_eq!(bad.validate(), Err(ConfigError::BadIcon("zero size")));
    }

    #[test]
    fn test_draw_tinted_paints_set_bits_only() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let rect = Rectangle::new(Point::zero(), Size::new(16, 16));
        CLIENT.draw_tinted(&mut display, rect, BLOOD_ORANGE).unwrap();

        // Set bit is painted with the tint, clear bit is untouched
        assert_eq!(display.get_pixel(Point::new(6, 1)), Some(BLOOD_ORANGE));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_draw_tinted_scales_to_rect() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        // 2x scale: source pixel (6, 1) covers target (12..14, 2..4)
        let rect = Rectangle::new(Point::zero(), Size::new(32, 32));
        CLIENT.draw_tinted(&mut display, rect, BLOOD_ORANGE).unwrap();
        assert_eq!(display.get_pixel(Point::new(12, 2)), Some(BLOOD_ORANGE));
        assert_eq!(display.get_pixel(Point::new(13, 3)), Some(BLOOD_ORANGE));
    }

    #[test]
    fn test_truncated_data_skips_missing_rows() {
        // Only row 0 is backed by data; rows past the end read as unset
        let truncated = IconBitmap { width: 16, height: 16, data: &[0xFF, 0xFF] };
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let rect = Rectangle::new(Point::zero(), Size::new(16, 16));
        truncated.draw_tinted(&mut display, rect, BLOOD_ORANGE).unwrap();
        assert_eq!(display.affected_area().size, Size::new(16, 1));
    }

    #[test]
    fn test_draw_tinted_empty_rect_is_noop() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let rect = Rectangle::new(Point::zero(), Size::zero());
        CLIENT.draw_tinted(&mut display, rect, BLOOD_ORANGE).unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }
}
