//! 1-bpp bitmap assets for the charm scenes.
//!
//! Rows are byte-aligned with the leftmost pixel in the most significant
//! bit, the layout [`ImageRaw`] expects for `BinaryColor` data.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Size of the lady sprite.
pub const LADY_SIZE: Size = Size::new(9, 16);

/// Size of the gentleman sprite.
pub const GENTLEMAN_SIZE: Size = Size::new(7, 16);

/// Size of the small heart sprite.
pub const SMALL_HEART_SIZE: Size = Size::new(9, 8);

/// Size of the big heart sprite.
pub const BIG_HEART_SIZE: Size = Size::new(13, 11);

/// Size of the first dancing-couple frame.
pub const DANCE_FRAME_1_SIZE: Size = Size::new(39, 32);

/// Size of the second dancing-couple frame.
pub const DANCE_FRAME_2_SIZE: Size = Size::new(31, 32);

#[rustfmt::skip]
const LADY_DATA: [u8; 32] = [
    0x08, 0x00,
    0x1c, 0x00,
    0x3e, 0x00,
    0x1c, 0x00,
    0x08, 0x00,
    0x1c, 0x00,
    0x5d, 0x00,
    0x9c, 0x80,
    0x3e, 0x00,
    0x3e, 0x00,
    0x7f, 0x00,
    0x7f, 0x00,
    0xff, 0x80,
    0x14, 0x00,
    0x14, 0x00,
    0x14, 0x00,
];

#[rustfmt::skip]
const GENTLEMAN_DATA: [u8; 16] = [
    0x10,
    0x38,
    0x7c,
    0x38,
    0x10,
    0x38,
    0x7c,
    0xba,
    0x38,
    0x38,
    0x38,
    0x38,
    0x28,
    0x28,
    0x28,
    0x28,
];

#[rustfmt::skip]
const SMALL_HEART_DATA: [u8; 16] = [
    0x00, 0x00,
    0x77, 0x00,
    0x7f, 0x00,
    0x7f, 0x00,
    0x7f, 0x00,
    0x3e, 0x00,
    0x1c, 0x00,
    0x08, 0x00,
];

#[rustfmt::skip]
const BIG_HEART_DATA: [u8; 22] = [
    0x00, 0x00,
    0x18, 0xc0,
    0x7d, 0xf0,
    0x7f, 0xf0,
    0x7f, 0xf0,
    0x7f, 0xf0,
    0x3f, 0xe0,
    0x3f, 0xe0,
    0x1f, 0xc0,
    0x07, 0x00,
    0x02, 0x00,
];

#[rustfmt::skip]
const DANCE_FRAME_1_DATA: [u8; 160] = [
    0x00, 0x08, 0x00, 0x10, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x7f, 0x00, 0xfe, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x08, 0x00, 0x10, 0x00,
    0x00, 0x1c, 0x00, 0x7c, 0x00,
    0x00, 0x1c, 0x00, 0x7c, 0x00,
    0x00, 0x1c, 0x00, 0x7c, 0x00,
    0x00, 0x1f, 0xff, 0xfc, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x7c, 0x00,
    0x00, 0x7f, 0x00, 0x7c, 0x00,
    0x00, 0x7f, 0x00, 0x7c, 0x00,
    0x00, 0x7f, 0x00, 0x7c, 0x00,
    0x00, 0x7f, 0x00, 0x7c, 0x00,
    0x00, 0xff, 0x80, 0x7c, 0x00,
    0x00, 0xff, 0x80, 0x7c, 0x00,
    0x00, 0xff, 0x80, 0x7c, 0x00,
    0x00, 0xff, 0x80, 0x7c, 0x00,
    0x01, 0xff, 0xc0, 0x7c, 0x00,
    0x01, 0xff, 0xc0, 0x7c, 0x00,
    0x01, 0xff, 0xc0, 0x7c, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
    0x00, 0x22, 0x00, 0x44, 0x00,
];

#[rustfmt::skip]
const DANCE_FRAME_2_DATA: [u8; 128] = [
    0x00, 0x10, 0x10, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0xfe, 0xfe, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x10, 0x10, 0x00,
    0x00, 0x38, 0x7c, 0x00,
    0x00, 0x38, 0x7c, 0x00,
    0x00, 0x38, 0x7c, 0x00,
    0x00, 0x3f, 0xfc, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0x7c, 0x7c, 0x00,
    0x00, 0xfe, 0x7c, 0x00,
    0x00, 0xfe, 0x7c, 0x00,
    0x00, 0xfe, 0x7c, 0x00,
    0x00, 0xfe, 0x7c, 0x00,
    0x01, 0xff, 0x7c, 0x00,
    0x01, 0xff, 0x7c, 0x00,
    0x01, 0xff, 0x7c, 0x00,
    0x01, 0xff, 0x7c, 0x00,
    0x03, 0xff, 0xfc, 0x00,
    0x03, 0xff, 0xfc, 0x00,
    0x03, 0xff, 0xfc, 0x00,
    0x00, 0x44, 0x44, 0x00,
    0x00, 0x44, 0x44, 0x00,
    0x00, 0x44, 0x44, 0x00,
    0x00, 0x44, 0x44, 0x00,
    0x00, 0x44, 0x44, 0x00,
    0x00, 0x44, 0x44, 0x00,
];

/// The lady, facing the gentleman.
pub fn lady() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&LADY_DATA, LADY_SIZE.width)
}

/// The gentleman, facing the lady.
pub fn gentleman() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&GENTLEMAN_DATA, GENTLEMAN_SIZE.width)
}

/// The small heart shown in the first idle phase.
pub fn small_heart() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&SMALL_HEART_DATA, SMALL_HEART_SIZE.width)
}

/// The big heart shown in the second idle phase.
pub fn big_heart() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&BIG_HEART_DATA, BIG_HEART_SIZE.width)
}

/// First dancing-couple frame (arms raised).
pub fn dance_frame_1() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&DANCE_FRAME_1_DATA, DANCE_FRAME_1_SIZE.width)
}

/// Second dancing-couple frame (leaning in).
pub fn dance_frame_2() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&DANCE_FRAME_2_DATA, DANCE_FRAME_2_SIZE.width)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Bytes one byte-aligned 1-bpp row takes for a sprite of width `w`.
    const fn bytes_per_row(w: u32) -> usize {
        w.div_ceil(8) as usize
    }

    #[test]
    fn test_sprite_data_matches_declared_sizes() {
        assert_eq!(LADY_DATA.len(), bytes_per_row(LADY_SIZE.width) * LADY_SIZE.height as usize);
        assert_eq!(
            GENTLEMAN_DATA.len(),
            bytes_per_row(GENTLEMAN_SIZE.width) * GENTLEMAN_SIZE.height as usize
        );
        assert_eq!(
            SMALL_HEART_DATA.len(),
            bytes_per_row(SMALL_HEART_SIZE.width) * SMALL_HEART_SIZE.height as usize
        );
        assert_eq!(
            BIG_HEART_DATA.len(),
            bytes_per_row(BIG_HEART_SIZE.width) * BIG_HEART_SIZE.height as usize
        );
        assert_eq!(
            DANCE_FRAME_1_DATA.len(),
            bytes_per_row(DANCE_FRAME_1_SIZE.width) * DANCE_FRAME_1_SIZE.height as usize
        );
        assert_eq!(
            DANCE_FRAME_2_DATA.len(),
            bytes_per_row(DANCE_FRAME_2_SIZE.width) * DANCE_FRAME_2_SIZE.height as usize
        );
    }

    #[test]
    fn test_image_raw_reports_declared_sizes() {
        assert_eq!(lady().size(), LADY_SIZE);
        assert_eq!(gentleman().size(), GENTLEMAN_SIZE);
        assert_eq!(small_heart().size(), SMALL_HEART_SIZE);
        assert_eq!(big_heart().size(), BIG_HEART_SIZE);
        assert_eq!(dance_frame_1().size(), DANCE_FRAME_1_SIZE);
        assert_eq!(dance_frame_2().size(), DANCE_FRAME_2_SIZE);
    }
}
