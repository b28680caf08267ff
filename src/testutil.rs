//! Shared fakes for the host test suite.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::screen::Screen;

/// Recording display fake.
///
/// Instead of keeping a pixel buffer it counts the lit pixels drawn since
/// the last clear and records that count per flushed frame. The counts are
/// enough to tell frames apart (the scene phases all differ in pixel count)
/// without pinning tests to exact sprite artwork.
pub(crate) struct TestScreen {
    /// Lit pixels drawn since the last clear, clipping ignored.
    pub(crate) lit_since_clear: u32,
    /// Clears issued so far.
    pub(crate) clears: u32,
    /// Lit-pixel count of every flushed frame, in order.
    pub(crate) frames: Vec<u32>,
}

impl TestScreen {
    pub(crate) fn new() -> Self {
        Self { lit_since_clear: 0, clears: 0, frames: Vec::new() }
    }

    /// Flushed frames that actually show something.
    pub(crate) fn rendered_frames(&self) -> usize {
        self.frames.iter().filter(|lit| **lit > 0).count()
    }
}

impl OriginDimensions for TestScreen {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for TestScreen {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(_, color) in pixels {
            if color == BinaryColor::On {
                self.lit_since_clear += 1;
            }
        }
        Ok(())
    }

    fn clear(&mut self, _color: Self::Color) -> Result<(), Self::Error> {
        self.lit_since_clear = 0;
        self.clears += 1;
        Ok(())
    }
}

impl Screen for TestScreen {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.frames.push(self.lit_since_clear);
        Ok(())
    }
}
