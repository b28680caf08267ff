//! Display surface seam between the scheduler and the panel driver.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A monochrome pixel buffer the scheduler renders into.
///
/// Drawing goes through embedded-graphics: blits and text land in the
/// buffer via [`DrawTarget`], `clear(BinaryColor::Off)` blanks it, and
/// [`flush`](Screen::flush) pushes the finished frame to the panel. The
/// firmware implements this for the SSD1306 buffered graphics mode; the
/// test suite implements it with a recording fake.
pub trait Screen: DrawTarget<Color = BinaryColor> {
    /// Push the buffer contents to the panel.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
