//! [`Screen`] binding for the SSD1306 buffered graphics driver.

use display_interface::WriteOnlyDataCommand;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::size::DisplaySize;
use ssd1306::Ssd1306;

use crate::screen::Screen;

impl<DI, SIZE> Screen for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ssd1306::flush(self)
    }
}
