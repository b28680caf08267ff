//! Frame composition for the charm's sprite scenes and the marquee text.
//!
//! A [`Scene`] names a fixed sprite layout; the payload string selects which
//! phase of the scene to draw. The scheduler alternates payloads to animate,
//! so drawing here is stateless: clear, draw, flush happens in the caller.

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_18_POINT;

use crate::config::{SCROLL_TEXT_Y, SCREEN_WIDTH};
use crate::sprites;

// =============================================================================
// Payload Selectors
// =============================================================================

/// Hearts scene payload: draw the small heart between the couple.
pub const HEART_SMALL: &str = "small";

/// Hearts scene payload: draw the big heart between the couple.
pub const HEART_BIG: &str = "big";

/// Dance scene payload: first dancing-couple frame.
pub const DANCE_FRAME_1: &str = "frame1";

/// Dance scene payload: second dancing-couple frame.
pub const DANCE_FRAME_2: &str = "frame2";

// =============================================================================
// Sprite Placement
// =============================================================================

/// Lady position in the hearts scene.
const LADY_POS: Point = Point::new(96, 8);

/// Gentleman position in the hearts scene.
const GENTLEMAN_POS: Point = Point::new(114, 8);

/// Small heart position between the couple.
const SMALL_HEART_POS: Point = Point::new(104, 4);

/// Big heart position between the couple.
const BIG_HEART_POS: Point = Point::new(102, 4);

/// First dance frame position.
const DANCE_FRAME_1_POS: Point = Point::new(0, 0);

/// Second dance frame position.
const DANCE_FRAME_2_POS: Point = Point::new(4, 0);

/// A sprite scene the scheduler can play.
///
/// Scenes are a closed set so a run can be stored and compared by value; the
/// payload string picks the phase within the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Couple on the right edge with a beating heart between them.
    Hearts,
    /// Dancing couple filling the left side of the panel.
    Dance,
}

impl Scene {
    /// Draw one phase of the scene into `display`.
    ///
    /// An unrecognized payload draws the scene without its variable part, so
    /// a bad selector degrades to a still frame instead of an error.
    pub fn draw<D>(self, display: &mut D, payload: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            Scene::Hearts => {
                Image::new(&sprites::lady(), LADY_POS).draw(display)?;
                Image::new(&sprites::gentleman(), GENTLEMAN_POS).draw(display)?;
                if payload == HEART_BIG {
                    Image::new(&sprites::big_heart(), BIG_HEART_POS).draw(display)?;
                } else if payload == HEART_SMALL {
                    Image::new(&sprites::small_heart(), SMALL_HEART_POS).draw(display)?;
                }
                Ok(())
            }
            Scene::Dance => {
                if payload == DANCE_FRAME_2 {
                    Image::new(&sprites::dance_frame_2(), DANCE_FRAME_2_POS).draw(display)
                } else {
                    Image::new(&sprites::dance_frame_1(), DANCE_FRAME_1_POS).draw(display)
                }
            }
        }
    }
}

// =============================================================================
// Marquee Text
// =============================================================================

/// Text style used by the marquee and by width measurement.
fn marquee_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&PROFONT_18_POINT, BinaryColor::On)
}

/// Draw the marquee message with its left edge at `cursor_x`.
pub fn draw_marquee<D>(display: &mut D, text: &str, cursor_x: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(
        text,
        Point::new(cursor_x, SCROLL_TEXT_Y),
        marquee_style(),
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

/// Rendered pixel width of `text` in the marquee font.
pub fn measured_text_width(text: &str) -> i32 {
    Text::with_baseline(text, Point::zero(), marquee_style(), Baseline::Top)
        .bounding_box()
        .size
        .width as i32
}

/// Starting cursor for a marquee run: just past the right edge.
pub const fn marquee_start_x() -> i32 {
    SCREEN_WIDTH as i32
}

// =============================================================================
// Unit Tests
// =============================================================================
