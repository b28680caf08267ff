//! Application configuration constants.
//!
//! All timing, geometry and pose values live here so the control loop and
//! the animation code never carry magic numbers. Everything is `const` and
//! computed at compile time.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x32 module).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 32;

// =============================================================================
// Control Loop
// =============================================================================

/// Sleep between control-loop ticks. The scheduler itself is non-blocking,
/// so this is the only place the idle loop yields.
pub const CONTROL_TICK_MS: u64 = 5;

/// Pause between scheduler polls while the greeting sequence block-polls a
/// run to completion.
pub const DRAIN_POLL_MS: u32 = 5;

/// How long the boot splash frame stays on screen before the first clear.
pub const BOOT_SPLASH_MS: u64 = 2_000;

// =============================================================================
// Idle Animation (beating hearts)
// =============================================================================

/// Frame interval of the idle hearts animation.
pub const IDLE_FRAME_INTERVAL_MS: u64 = 500;

/// Iterations per idle run. The run is restarted on exhaustion, so this only
/// bounds how often the counters reset, not how long the idle loop plays.
pub const IDLE_ITERATIONS: u32 = 100;

// =============================================================================
// Dance Animation (triggered finale)
// =============================================================================

/// Frame interval of the dancing-couple animation.
pub const DANCE_FRAME_INTERVAL_MS: u64 = 300;

/// Iterations of the dancing-couple animation (one iteration = both frames).
pub const DANCE_ITERATIONS: u32 = 12;

// =============================================================================
// Marquee (scrolling message)
// =============================================================================

/// Frame interval of the scrolling message. Smaller = faster scrolling.
pub const SCROLL_FRAME_INTERVAL_MS: u64 = 30;

/// Pixels the message moves left per frame.
pub const SCROLL_STEP_PX: i32 = 3;

/// Per-glyph advance estimate for the scroll font, used as a floor under the
/// measured text width in case the measurement comes up short.
pub const SCROLL_GLYPH_ADVANCE_PX: i32 = 12;

/// Trailing margin added to the message span so the tail fully clears.
pub const SCROLL_TRAIL_MARGIN_PX: i32 = 20;

/// Extra exit margin past the left edge before the run terminates.
pub const SCROLL_EXIT_MARGIN_PX: i32 = 40;

/// Top edge of the scroll text, centering the 22 px tall font on 32 rows.
pub const SCROLL_TEXT_Y: i32 = 5;

// =============================================================================
// Touch Sensor
// =============================================================================

/// Edges arriving closer together than this are treated as contact bounce
/// and do not re-arm the trigger latch.
pub const TOUCH_DEBOUNCE_MS: u32 = 200;

/// Quiet window with no touch edges required before the greeting sequence
/// hands control back to the idle loop.
pub const TOUCH_RELEASE_MS: u32 = 300;

// =============================================================================
// Servo
// =============================================================================

/// Lower bound of the safe horn range; targets below are clamped.
pub const SERVO_MIN_DEG: u16 = 10;

/// Upper bound of the safe horn range; targets above are clamped.
pub const SERVO_MAX_DEG: u16 = 170;

/// Raised wave pose used by the greeting sequence.
pub const SERVO_WAVE_RAISED_DEG: u16 = 150;

/// Rest pose the arm returns to after the wave.
pub const SERVO_WAVE_REST_DEG: u16 = 30;

/// Delay between one-degree servo steps; sets the sweep speed.
pub const SERVO_STEP_MS: u32 = 15;

/// Hold time at each wave pose before the next motion.
pub const WAVE_HOLD_MS: u32 = 400;
