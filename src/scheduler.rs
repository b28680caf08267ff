//! Non-blocking animation scheduler.
//!
//! The scheduler owns at most one run at a time and is advanced by polling
//! it from the control loop with the current time. A poll that falls inside
//! the frame interval returns immediately without touching the display, so
//! the loop stays responsive to the touch latch while an animation plays.
//!
//! Two run kinds exist: a two-phase sprite run that alternates the payloads
//! of a [`Scene`] for a fixed number of iterations, and a marquee run that
//! steps a message leftwards until it has fully left the panel. A sprite run
//! may carry one follow-up run that starts the moment it exhausts.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::Millis;
use crate::config::{
    SCROLL_EXIT_MARGIN_PX, SCROLL_GLYPH_ADVANCE_PX, SCROLL_STEP_PX, SCROLL_TRAIL_MARGIN_PX,
};
use crate::scenes::{self, Scene};
use crate::screen::Screen;

/// Description of a two-phase sprite animation.
///
/// One iteration shows `payload_a` then `payload_b`, each for one frame
/// interval. The description is plain data so callers can keep them in
/// `const fn` constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteAnimation {
    /// Scene to draw.
    pub scene: Scene,
    /// Payload for the first phase of each iteration.
    pub payload_a: &'static str,
    /// Payload for the second phase of each iteration.
    pub payload_b: &'static str,
    /// Iterations before the run exhausts.
    pub iterations: u32,
    /// Milliseconds between frames.
    pub frame_interval_ms: u64,
}

/// Live state of a sprite run.
#[derive(Clone, Copy, Debug)]
struct SpriteRun {
    anim: SpriteAnimation,
    /// Completed iterations. Incremented only when the second phase ends.
    iteration: u32,
    /// True while the next due frame is the first phase.
    first_phase: bool,
    last_frame: Millis,
    /// Run to start when this one exhausts.
    follow_up: Option<SpriteAnimation>,
}

/// Live state of a marquee run.
#[derive(Clone, Copy, Debug)]
struct ScrollRun {
    text: &'static str,
    cursor_x: i32,
    /// Cursor position at which the tail has fully left the panel.
    exit_x: i32,
    frame_interval_ms: u64,
    last_frame: Millis,
}

/// What the scheduler is currently doing.
#[derive(Clone, Copy, Debug, Default)]
enum Run {
    #[default]
    Idle,
    Sprite(SpriteRun),
    Scroll(ScrollRun),
}

/// Pixel span a marquee message occupies, including its trailing margin.
///
/// The measured width is floored by a per-glyph estimate so a degenerate
/// measurement can never cut a scroll short.
fn scroll_span_px(text: &str) -> i32 {
    let measured = scenes::measured_text_width(text);
    let estimated = text.len() as i32 * SCROLL_GLYPH_ADVANCE_PX;
    measured.max(estimated) + SCROLL_TRAIL_MARGIN_PX
}

/// Single-slot animation scheduler polled from the control loop.
#[derive(Debug, Default)]
pub struct Scheduler {
    run: Run,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self { run: Run::Idle }
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.run, Run::Idle)
    }

    /// Start a sprite run, replacing whatever was playing.
    ///
    /// The first frame is not drawn here; it becomes due one frame interval
    /// after `now`, which keeps every frame on the same cadence.
    pub fn start(&mut self, anim: SpriteAnimation, follow_up: Option<SpriteAnimation>, now: Millis) {
        self.run = Run::Sprite(SpriteRun {
            anim,
            iteration: 0,
            first_phase: true,
            last_frame: now,
            follow_up,
        });
    }

    /// Start a marquee run, replacing whatever was playing.
    pub fn start_scroll(&mut self, text: &'static str, frame_interval_ms: u64, now: Millis) {
        self.run = Run::Scroll(ScrollRun {
            text,
            cursor_x: scenes::marquee_start_x(),
            exit_x: -(scroll_span_px(text) + SCROLL_EXIT_MARGIN_PX),
            frame_interval_ms,
            last_frame: now,
        });
    }

    /// Abandon the current run, follow-up included, and blank the panel.
    pub fn stop<S: Screen>(&mut self, screen: &mut S) -> Result<(), S::Error> {
        self.run = Run::Idle;
        screen.clear(BinaryColor::Off)?;
        screen.flush()
    }

    /// Advance the current run if its next frame is due.
    ///
    /// Returns without drawing when idle or when the frame interval has not
    /// elapsed. Run state is committed before the fallible draw so a display
    /// error cannot double-advance a frame on the retry.
    pub fn poll<S: Screen>(&mut self, screen: &mut S, now: Millis) -> Result<(), S::Error> {
        match core::mem::replace(&mut self.run, Run::Idle) {
            Run::Idle => Ok(()),
            Run::Sprite(run) => self.poll_sprite(run, screen, now),
            Run::Scroll(run) => self.poll_scroll(run, screen, now),
        }
    }

    fn poll_sprite<S: Screen>(
        &mut self,
        mut run: SpriteRun,
        screen: &mut S,
        now: Millis,
    ) -> Result<(), S::Error> {
        if now.since(run.last_frame) < run.anim.frame_interval_ms {
            self.run = Run::Sprite(run);
            return Ok(());
        }

        // Exhaustion is detected one interval after the final frame, so the
        // last frame stays visible for its full duration before the blank.
        if run.iteration >= run.anim.iterations {
            match run.follow_up.take() {
                // Chain with a fresh baseline so the follow-up's first frame
                // gets a full interval, not the remainder of this one.
                Some(next) => self.start(next, None, now),
                None => self.run = Run::Idle,
            }
            screen.clear(BinaryColor::Off)?;
            return screen.flush();
        }

        let scene = run.anim.scene;
        let payload = if run.first_phase { run.anim.payload_a } else { run.anim.payload_b };

        // Commit the post-frame state first; the draw below may fail.
        if run.first_phase {
            run.first_phase = false;
        } else {
            run.first_phase = true;
            run.iteration += 1;
        }
        run.last_frame = now;
        self.run = Run::Sprite(run);

        screen.clear(BinaryColor::Off)?;
        scene.draw(screen, payload)?;
        screen.flush()
    }

    fn poll_scroll<S: Screen>(
        &mut self,
        mut run: ScrollRun,
        screen: &mut S,
        now: Millis,
    ) -> Result<(), S::Error> {
        if now.since(run.last_frame) < run.frame_interval_ms {
            self.run = Run::Scroll(run);
            return Ok(());
        }

        let text = run.text;
        let cursor_x = run.cursor_x;

        run.cursor_x -= SCROLL_STEP_PX;
        run.last_frame = now;

        if cursor_x <= run.exit_x {
            // Terminal frame: the text is gone, leave the panel blank.
            self.run = Run::Idle;
            screen.clear(BinaryColor::Off)?;
            return screen.flush();
        }
        self.run = Run::Scroll(run);

        screen.clear(BinaryColor::Off)?;
        scenes::draw_marquee(screen, text, cursor_x)?;
        screen.flush()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_WIDTH;
    use crate::scenes::{DANCE_FRAME_1, DANCE_FRAME_2, HEART_BIG, HEART_SMALL};
    use crate::testutil::TestScreen;

    fn hearts(iterations: u32) -> SpriteAnimation {
        SpriteAnimation {
            scene: Scene::Hearts,
            payload_a: HEART_SMALL,
            payload_b: HEART_BIG,
            iterations,
            frame_interval_ms: 100,
        }
    }

    fn dance(iterations: u32) -> SpriteAnimation {
        SpriteAnimation {
            scene: Scene::Dance,
            payload_a: DANCE_FRAME_1,
            payload_b: DANCE_FRAME_2,
            iterations,
            frame_interval_ms: 50,
        }
    }

    /// Pixel count a scene phase produces when drawn directly.
    fn reference_pixels(scene: Scene, payload: &str) -> u32 {
        let mut screen = TestScreen::new();
        scene.draw(&mut screen, payload).unwrap();
        screen.lit_since_clear
    }

    #[test]
    fn test_new_scheduler_is_idle() {
        let sched = Scheduler::new();
        assert!(!sched.is_active());
    }

    #[test]
    fn test_poll_before_interval_draws_nothing() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(2), None, Millis(0));

        sched.poll(&mut screen, Millis(99)).unwrap();

        assert!(sched.is_active());
        assert!(screen.frames.is_empty(), "no frame should flush before the interval");
    }

    #[test]
    fn test_frame_due_at_exact_interval() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(2), None, Millis(0));

        sched.poll(&mut screen, Millis(100)).unwrap();

        assert_eq!(screen.frames.len(), 1, "frame must be due at exactly one interval");
    }

    #[test]
    fn test_sprite_run_alternates_phases_and_exhausts() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(3), None, Millis(0));

        let mut t = 0;
        for _ in 0..10 {
            t += 100;
            sched.poll(&mut screen, Millis(t)).unwrap();
        }

        // 3 iterations of 2 phases = 6 frames, then one terminal blank.
        assert!(!sched.is_active(), "run must exhaust after the final phase");

        let small = reference_pixels(Scene::Hearts, HEART_SMALL);
        let big = reference_pixels(Scene::Hearts, HEART_BIG);
        assert_eq!(screen.frames, vec![small, big, small, big, small, big, 0]);
    }

    #[test]
    fn test_start_replaces_running_animation() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(100), None, Millis(0));
        sched.poll(&mut screen, Millis(100)).unwrap();

        sched.start(dance(1), None, Millis(100));
        sched.poll(&mut screen, Millis(150)).unwrap();
        sched.poll(&mut screen, Millis(200)).unwrap();
        sched.poll(&mut screen, Millis(250)).unwrap();

        assert!(!sched.is_active(), "replacement run must play to exhaustion");
        let frame1 = reference_pixels(Scene::Dance, DANCE_FRAME_1);
        let frame2 = reference_pixels(Scene::Dance, DANCE_FRAME_2);
        assert_eq!(screen.frames[1], frame1);
        assert_eq!(screen.frames[2], frame2);
        assert_eq!(*screen.frames.last().unwrap(), 0, "exhaustion blanks the panel");
    }

    #[test]
    fn test_follow_up_starts_once_with_fresh_baseline() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(1), None, Millis(0));
        // Hand the follow-up in via a second start to prove replacement
        // keeps the chaining slot coherent.
        sched.start(hearts(1), Some(dance(1)), Millis(0));

        sched.poll(&mut screen, Millis(100)).unwrap();
        sched.poll(&mut screen, Millis(200)).unwrap();
        // Exhaustion poll: blank frame, follow-up installed.
        sched.poll(&mut screen, Millis(300)).unwrap();
        assert!(sched.is_active(), "follow-up must be running after the chain");

        // The follow-up's baseline is the chaining instant (t=300), so its
        // first frame is due at 300 + 50, not immediately.
        let frames_before = screen.frames.len();
        sched.poll(&mut screen, Millis(310)).unwrap();
        assert_eq!(screen.frames.len(), frames_before, "follow-up frame not due yet");

        sched.poll(&mut screen, Millis(350)).unwrap();
        sched.poll(&mut screen, Millis(400)).unwrap();
        sched.poll(&mut screen, Millis(450)).unwrap();
        assert!(!sched.is_active(), "follow-up must exhaust and not restart");
        assert_eq!(screen.rendered_frames(), 4, "1 iteration each of two chained runs");
    }

    #[test]
    fn test_stop_blanks_panel_and_drops_follow_up() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(1), Some(dance(5)), Millis(0));
        sched.poll(&mut screen, Millis(100)).unwrap();

        sched.stop(&mut screen).unwrap();

        assert!(!sched.is_active());
        assert_eq!(*screen.frames.last().unwrap(), 0, "stop must flush a blank frame");

        // Nothing resumes afterwards.
        sched.poll(&mut screen, Millis(1_000)).unwrap();
        assert!(!sched.is_active());
    }

    #[test]
    fn test_scroll_runs_to_full_exit() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        let text = "XOXO";
        sched.start_scroll(text, 30, Millis(0));

        let mut t = 0;
        let mut polls = 0;
        while sched.is_active() {
            t += 30;
            sched.poll(&mut screen, Millis(t)).unwrap();
            polls += 1;
            assert!(polls < 1_000, "scroll must terminate");
        }

        // Text frames are the cursor positions from the right edge down to
        // the exit threshold, then one terminal blank flush.
        let span = scroll_span_px(text);
        let travel = SCREEN_WIDTH as i32 + span + SCROLL_EXIT_MARGIN_PX;
        let expected_rendered = (travel + SCROLL_STEP_PX - 1) / SCROLL_STEP_PX;
        assert_eq!(screen.rendered_frames() as i32, expected_rendered);
        assert_eq!(*screen.frames.last().unwrap(), 0, "terminal frame must be blank");
    }

    #[test]
    fn test_scroll_span_has_glyph_floor() {
        // The floor only bites when the estimate beats the measurement, so
        // check the invariant rather than which side won.
        let text = "LOVE YOU";
        let span = scroll_span_px(text);
        assert!(span >= text.len() as i32 * SCROLL_GLYPH_ADVANCE_PX + SCROLL_TRAIL_MARGIN_PX);
        assert!(span >= scenes::measured_text_width(text) + SCROLL_TRAIL_MARGIN_PX);
    }

    #[test]
    fn test_repeated_poll_at_same_instant_renders_once() {
        let mut sched = Scheduler::new();
        let mut screen = TestScreen::new();
        sched.start(hearts(1), None, Millis(0));

        sched.poll(&mut screen, Millis(100)).unwrap();
        sched.poll(&mut screen, Millis(100)).unwrap();

        assert_eq!(screen.frames.len(), 1, "same-instant repoll must not double-render");
    }
}
