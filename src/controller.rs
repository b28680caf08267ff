//! Top-level behavior: the idle loop and the touch greeting sequence.
//!
//! The control loop calls [`Controller::tick`] forever. Each tick either
//! services a pending touch with the full greeting sequence or keeps the
//! idle hearts animation fed. The greeting is the one place the charm
//! blocks: the wave, the scrolled message and the dance play to completion
//! before the idle loop resumes, and touches arriving in between are
//! absorbed rather than queued.

use embedded_hal::digital::OutputPin;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro128PlusPlus;

use crate::clock::Clock;
use crate::config::{
    DANCE_FRAME_INTERVAL_MS, DANCE_ITERATIONS, DRAIN_POLL_MS, IDLE_FRAME_INTERVAL_MS,
    IDLE_ITERATIONS, SCROLL_FRAME_INTERVAL_MS, SERVO_WAVE_RAISED_DEG, SERVO_WAVE_REST_DEG,
    TOUCH_RELEASE_MS, WAVE_HOLD_MS,
};
use crate::messages;
use crate::scenes::{self, Scene};
use crate::scheduler::{Scheduler, SpriteAnimation};
use crate::screen::Screen;
use crate::trigger::TriggerLatch;

/// Positioning actuator for the waving arm.
///
/// The firmware implements this for the SG90 PWM driver; tests record the
/// requested poses.
pub trait Actuator {
    /// Move the horn to `degrees`, blocking until the sweep completes.
    fn move_to(&mut self, degrees: u16);
}

/// The idle beating-hearts run. Restarted on exhaustion by [`Controller::tick`].
pub const fn idle_animation() -> SpriteAnimation {
    SpriteAnimation {
        scene: Scene::Hearts,
        payload_a: scenes::HEART_SMALL,
        payload_b: scenes::HEART_BIG,
        iterations: IDLE_ITERATIONS,
        frame_interval_ms: IDLE_FRAME_INTERVAL_MS,
    }
}

/// The dancing-couple finale played at the end of a greeting.
pub const fn dance_animation() -> SpriteAnimation {
    SpriteAnimation {
        scene: Scene::Dance,
        payload_a: scenes::DANCE_FRAME_1,
        payload_b: scenes::DANCE_FRAME_2,
        iterations: DANCE_ITERATIONS,
        frame_interval_ms: DANCE_FRAME_INTERVAL_MS,
    }
}

/// Charm behavior state machine, polled from the control loop.
pub struct Controller<'a> {
    scheduler: Scheduler,
    latch: &'a TriggerLatch,
    rng: Xoshiro128PlusPlus,
}

impl<'a> Controller<'a> {
    /// Build a controller over the shared touch latch.
    ///
    /// `seed` only has to differ between boots, not be cryptographic; the
    /// firmware passes the boot timestamp tick count.
    pub fn new(latch: &'a TriggerLatch, seed: u64) -> Self {
        Self {
            scheduler: Scheduler::new(),
            latch,
            rng: Xoshiro128PlusPlus::seed_from_u64(seed),
        }
    }

    /// Whether an animation run is currently playing.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Advance the charm by one control-loop tick.
    ///
    /// A pending touch preempts whatever is playing and runs the greeting
    /// to completion. Otherwise the idle run is restarted if it exhausted
    /// and the scheduler is polled once.
    pub fn tick<S, A, L, C>(
        &mut self,
        screen: &mut S,
        servo: &mut A,
        led: &mut L,
        clock: &mut C,
    ) -> Result<(), S::Error>
    where
        S: Screen,
        A: Actuator,
        L: OutputPin,
        C: Clock,
    {
        if self.latch.take() {
            return self.run_greeting(screen, servo, led, clock);
        }
        if !self.scheduler.is_active() {
            self.scheduler.start(idle_animation(), None, clock.now());
        }
        self.scheduler.poll(screen, clock.now())
    }

    /// Run the full greeting: LED on, wave, scrolled message, dance, LED off.
    ///
    /// The LED is lowered even when a display error aborts the sequence, and
    /// the latch is cleared only after the pad has gone quiet so a held
    /// finger cannot retrigger an endless greeting loop.
    fn run_greeting<S, A, L, C>(
        &mut self,
        screen: &mut S,
        servo: &mut A,
        led: &mut L,
        clock: &mut C,
    ) -> Result<(), S::Error>
    where
        S: Screen,
        A: Actuator,
        L: OutputPin,
        C: Clock,
    {
        let _ = led.set_high();

        let result = self.greeting_phases(screen, servo, clock);

        let _ = led.set_low();
        self.wait_for_touch_release(clock);
        self.latch.clear();
        result
    }

    fn greeting_phases<S, A, C>(
        &mut self,
        screen: &mut S,
        servo: &mut A,
        clock: &mut C,
    ) -> Result<(), S::Error>
    where
        S: Screen,
        A: Actuator,
        C: Clock,
    {
        servo.move_to(SERVO_WAVE_RAISED_DEG);
        clock.pause(WAVE_HOLD_MS);
        servo.move_to(SERVO_WAVE_REST_DEG);
        clock.pause(WAVE_HOLD_MS);

        let message = messages::pick(&mut self.rng);
        self.scheduler.start_scroll(message, SCROLL_FRAME_INTERVAL_MS, clock.now());
        self.drain(screen, clock)?;

        self.scheduler.start(dance_animation(), None, clock.now());
        self.drain(screen, clock)
    }

    /// Block-poll the current run to completion.
    fn drain<S, C>(&mut self, screen: &mut S, clock: &mut C) -> Result<(), S::Error>
    where
        S: Screen,
        C: Clock,
    {
        while self.scheduler.is_active() {
            self.scheduler.poll(screen, clock.now())?;
            clock.pause(DRAIN_POLL_MS);
        }
        Ok(())
    }

    /// Wait until the touch pad has seen no edges for the release window.
    fn wait_for_touch_release<C: Clock>(&self, clock: &mut C) {
        loop {
            if self.latch.edges() == 0 {
                return;
            }
            let now_ms = clock.now().0 as u32;
            if now_ms.wrapping_sub(self.latch.last_edge_ms()) >= TOUCH_RELEASE_MS {
                return;
            }
            clock.pause(DRAIN_POLL_MS);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
