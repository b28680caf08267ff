//! SG90 hobby servo driver over the RP2350 PWM slice.
//!
//! Standard hobby-servo signal: 50 Hz period with a 500..=2500 us pulse
//! mapping to 0..=180 degrees. The PWM counter is clocked at 1 MHz so the
//! compare value is the pulse width in microseconds.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::{block_for, Duration};
use fixed::traits::ToFixed;

use valentine_charm::config::{SERVO_MAX_DEG, SERVO_MIN_DEG, SERVO_STEP_MS, SERVO_WAVE_REST_DEG};
use valentine_charm::controller::Actuator;

/// 50 Hz period in 1 us ticks, minus one for the wrap.
const PERIOD_TOP: u16 = 19_999;

/// Pulse width at 0 degrees, in microseconds.
const PULSE_MIN_US: u32 = 500;

/// Pulse span across the full 180 degree range, in microseconds.
const PULSE_SPAN_US: u32 = 2_000;

/// SG90 on PWM channel A, swept one degree at a time.
pub struct Sg90<'d> {
    pwm: Pwm<'d>,
    cfg: Config,
    current_deg: u16,
}

impl<'d> Sg90<'d> {
    /// Take over a PWM slice and park the horn at the rest pose.
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut cfg = Config::default();
        // 1 MHz counter tick regardless of the system clock.
        let divider = (clk_sys_freq() / 1_000_000).clamp(1, 255);
        cfg.divider = divider.to_fixed();
        cfg.top = PERIOD_TOP;

        let mut servo = Self { pwm, cfg, current_deg: SERVO_WAVE_REST_DEG };
        servo.set_degrees(SERVO_WAVE_REST_DEG);
        servo
    }

    /// Pulse width in microseconds for a horn angle.
    fn pulse_for(degrees: u16) -> u16 {
        (PULSE_MIN_US + u32::from(degrees) * PULSE_SPAN_US / 180) as u16
    }

    /// Jump the pulse width to `degrees` immediately.
    fn set_degrees(&mut self, degrees: u16) {
        self.cfg.compare_a = Self::pulse_for(degrees);
        self.pwm.set_config(&self.cfg);
        self.current_deg = degrees;
    }
}

impl Actuator for Sg90<'_> {
    /// Sweep to `degrees` one degree per step so the motion reads as a
    /// wave, not a snap. Targets outside the safe range are clamped.
    fn move_to(&mut self, degrees: u16) {
        let target = degrees.clamp(SERVO_MIN_DEG, SERVO_MAX_DEG);
        while self.current_deg != target {
            let next = if self.current_deg < target {
                self.current_deg + 1
            } else {
                self.current_deg - 1
            };
            self.set_degrees(next);
            block_for(Duration::from_millis(u64::from(SERVO_STEP_MS)));
        }
    }
}
