//! Embedded application for the valentine charm (RP2350, Pico 2).
//!
//! # Wiring
//!
//! - **SSD1306 128x32 OLED**: I2C0, SDA on GPIO4, SCL on GPIO5, address 0x3C
//! - **Touch sensor (TTP223)**: digital out on GPIO2, active high
//! - **SG90 servo**: PWM on GPIO0 (slice 0, channel A)
//! - **Cue LED**: GPIO16
//!
//! # Architecture
//!
//! One async task per concern:
//! - Main task: control loop that feeds the animation scheduler and runs
//!   the greeting sequence when a touch is latched
//! - Touch task: awaits rising edges and stamps them into the shared latch
//!
//! The latch is lock-free, so the touch task never blocks on the control
//! loop even while a greeting plays.

mod servo;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::{block_for, Duration, Instant, Timer};
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use {defmt_rtt as _, panic_probe as _};

use valentine_charm::clock::{Clock, Millis};
use valentine_charm::config::{BOOT_SPLASH_MS, CONTROL_TICK_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use valentine_charm::controller::Controller;
use valentine_charm::screen::Screen;
use valentine_charm::sprites;
use valentine_charm::trigger::TriggerLatch;

use crate::app::servo::Sg90;

/// Touch latch shared between the edge task and the control loop.
static TOUCH_LATCH: TriggerLatch = TriggerLatch::new();

/// Monotonic clock over the embassy time driver.
struct BootClock;

impl Clock for BootClock {
    fn now(&self) -> Millis {
        Millis(Instant::now().as_millis())
    }

    fn pause(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Awaits touch edges and stamps them into the latch.
#[embassy_executor::task]
async fn touch_task(mut pad: Input<'static>) {
    info!("Touch task started");

    loop {
        pad.wait_for_rising_edge().await;
        let now_ms = Instant::now().as_millis() as u32;
        TOUCH_LATCH.notify(now_ms);
        info!("Touch edge at {} ms", now_ms);
    }
}

/// Show the big heart for a moment while the hardware settles.
fn boot_splash<S: Screen>(screen: &mut S) -> Result<(), S::Error> {
    screen.clear(BinaryColor::Off)?;
    let x = (SCREEN_WIDTH - sprites::BIG_HEART_SIZE.width) as i32 / 2;
    let y = (SCREEN_HEIGHT - sprites::BIG_HEART_SIZE.height) as i32 / 2;
    Image::new(&sprites::big_heart(), Point::new(x, y)).draw(screen)?;
    screen.flush()
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Valentine charm starting...");

    let p = embassy_rp::init(Default::default());

    // --- OLED over I2C0 (SDA=GPIO4, SCL=GPIO5) ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if let Err(e) = display.init() {
        // Keep running: the wave and the LED still work without the panel,
        // and per-frame flush errors are logged below.
        warn!("Display init failed: {}", defmt::Debug2Format(&e));
    }

    if let Err(e) = boot_splash(&mut display) {
        warn!("Boot splash failed: {}", defmt::Debug2Format(&e));
    }
    Timer::after_millis(BOOT_SPLASH_MS).await;

    // --- Touch sensor on GPIO2, active high ---
    let pad = Input::new(p.PIN_2, Pull::Down);
    spawner.spawn(touch_task(pad)).unwrap();

    // --- Cue LED on GPIO16 ---
    let mut led = Output::new(p.PIN_16, Level::Low);

    // --- SG90 servo on GPIO0 (PWM slice 0, channel A) ---
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, pwm::Config::default());
    let mut arm = Sg90::new(pwm);

    let mut clock = BootClock;
    let mut controller = Controller::new(&TOUCH_LATCH, Instant::now().as_ticks());

    info!("Entering control loop");
    loop {
        if let Err(e) = controller.tick(&mut display, &mut arm, &mut led, &mut clock) {
            warn!("Display error: {}", defmt::Debug2Format(&e));
        }
        Timer::after_millis(CONTROL_TICK_MS).await;
    }
}
