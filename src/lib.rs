//! Charm library - testable modules for the valentine charm.
//!
//! A touch on the sensor makes the charm wave its servo arm, light the cue
//! LED, scroll a randomly chosen message across the OLED, and play a short
//! dancing-couple animation. Between touches it loops a beating-heart idle
//! animation. All animation pacing runs through a single non-blocking
//! scheduler that is polled from one control loop.
//!
//! This library contains the core logic that can be tested on the host
//! machine. The binary (`main.rs`) uses this library and adds the
//! embedded-specific code (SSD1306 driver, servo PWM, touch edge task).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Timing
pub mod clock;

// Rendering
pub mod scenes;
pub mod screen;
pub mod sprites;

// Scheduling and sequencing
pub mod controller;
pub mod messages;
pub mod scheduler;
pub mod trigger;

// === ARM-only modules ===

// SSD1306 buffered-graphics screen binding (needs the display driver crate)
#[cfg(target_arch = "arm")]
pub mod oled;

// Shared fakes for the host test suite
#[cfg(test)]
pub(crate) mod testutil;
