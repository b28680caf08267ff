//! Valentine charm firmware entry point.
//!
//! The binary only exists for the RP2350 target; all behavior lives in the
//! library so it can be tested on the host. Building for the host produces
//! an empty stub so `cargo test` works without the ARM toolchain.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod app;

#[cfg(not(target_arch = "arm"))]
fn main() {}
