//! Message pool for the scrolling greeting.

use rand::Rng;

/// Messages the charm can scroll after a touch.
pub const MESSAGES: [&str; 6] =
    ["BE MINE", "XOXO", "SWEETHEART", "HUG ME", "LOVE YOU", "CUTIE PIE"];

/// Pick one message uniformly at random.
pub fn pick<R: Rng>(rng: &mut R) -> &'static str {
    MESSAGES[rng.gen_range(0..MESSAGES.len())]
}

// =============================================================================
// Unit Tests
// =============================================================================
